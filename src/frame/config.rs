//! Frame configuration loaded from JSON
//!
//! Every field has a default, so a JSON file only needs the values it
//! changes. An empty object `{}` describes the reference frame:
//!
//! ```json
//! {
//!   "num_bays": 2,
//!   "num_floors": 7,
//!   "bay_width": 360.0,
//!   "story_heights": [162.0, 162.0, 156.0, 156.0, 156.0, 156.0, 156.0],
//!   "e": 29500.0,
//!   "floor_mass": 0.49,
//!   "transf": "Linear",
//!   "num_modes": 7
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::SystemKind;
use crate::elements::{CoordTransf, MassType, Section};
use crate::error::{FEAError, FEAResult};

use super::sections::{self, w_sections};

/// Lateral load applied at one floor of the load line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorLoad {
    /// Floor index, 1 = first elevated floor
    pub floor: usize,
    /// Horizontal force
    pub fx: f64,
}

impl FloorLoad {
    pub fn new(floor: usize, fx: f64) -> Self {
        Self { floor, fx }
    }
}

/// Geometry, properties and analysis settings of a multi-story frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub num_bays: usize,
    pub num_floors: usize,
    pub bay_width: f64,
    /// Story heights from the base up
    pub story_heights: Vec<f64>,
    /// Elastic modulus
    pub e: f64,
    /// Horizontal mass lumped at each floor's reference node
    pub floor_mass: f64,
    /// Vertical and rotational mass at the reference nodes
    pub negligible_mass: f64,
    /// Element mass per unit length
    pub element_mass: f64,
    pub mass_type: MassType,
    pub transf: CoordTransf,
    /// Bay line whose node carries the floor mass and retains the rigid floor
    pub reference_bay: usize,
    /// Column line that receives the lateral loads and is monitored
    pub load_line: usize,
    pub sections: BTreeMap<String, Section>,
    /// Beam section per floor
    pub beams: Vec<String>,
    /// Column sections per column line, base story first
    pub columns: Vec<Vec<String>>,
    /// Lateral loads in application order
    pub lateral_loads: Vec<FloorLoad>,
    pub num_modes: usize,
    pub system: SystemKind,
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for FrameConfig {
    fn default() -> Self {
        let exterior = names(&[
            "W14X246", "W14X246", "W14X246", "W14X211", "W14X211", "W14X176", "W14X176",
        ]);
        let interior = names(&[
            "W14X287", "W14X287", "W14X287", "W14X246", "W14X246", "W14X211", "W14X211",
        ]);

        Self {
            num_bays: 2,
            num_floors: 7,
            bay_width: 360.0,
            story_heights: vec![162.0, 162.0, 156.0, 156.0, 156.0, 156.0, 156.0],
            e: 29500.0,
            floor_mass: 0.49,
            negligible_mass: 1.0e-10,
            element_mass: 0.0,
            mass_type: MassType::Lumped,
            transf: CoordTransf::Linear,
            reference_bay: 1,
            load_line: 0,
            sections: w_sections(),
            beams: names(&[
                "W24X160", "W24X160", "W24X130", "W24X130", "W24X110", "W24X110", "W24X110",
            ]),
            columns: vec![exterior.clone(), interior, exterior],
            lateral_loads: vec![
                FloorLoad::new(7, 20.0),
                FloorLoad::new(6, 15.0),
                FloorLoad::new(5, 12.5),
                FloorLoad::new(4, 10.0),
                FloorLoad::new(3, 7.5),
                FloorLoad::new(2, 5.0),
                FloorLoad::new(1, 2.5),
            ],
            num_modes: 7,
            system: SystemKind::ProfileSpd,
        }
    }
}

impl FrameConfig {
    /// Parse a configuration from JSON text and validate it
    pub fn from_json_str(json: &str) -> FEAResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file and validate it
    pub fn from_json_file(path: impl AsRef<Path>) -> FEAResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> FEAResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Section of a column
    pub fn column_section(&self, line: usize, story: usize) -> FEAResult<Section> {
        let name = self
            .columns
            .get(line)
            .and_then(|c| c.get(story))
            .ok_or_else(|| FEAError::InvalidInput(format!("no column section for line {line}, story {story}")))?;
        sections::lookup(&self.sections, name)
    }

    /// Section of the beams on a floor (1-based)
    pub fn beam_section(&self, floor: usize) -> FEAResult<Section> {
        let name = floor
            .checked_sub(1)
            .and_then(|i| self.beams.get(i))
            .ok_or_else(|| FEAError::InvalidInput(format!("no beam section for floor {floor}")))?;
        sections::lookup(&self.sections, name)
    }

    /// Height of a floor above the base
    pub fn floor_elevation(&self, floor: usize) -> f64 {
        self.story_heights.iter().take(floor).sum()
    }

    /// Check list lengths, ranges and section names
    pub fn validate(&self) -> FEAResult<()> {
        let invalid = |msg: String| -> FEAResult<()> { Err(FEAError::InvalidInput(msg)) };

        if self.num_bays == 0 || self.num_floors == 0 {
            return invalid("frame needs at least one bay and one floor".to_string());
        }
        if !(self.bay_width > 0.0) {
            return invalid(format!("bay width must be positive, got {}", self.bay_width));
        }
        if self.story_heights.len() != self.num_floors {
            return invalid(format!(
                "{} story heights for {} floors",
                self.story_heights.len(),
                self.num_floors
            ));
        }
        if let Some(h) = self.story_heights.iter().find(|h| !(**h > 0.0)) {
            return invalid(format!("story height must be positive, got {h}"));
        }
        if !(self.e > 0.0) {
            return invalid(format!("elastic modulus must be positive, got {}", self.e));
        }
        if !(self.floor_mass > 0.0) {
            return invalid(format!("floor mass must be positive, got {}", self.floor_mass));
        }
        if self.negligible_mass < 0.0 || self.element_mass < 0.0 {
            return invalid("masses cannot be negative".to_string());
        }
        if self.reference_bay > self.num_bays {
            return invalid(format!(
                "reference bay {} outside 0..={}",
                self.reference_bay, self.num_bays
            ));
        }
        if self.load_line > self.num_bays {
            return invalid(format!("load line {} outside 0..={}", self.load_line, self.num_bays));
        }
        if self.beams.len() != self.num_floors {
            return invalid(format!(
                "{} beam sections for {} floors",
                self.beams.len(),
                self.num_floors
            ));
        }
        if self.columns.len() != self.num_bays + 1 {
            return invalid(format!(
                "{} column lines for {} bays",
                self.columns.len(),
                self.num_bays
            ));
        }
        for (line, column) in self.columns.iter().enumerate() {
            if column.len() != self.num_floors {
                return invalid(format!(
                    "column line {line} has {} sections for {} stories",
                    column.len(),
                    self.num_floors
                ));
            }
        }
        for name in self.beams.iter().chain(self.columns.iter().flatten()) {
            sections::lookup(&self.sections, name)?;
        }
        for load in &self.lateral_loads {
            if load.floor == 0 || load.floor > self.num_floors {
                return invalid(format!("lateral load on floor {} outside 1..={}", load.floor, self.num_floors));
            }
        }
        if self.num_modes == 0 {
            return invalid("at least one mode is required".to_string());
        }
        Ok(())
    }
}
