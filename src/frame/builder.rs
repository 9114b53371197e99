//! Frame model builder
//!
//! Tags follow fixed traversal counters: nodes floor by floor from the base,
//! left to right within a floor; columns line by line from the base up;
//! beams floor by floor, left to right, continuing the element counter.

use log::{debug, info};

use crate::elements::{Dof, ElasticBeamColumn, Fixity, NodalMass, Node};
use crate::error::FEAResult;
use crate::model::FrameModel;

use super::config::FrameConfig;

/// Tag of the single coordinate transformation shared by every element
pub const TRANSF_TAG: u32 = 1;

/// Tag arithmetic of a regular frame grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub num_bays: usize,
    pub num_floors: usize,
    pub reference_bay: usize,
}

impl FrameLayout {
    pub fn new(num_bays: usize, num_floors: usize, reference_bay: usize) -> Self {
        Self {
            num_bays,
            num_floors,
            reference_bay,
        }
    }

    pub fn from_config(config: &FrameConfig) -> Self {
        Self::new(config.num_bays, config.num_floors, config.reference_bay)
    }

    /// Nodes (column lines) per floor
    pub fn nodes_per_floor(&self) -> usize {
        self.num_bays + 1
    }

    /// Node at `floor` (0 = base) on column `line`
    pub fn node_tag(&self, floor: usize, line: usize) -> u32 {
        (floor * self.nodes_per_floor() + line + 1) as u32
    }

    /// Column on `line` spanning `story` (0 = base story)
    pub fn column_tag(&self, line: usize, story: usize) -> u32 {
        (line * self.num_floors + story + 1) as u32
    }

    /// Beam on `floor` (1-based) spanning `bay`
    pub fn beam_tag(&self, floor: usize, bay: usize) -> u32 {
        (self.num_columns() + (floor - 1) * self.num_bays + bay + 1) as u32
    }

    /// Node that carries the floor mass and retains the rigid floor
    pub fn reference_node(&self, floor: usize) -> u32 {
        self.node_tag(floor, self.reference_bay)
    }

    /// Top-floor node on column `line`
    pub fn top_node(&self, line: usize) -> u32 {
        self.node_tag(self.num_floors, line)
    }

    pub fn num_nodes(&self) -> usize {
        (self.num_floors + 1) * self.nodes_per_floor()
    }

    pub fn num_columns(&self) -> usize {
        self.nodes_per_floor() * self.num_floors
    }

    pub fn num_beams(&self) -> usize {
        self.num_bays * self.num_floors
    }

    pub fn num_elements(&self) -> usize {
        self.num_columns() + self.num_beams()
    }
}

/// Build the frame described by `config` on a fresh model
pub fn build_frame(config: &FrameConfig) -> FEAResult<(FrameModel, FrameLayout)> {
    let mut model = FrameModel::new();
    let layout = build_frame_into(&mut model, config)?;
    Ok((model, layout))
}

/// Wipe `model` and rebuild it as the frame described by `config`
pub fn build_frame_into(model: &mut FrameModel, config: &FrameConfig) -> FEAResult<FrameLayout> {
    config.validate()?;
    model.wipe();

    let layout = FrameLayout::from_config(config);

    for floor in 0..=config.num_floors {
        let y = config.floor_elevation(floor);
        for line in 0..layout.nodes_per_floor() {
            let x = line as f64 * config.bay_width;
            model.add_node(layout.node_tag(floor, line), Node::new(x, y))?;
        }
    }

    for line in 0..layout.nodes_per_floor() {
        model.fix(layout.node_tag(0, line), Fixity::fixed())?;
    }

    // Rigid floor: every node follows its reference node horizontally
    let floor_mass = NodalMass::new(config.floor_mass, config.negligible_mass, config.negligible_mass);
    for floor in 1..=config.num_floors {
        let reference = layout.reference_node(floor);
        for line in 0..layout.nodes_per_floor() {
            let tag = layout.node_tag(floor, line);
            if tag == reference {
                model.set_mass(reference, floor_mass)?;
            } else {
                model.equal_dof(reference, tag, &[Dof::Ux])?;
            }
        }
    }

    model.add_coord_transf(TRANSF_TAG, config.transf)?;

    for line in 0..layout.nodes_per_floor() {
        for story in 0..config.num_floors {
            let section = config.column_section(line, story)?;
            let column = ElasticBeamColumn::from_section(
                layout.node_tag(story, line),
                layout.node_tag(story + 1, line),
                &section,
                config.e,
                TRANSF_TAG,
            )
            .with_mass(config.element_mass, config.mass_type);
            model.add_element(layout.column_tag(line, story), column)?;
        }
    }

    for floor in 1..=config.num_floors {
        let section = config.beam_section(floor)?;
        for bay in 0..config.num_bays {
            let beam = ElasticBeamColumn::from_section(
                layout.node_tag(floor, bay),
                layout.node_tag(floor, bay + 1),
                &section,
                config.e,
                TRANSF_TAG,
            )
            .with_mass(config.element_mass, config.mass_type);
            model.add_element(layout.beam_tag(floor, bay), beam)?;
        }
    }

    debug!(
        "frame layout: {} bays x {} floors, reference bay {}",
        config.num_bays, config.num_floors, config.reference_bay
    );
    info!(
        "built frame: {} nodes, {} elements ({} columns, {} beams)",
        model.num_nodes(),
        model.num_elements(),
        layout.num_columns(),
        layout.num_beams()
    );

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FEAError;

    #[test]
    fn test_reference_layout_tags() {
        let layout = FrameLayout::new(2, 7, 1);
        assert_eq!(layout.num_nodes(), 24);
        assert_eq!(layout.num_elements(), 35);
        assert_eq!(layout.top_node(0), 22);
        assert_eq!(layout.reference_node(1), 5);
        assert_eq!(layout.reference_node(7), 23);
        assert_eq!(layout.column_tag(0, 0), 1);
        assert_eq!(layout.column_tag(2, 6), 21);
        assert_eq!(layout.beam_tag(1, 0), 22);
        assert_eq!(layout.beam_tag(7, 1), 35);
    }

    #[test]
    fn test_build_reference_frame() {
        let (model, layout) = build_frame(&FrameConfig::default()).unwrap();
        assert_eq!(model.num_nodes(), layout.num_nodes());
        assert_eq!(model.num_elements(), layout.num_elements());

        let top_left = &model.nodes[&22];
        assert_eq!(top_left.coords(), [0.0, 1104.0]);
        assert_eq!(model.nodes[&3].coords(), [720.0, 0.0]);

        // Two constraints per floor, one mass per floor
        assert_eq!(model.constraints.len(), 14);
        assert_eq!(model.masses.len(), 7);
        assert!(model.constraints.iter().all(|c| c.dofs == vec![Dof::Ux]));

        // 24 nodes * 3 - 9 fixed - 14 tied
        assert_eq!(model.num_equations().unwrap(), 49);

        let first_column = &model.elements[&1];
        assert_eq!((first_column.i_node, first_column.j_node), (1, 4));
        assert_eq!(first_column.a, 72.3);
        let interior = &model.elements[&8];
        assert_eq!((interior.i_node, interior.j_node), (2, 5));
        assert_eq!(interior.iz, 3910.0);
        let first_beam = &model.elements[&22];
        assert_eq!((first_beam.i_node, first_beam.j_node), (4, 5));
        assert_eq!(first_beam.iz, 5120.0);
    }

    #[test]
    fn test_rebuild_wipes_previous_model() {
        let config = FrameConfig::default();
        let (mut model, _) = build_frame(&config).unwrap();
        build_frame_into(&mut model, &config).unwrap();
        assert_eq!(model.num_nodes(), 24);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = FrameConfig::default();
        config.columns[2][0] = "HSS8X8".to_string();
        assert!(matches!(build_frame(&config), Err(FEAError::SectionNotFound(_))));
    }
}
