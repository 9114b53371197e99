//! Elastic beam-column element - 2D Euler-Bernoulli frame element

use serde::{Deserialize, Serialize};

use super::section::Section;

/// How element self-mass is distributed to the end nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassType {
    /// Half the element mass lumped at each end, translations only
    #[default]
    Lumped,
    /// Consistent (cubic Hermitian) mass matrix
    Consistent,
}

/// A 2D elastic frame element (beam or column)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticBeamColumn {
    /// Tag of the i-node (start)
    pub i_node: u32,
    /// Tag of the j-node (end)
    pub j_node: u32,
    /// Cross-sectional area
    pub a: f64,
    /// Modulus of elasticity
    pub e: f64,
    /// Moment of inertia
    pub iz: f64,
    /// Coordinate transformation tag
    pub transf: u32,
    /// Mass per unit length
    pub mass_per_length: f64,
    /// Mass distribution
    pub mass_type: MassType,

    /// Calculated length
    #[serde(skip)]
    pub(crate) length: Option<f64>,

    /// Committed local end forces [N_i, V_i, M_i, N_j, V_j, M_j]
    #[serde(skip)]
    pub(crate) local_force: [f64; 6],

    /// Committed global end forces [FX_i, FY_i, MZ_i, FX_j, FY_j, MZ_j]
    #[serde(skip)]
    pub(crate) global_force: [f64; 6],
}

impl ElasticBeamColumn {
    /// Create a new element from raw properties
    pub fn new(i_node: u32, j_node: u32, a: f64, e: f64, iz: f64, transf: u32) -> Self {
        Self {
            i_node,
            j_node,
            a,
            e,
            iz,
            transf,
            mass_per_length: 0.0,
            mass_type: MassType::Lumped,
            length: None,
            local_force: [0.0; 6],
            global_force: [0.0; 6],
        }
    }

    /// Create a new element from a section
    pub fn from_section(i_node: u32, j_node: u32, section: &Section, e: f64, transf: u32) -> Self {
        Self::new(i_node, j_node, section.a, e, section.i, transf)
    }

    /// Set distributed mass and its distribution
    pub fn with_mass(mut self, mass_per_length: f64, mass_type: MassType) -> Self {
        self.mass_per_length = mass_per_length;
        self.mass_type = mass_type;
        self
    }

    /// Get the element length (available once the model has been prepared)
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Axial force, positive in tension
    pub fn axial_force(&self) -> f64 {
        self.local_force[3]
    }

    pub(crate) fn clear_results(&mut self) {
        self.local_force = [0.0; 6];
        self.global_force = [0.0; 6];
    }
}
