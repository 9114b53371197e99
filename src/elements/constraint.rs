//! Multi-point constraints and nodal masses

use serde::{Deserialize, Serialize};

use super::node::{Dof, DOF_PER_NODE};

/// Equal-displacement constraint: the constrained node follows the retained
/// node in each listed DOF
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualDof {
    /// Retained (master) node tag
    pub retained: u32,
    /// Constrained (slave) node tag
    pub constrained: u32,
    /// Tied degrees of freedom
    pub dofs: Vec<Dof>,
}

impl EqualDof {
    /// Create a new equal-DOF constraint
    pub fn new(retained: u32, constrained: u32, dofs: &[Dof]) -> Self {
        Self {
            retained,
            constrained,
            dofs: dofs.to_vec(),
        }
    }

    /// Whether this constraint ties the given DOF
    pub fn ties(&self, dof: Dof) -> bool {
        self.dofs.contains(&dof)
    }
}

/// Lumped mass at a node [MX, MY, MRZ]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodalMass {
    /// Translational mass along X
    pub mx: f64,
    /// Translational mass along Y
    pub my: f64,
    /// Rotational mass moment about Z
    pub mrz: f64,
}

impl NodalMass {
    pub fn new(mx: f64, my: f64, mrz: f64) -> Self {
        Self { mx, my, mrz }
    }

    pub fn as_array(&self) -> [f64; DOF_PER_NODE] {
        [self.mx, self.my, self.mrz]
    }

    pub fn is_zero(&self) -> bool {
        self.as_array().iter().all(|m| *m == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_dof_ties() {
        let c = EqualDof::new(5, 4, &[Dof::Ux]);
        assert!(c.ties(Dof::Ux));
        assert!(!c.ties(Dof::Rz));
    }

    #[test]
    fn test_mass_array() {
        let m = NodalMass::new(0.49, 1.0e-10, 1.0e-10);
        assert_eq!(m.as_array()[0], 0.49);
        assert!(!m.is_zero());
        assert!(NodalMass::default().is_zero());
    }
}
