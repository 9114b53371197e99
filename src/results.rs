//! Result types for frame analysis

use serde::{Deserialize, Serialize};

use crate::elements::Dof;

/// Displacement results at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X direction
    pub dx: f64,
    /// Displacement in Y direction
    pub dy: f64,
    /// Rotation about Z axis
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from array [DX, DY, RZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            rz: arr[2],
        }
    }

    /// Component for one DOF
    pub fn as_dof(&self, dof: Dof) -> f64 {
        match dof {
            Dof::Ux => self.dx,
            Dof::Uy => self.dy,
            Dof::Rz => self.rz,
        }
    }

    /// Get translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }
}

/// Reaction forces at a supported node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in X direction
    pub fx: f64,
    /// Reaction force in Y direction
    pub fy: f64,
    /// Reaction moment about Z axis
    pub mz: f64,
}

impl Reactions {
    /// Create from array [FX, FY, MZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            mz: arr[2],
        }
    }
}

/// End forces of a frame element, i end then j end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementForces {
    pub fx_i: f64,
    pub fy_i: f64,
    pub mz_i: f64,
    pub fx_j: f64,
    pub fy_j: f64,
    pub mz_j: f64,
}

impl ElementForces {
    /// Create from array [FX_i, FY_i, MZ_i, FX_j, FY_j, MZ_j]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            fx_i: arr[0],
            fy_i: arr[1],
            mz_i: arr[2],
            fx_j: arr[3],
            fy_j: arr[4],
            mz_j: arr[5],
        }
    }

    /// Flatten back to the engine's response-vector order
    pub fn as_array(&self) -> [f64; 6] {
        [self.fx_i, self.fy_i, self.mz_i, self.fx_j, self.fy_j, self.mz_j]
    }

    /// Component by zero-based response index
    pub fn component(&self, index: usize) -> Option<f64> {
        self.as_array().get(index).copied()
    }
}

/// Eigen analysis output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModalResults {
    /// Eigenvalues λ = ω², ascending
    pub eigenvalues: Vec<f64>,
}

impl ModalResults {
    /// Number of modes computed
    pub fn num_modes(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Angular frequency (rad/s) for a zero-based mode index
    pub fn angular_frequency(&self, mode: usize) -> Option<f64> {
        self.eigenvalues.get(mode).map(|&lambda| lambda.sqrt())
    }

    /// Natural period for a zero-based mode index
    pub fn period(&self, mode: usize) -> Option<f64> {
        self.angular_frequency(mode)
            .map(|omega| 2.0 * std::f64::consts::PI / omega)
    }
}

/// Summary of analysis results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Maximum translational displacement
    pub max_displacement: f64,
    /// Node with maximum displacement
    pub max_disp_node: u32,
    /// Maximum element axial force magnitude
    pub max_axial: f64,
    /// Element with maximum axial force
    pub max_axial_element: u32,
    /// Maximum element end moment magnitude
    pub max_moment: f64,
    /// Element with maximum moment
    pub max_moment_element: u32,
    /// Total number of nodes
    pub num_nodes: usize,
    /// Total number of elements
    pub num_elements: usize,
    /// Total DOFs
    pub total_dofs: usize,
    /// Independent equations after fixities and constraints
    pub num_equations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_period_from_eigenvalue() {
        let modal = ModalResults {
            eigenvalues: vec![4.0 * std::f64::consts::PI.powi(2)],
        };
        assert_relative_eq!(modal.period(0).unwrap(), 1.0, epsilon = 1e-12);
        assert!(modal.period(1).is_none());
    }

    #[test]
    fn test_element_force_components() {
        let f = ElementForces::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(f.component(1), Some(2.0));
        assert_eq!(f.component(6), None);
        assert_eq!(f.as_array()[5], 6.0);
    }
}
