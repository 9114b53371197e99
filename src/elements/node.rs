//! Node - a point in the 2D frame plane with three degrees of freedom

use serde::{Deserialize, Serialize};

use crate::error::{FEAError, FEAResult};

/// Number of degrees of freedom carried by every node
pub const DOF_PER_NODE: usize = 3;

/// Nodal degree of freedom in a 2D frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dof {
    /// Translation along global X
    Ux,
    /// Translation along global Y
    Uy,
    /// Rotation about global Z
    Rz,
}

impl Dof {
    /// All DOFs in storage order
    pub const ALL: [Dof; DOF_PER_NODE] = [Dof::Ux, Dof::Uy, Dof::Rz];

    /// Zero-based storage index
    pub fn index(self) -> usize {
        match self {
            Dof::Ux => 0,
            Dof::Uy => 1,
            Dof::Rz => 2,
        }
    }

    /// Look up a DOF by its one-based number (1 = Ux, 2 = Uy, 3 = Rz)
    pub fn from_number(number: usize) -> FEAResult<Self> {
        match number {
            1 => Ok(Dof::Ux),
            2 => Ok(Dof::Uy),
            3 => Ok(Dof::Rz),
            _ => Err(FEAError::InvalidInput(format!(
                "DOF number {number} is outside 1..=3"
            ))),
        }
    }
}

/// A 2D node in the finite element model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,

    /// Committed displacements [UX, UY, RZ]
    #[serde(skip)]
    pub(crate) displacement: [f64; DOF_PER_NODE],

    /// Support reactions [FX, FY, MZ]
    #[serde(skip)]
    pub(crate) reaction: [f64; DOF_PER_NODE],

    /// Mass-normalized mode shapes, one entry per computed mode
    #[serde(skip)]
    pub(crate) eigenvectors: Vec<[f64; DOF_PER_NODE]>,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            displacement: [0.0; DOF_PER_NODE],
            reaction: [0.0; DOF_PER_NODE],
            eigenvectors: Vec::new(),
        }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Committed displacement [UX, UY, RZ]
    pub fn displacement(&self) -> [f64; DOF_PER_NODE] {
        self.displacement
    }

    /// Support reaction [FX, FY, MZ]
    pub fn reaction(&self) -> [f64; DOF_PER_NODE] {
        self.reaction
    }

    /// Mode shape for a zero-based mode index
    pub fn eigenvector(&self, mode: usize) -> Option<[f64; DOF_PER_NODE]> {
        self.eigenvectors.get(mode).copied()
    }

    pub(crate) fn clear_results(&mut self) {
        self.displacement = [0.0; DOF_PER_NODE];
        self.reaction = [0.0; DOF_PER_NODE];
        self.eigenvectors.clear();
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(0.0, 0.0);
        let n2 = Node::new(3.0, 4.0);
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_dof_numbering() {
        assert_eq!(Dof::from_number(1).unwrap(), Dof::Ux);
        assert_eq!(Dof::from_number(3).unwrap().index(), 2);
        assert!(Dof::from_number(0).is_err());
        assert!(Dof::from_number(4).is_err());
    }
}
