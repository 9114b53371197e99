//! Geometric (coordinate) transformations for frame elements

use serde::{Deserialize, Serialize};

/// How an element maps between its local axes and the global frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordTransf {
    /// Small-displacement linear transformation
    #[default]
    Linear,
    /// Linear transformation plus the P-Delta geometric stiffness of the
    /// last committed axial force
    PDelta,
}

impl CoordTransf {
    /// Whether this transformation contributes geometric stiffness
    pub fn has_geometric_stiffness(&self) -> bool {
        matches!(self, CoordTransf::PDelta)
    }
}
