//! Single-point boundary conditions

use serde::{Deserialize, Serialize};

use super::node::{Dof, DOF_PER_NODE};

/// Fixity flags at a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixity {
    /// Restrained in X translation
    pub ux: bool,
    /// Restrained in Y translation
    pub uy: bool,
    /// Restrained in Z rotation
    pub rz: bool,
}

impl Fixity {
    /// Create a fixity with no restraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Fully fixed support (all DOFs restrained)
    pub fn fixed() -> Self {
        Self { ux: true, uy: true, rz: true }
    }

    /// Pinned support (translations restrained, rotation free)
    pub fn pinned() -> Self {
        Self { ux: true, uy: true, rz: false }
    }

    /// Roller on a horizontal surface (Y translation restrained only)
    pub fn roller() -> Self {
        Self { ux: false, uy: true, rz: false }
    }

    /// Build from 0/1 flags in the `fix tag ux uy rz` style
    pub fn from_flags(ux: u8, uy: u8, rz: u8) -> Self {
        Self { ux: ux != 0, uy: uy != 0, rz: rz != 0 }
    }

    /// Flags as an array [UX, UY, RZ]
    pub fn as_array(&self) -> [bool; DOF_PER_NODE] {
        [self.ux, self.uy, self.rz]
    }

    /// Whether a given DOF is restrained
    pub fn is_fixed(&self, dof: Dof) -> bool {
        self.as_array()[dof.index()]
    }

    /// Combine with another fixity, keeping every restraint of both
    pub fn merge(self, other: Fixity) -> Self {
        Self {
            ux: self.ux || other.ux,
            uy: self.uy || other.uy,
            rz: self.rz || other.rz,
        }
    }

    /// Count number of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.as_array().iter().filter(|&&f| f).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_support() {
        let fixity = Fixity::fixed();
        assert!(fixity.ux && fixity.uy && fixity.rz);
        assert_eq!(fixity.num_restrained(), 3);
    }

    #[test]
    fn test_flags_and_merge() {
        let a = Fixity::from_flags(1, 0, 0);
        let b = Fixity::from_flags(0, 0, 1);
        let merged = a.merge(b);
        assert!(merged.is_fixed(Dof::Ux));
        assert!(!merged.is_fixed(Dof::Uy));
        assert!(merged.is_fixed(Dof::Rz));
        assert_eq!(Fixity::pinned().num_restrained(), 2);
    }
}
