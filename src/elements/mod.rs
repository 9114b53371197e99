//! Structural elements module

mod beam_column;
mod constraint;
mod node;
mod section;
mod support;
mod transformation;

pub use beam_column::{ElasticBeamColumn, MassType};
pub use constraint::{EqualDof, NodalMass};
pub use node::{Dof, Node, DOF_PER_NODE};
pub use section::Section;
pub use support::Fixity;
pub use transformation::CoordTransf;
