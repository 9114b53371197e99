//! Portal Frame 2D - elastic frame engine and steel moment frame verification
//!
//! The engine models 2D frames built from elastic beam-columns, supporting:
//! - Nodal fixities and equal-DOF (rigid floor) constraints
//! - Lumped nodal mass and lumped or consistent element mass
//! - Eigenvalue analysis for natural periods and mass-normalized mode shapes
//! - Load-controlled linear static analysis, optionally with P-Delta
//!
//! The `frame` module builds a seven-story, two-bay steel moment frame on
//! the engine and compares its periods and lateral load response with
//! SAP2000 and SeismoStruct results.
//!
//! ## Example
//! ```rust
//! use portal_frame2d::prelude::*;
//!
//! let mut model = FrameModel::new();
//!
//! // Nodes and supports
//! model.add_node(1, Node::new(0.0, 0.0)).unwrap();
//! model.add_node(2, Node::new(0.0, 144.0)).unwrap();
//! model.fix(1, Fixity::fixed()).unwrap();
//!
//! // Column
//! model.add_coord_transf(1, CoordTransf::Linear).unwrap();
//! let column = ElasticBeamColumn::new(1, 2, 51.7, 29500.0, 2150.0, 1);
//! model.add_element(1, column).unwrap();
//!
//! // Lateral load
//! model.add_time_series(1, TimeSeries::linear()).unwrap();
//! model
//!     .add_load_pattern(LoadPattern::plain(1, 1).with_load(2, NodeLoad::fx(10.0)))
//!     .unwrap();
//!
//! // Analyze
//! model.analyze(&AnalysisOptions::load_control(1.0)).unwrap();
//!
//! // Get results
//! let drift = model.node_disp(2, Dof::Ux).unwrap();
//! assert!(drift > 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod frame;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisOptions, AnalysisType, SystemKind};
    pub use crate::elements::{
        CoordTransf, Dof, ElasticBeamColumn, EqualDof, Fixity, MassType, NodalMass, Node, Section,
    };
    pub use crate::error::{FEAError, FEAResult};
    pub use crate::frame::{build_frame, run_verification, FrameConfig, FrameLayout, VerificationReport};
    pub use crate::loads::{LoadPattern, NodeLoad, TimeSeries};
    pub use crate::model::FrameModel;
    pub use crate::results::{ElementForces, ModalResults, NodeDisplacement, Reactions};
}
