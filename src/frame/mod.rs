//! Seven-story, two-bay steel moment frame verification
//!
//! Builds the reference frame on a [`FrameModel`](crate::model::FrameModel),
//! runs the eigen and lateral-load analyses and compares the results with
//! published SAP2000 and SeismoStruct values.

pub mod builder;
pub mod compare;
pub mod config;
pub mod reference;
pub mod sections;
pub mod verify;

pub use builder::{build_frame, FrameLayout, TRANSF_TAG};
pub use compare::{ComparisonRow, ComparisonTable, TableKind};
pub use config::{FloorLoad, FrameConfig};
pub use sections::w_sections;
pub use verify::{
    period_from_eigenvalue, run_modal, run_static, run_verification, StaticResponse,
    VerificationReport,
};
