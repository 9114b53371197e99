//! Analysis types and options

use serde::{Deserialize, Serialize};

/// Type of structural analysis to perform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisType {
    /// Load-controlled linear static analysis
    #[default]
    Static,
    /// Eigenvalue analysis for natural periods and mode shapes
    Eigen,
}

/// Storage scheme and solver for the system of equations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemKind {
    /// Profile (skyline) storage, Cholesky factorization
    #[default]
    ProfileSpd,
    /// Dense storage, LU factorization
    FullGeneral,
}

/// Options for structural analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Type of analysis
    pub analysis_type: AnalysisType,
    /// System of equations used by static analysis
    pub system: SystemKind,
    /// Pseudo-time increment per load-control step
    pub load_increment: f64,
    /// Number of load-control steps
    pub num_steps: usize,
    /// Number of modes to calculate (for eigen analysis)
    pub num_modes: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            analysis_type: AnalysisType::Static,
            system: SystemKind::ProfileSpd,
            load_increment: 1.0,
            num_steps: 1,
            num_modes: 1,
        }
    }
}

impl AnalysisOptions {
    /// Options for a load-controlled static analysis
    pub fn load_control(load_increment: f64) -> Self {
        Self {
            load_increment,
            ..Self::default()
        }
    }

    /// Options for eigen analysis
    pub fn eigen(num_modes: usize) -> Self {
        Self {
            analysis_type: AnalysisType::Eigen,
            num_modes,
            ..Self::default()
        }
    }

    /// Set the number of load-control steps
    pub fn with_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = num_steps;
        self
    }

    /// Set the system of equations
    pub fn with_system(mut self, system: SystemKind) -> Self {
        self.system = system;
        self
    }
}
