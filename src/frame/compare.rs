//! Comparison of computed results against reference values

use std::fmt;

use log::warn;
use serde::Serialize;

/// Layout of a comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableKind {
    /// One row per mode, labelled by mode number
    Period,
    /// One row per named static quantity
    Static,
}

/// A computed value next to its two reference values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub computed: f64,
    /// Value that decides pass or fail
    pub sap2000: f64,
    pub seismostruct: f64,
    /// Largest allowed absolute deviation from `sap2000`
    pub tolerance: f64,
}

impl ComparisonRow {
    pub fn new(label: impl Into<String>, computed: f64, sap2000: f64, seismostruct: f64, tolerance: f64) -> Self {
        Self {
            label: label.into(),
            computed,
            sap2000,
            seismostruct,
            tolerance,
        }
    }

    /// Absolute deviation from the deciding reference
    pub fn deviation(&self) -> f64 {
        (self.computed - self.sap2000).abs()
    }

    /// Whether the deviation is within tolerance (NaN fails)
    pub fn within_tolerance(&self) -> bool {
        self.deviation() <= self.tolerance
    }
}

/// Rows of one comparison plus the running pass/fail flag
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    kind: TableKind,
    rows: Vec<ComparisonRow>,
    /// Rows the table must hold to pass
    expected_rows: usize,
    passed: bool,
}

impl ComparisonTable {
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            expected_rows: 0,
            passed: true,
        }
    }

    /// Add a row; a row outside its tolerance fails the table
    pub fn push(&mut self, row: ComparisonRow) {
        if !row.within_tolerance() {
            self.passed = false;
            warn!(
                "{} deviates by {:.6e} (tolerance {:.3e}): computed {}, reference {}",
                row.label,
                row.deviation(),
                row.tolerance,
                row.computed,
                row.sap2000
            );
        }
        self.rows.push(row);
    }

    /// Fail the table unless at least `expected` rows were compared
    pub fn require_rows(&mut self, expected: usize) {
        self.expected_rows = expected;
        if self.rows.len() < expected {
            self.passed = false;
            warn!("compared {} of {} reference values", self.rows.len(), expected);
        }
    }

    /// Reference values that were never compared
    pub fn missing_rows(&self) -> usize {
        self.expected_rows.saturating_sub(self.rows.len())
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Zero-based indices of the failing rows
    pub fn failures(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.within_tolerance())
            .map(|(i, _)| i)
            .collect()
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TableKind::Period => {
                writeln!(f, "Period Comparison:")?;
                writeln!(f, "{:>10}{:>15}{:>15}{:>15}", "Period", "Computed", "SAP2000", "SeismoStruct")?;
                for row in &self.rows {
                    writeln!(
                        f,
                        "{:>10}{:>15.5}{:>15.4}{:>15.4}",
                        row.label, row.computed, row.sap2000, row.seismostruct
                    )?;
                }
                if self.missing_rows() > 0 {
                    writeln!(f, "Failed-> compared {} of {} periods", self.rows.len(), self.expected_rows)?;
                }
            }
            TableKind::Static => {
                writeln!(f, "Static Analysis Result Comparison:")?;
                writeln!(f, "{:>30}{:>15}{:>15}{:>15}", "Parameter", "Computed", "SAP2000", "SeismoStruct")?;
                for (i, row) in self.rows.iter().enumerate() {
                    writeln!(
                        f,
                        "{:>30}{:>15.3}{:>15.2}{:>15.2}",
                        row.label, row.computed, row.sap2000, row.seismostruct
                    )?;
                    if !row.within_tolerance() {
                        writeln!(f, "Failed-> {} {} {}", i, row.deviation(), row.tolerance)?;
                    }
                }
            }
        }
        Ok(())
    }
}
