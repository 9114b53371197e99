//! Plain load patterns

use serde::{Deserialize, Serialize};

use super::node_load::NodeLoad;

/// A plain load pattern: nodal loads scaled by one time series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadPattern {
    /// Pattern tag
    pub tag: u32,
    /// Tag of the time series driving this pattern
    pub time_series: u32,
    /// Nodal loads in the order they were added
    pub loads: Vec<(u32, NodeLoad)>,
}

impl LoadPattern {
    /// Create an empty plain pattern
    pub fn plain(tag: u32, time_series: u32) -> Self {
        Self {
            tag,
            time_series,
            loads: Vec::new(),
        }
    }

    /// Add a nodal load (builder style)
    pub fn with_load(mut self, node: u32, load: NodeLoad) -> Self {
        self.loads.push((node, load));
        self
    }

    /// Number of nodal loads
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Sum of all X forces in the pattern (unscaled)
    pub fn total_fx(&self) -> f64 {
        self.loads.iter().map(|(_, l)| l.fx).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_keeps_order() {
        let pattern = LoadPattern::plain(1, 1)
            .with_load(22, NodeLoad::fx(20.0))
            .with_load(19, NodeLoad::fx(15.0));
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.loads[0].0, 22);
        assert!((pattern.total_fx() - 35.0).abs() < 1e-12);
    }
}
