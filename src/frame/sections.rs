//! Wide-flange section table (kip, inch)

use std::collections::BTreeMap;

use crate::elements::Section;
use crate::error::{FEAError, FEAResult};

/// Area and strong-axis moment of inertia of the W shapes used by the frame
const W_SECTIONS: [(&str, f64, f64); 7] = [
    ("W14X176", 51.7, 2150.0),
    ("W14X211", 62.1, 2670.0),
    ("W14X246", 72.3, 3230.0),
    ("W14X287", 84.4, 3910.0),
    ("W24X110", 32.5, 3330.0),
    ("W24X130", 38.3, 4020.0),
    ("W24X160", 47.1, 5120.0),
];

/// Build the named section table
pub fn w_sections() -> BTreeMap<String, Section> {
    W_SECTIONS
        .iter()
        .map(|&(name, a, i)| (name.to_string(), Section::new(a, i)))
        .collect()
}

/// Look up a section by name
pub fn lookup(table: &BTreeMap<String, Section>, name: &str) -> FEAResult<Section> {
    table
        .get(name)
        .copied()
        .ok_or_else(|| FEAError::SectionNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = w_sections();
        assert_eq!(table.len(), 7);
        let s = lookup(&table, "W14X287").unwrap();
        assert_eq!(s, Section::new(84.4, 3910.0));
        assert!(matches!(
            lookup(&table, "W36X999"),
            Err(FEAError::SectionNotFound(name)) if name == "W36X999"
        ));
    }
}
