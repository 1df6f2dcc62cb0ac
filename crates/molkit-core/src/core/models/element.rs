use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A chemical element supported by the editor.
///
/// The variant names double as the canonical element symbols, which is also how an
/// element is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    H,
    C,
    N,
    O,
    F,
    S,
    P,
    Cl,
    Br,
    I,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unsupported element symbol '{0}'")]
pub struct ParseElementError(pub String);

impl Element {
    pub const ALL: [Element; 10] = [
        Element::H,
        Element::C,
        Element::N,
        Element::O,
        Element::F,
        Element::S,
        Element::P,
        Element::Cl,
        Element::Br,
        Element::I,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::S => "S",
            Element::P => "P",
            Element::Cl => "Cl",
            Element::Br => "Br",
            Element::I => "I",
        }
    }

    /// Covalent radius in Angstroms, used to offset new-atom placement.
    pub const fn covalent_radius(self) -> f64 {
        match self {
            Element::H => 0.31,
            Element::C => 0.77,
            Element::N => 0.75,
            Element::O => 0.73,
            Element::F => 0.72,
            Element::S => 1.02,
            Element::P => 1.06,
            Element::Cl => 0.99,
            Element::Br => 1.14,
            Element::I => 1.33,
        }
    }

    /// Standard atomic weight in g/mol.
    pub const fn atomic_weight(self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::F => 18.998,
            Element::S => 32.065,
            Element::P => 30.974,
            Element::Cl => 35.453,
            Element::Br => 79.904,
            Element::I => 126.904,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Parses an element symbol, ignoring case (`"cl"`, `"CL"` and `"Cl"` all map to
    /// chlorine).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Element::ALL
            .into_iter()
            .find(|e| e.symbol().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_variant_names() {
        for element in Element::ALL {
            assert_eq!(format!("{:?}", element), element.symbol());
            assert_eq!(element.to_string(), element.symbol());
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("C".parse::<Element>(), Ok(Element::C));
        assert_eq!("cl".parse::<Element>(), Ok(Element::Cl));
        assert_eq!("BR".parse::<Element>(), Ok(Element::Br));
        assert_eq!(" i ".parse::<Element>(), Ok(Element::I));
    }

    #[test]
    fn from_str_rejects_unsupported_symbols() {
        assert!("Fe".parse::<Element>().is_err());
        assert!("".parse::<Element>().is_err());
        assert_eq!(
            "Xx".parse::<Element>(),
            Err(ParseElementError("Xx".to_string()))
        );
    }

    #[test]
    fn property_tables_hold_expected_values() {
        assert_eq!(Element::C.covalent_radius(), 0.77);
        assert_eq!(Element::H.covalent_radius(), 0.31);
        assert_eq!(Element::C.atomic_weight(), 12.011);
        assert_eq!(Element::I.atomic_weight(), 126.904);
    }

    #[test]
    fn serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Element::Cl).unwrap(), "\"Cl\"");
        assert_eq!(
            serde_json::from_str::<Element>("\"Br\"").unwrap(),
            Element::Br
        );
    }
}
