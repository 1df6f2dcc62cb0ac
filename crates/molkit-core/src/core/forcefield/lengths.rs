use crate::core::models::element::Element;
use phf::{Map, phf_map};

/// Separation used for element pairs missing from [`COVALENT_BOND_LENGTHS`].
pub const DEFAULT_BOND_LENGTH: f64 = 1.5;

/// Equilibrium covalent bond lengths in Angstroms, keyed by element symbol and then by the
/// partner's symbol.
///
/// Each pair is listed once; lookups through [`covalent_bond_length`] try both orders.
static COVALENT_BOND_LENGTHS: Map<&'static str, Map<&'static str, f64>> = phf_map! {
    "C" => phf_map! {
        "C" => 1.54,
        "H" => 1.09,
        "O" => 1.43,
        "N" => 1.47,
        "F" => 1.35,
        "Cl" => 1.77,
        "Br" => 1.94,
        "I" => 2.14,
    },
    "O" => phf_map! {
        "H" => 0.96,
        "O" => 1.48,
    },
    "N" => phf_map! {
        "H" => 1.01,
        "N" => 1.45,
    },
};

/// Tabulated bond length between two elements, independent of argument order.
pub fn covalent_bond_length(a: Element, b: Element) -> f64 {
    lookup(a, b)
        .or_else(|| lookup(b, a))
        .unwrap_or(DEFAULT_BOND_LENGTH)
}

fn lookup(a: Element, b: Element) -> Option<f64> {
    COVALENT_BOND_LENGTHS
        .get(a.symbol())
        .and_then(|partners| partners.get(b.symbol()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_symmetric() {
        assert_eq!(covalent_bond_length(Element::C, Element::O), 1.43);
        assert_eq!(covalent_bond_length(Element::O, Element::C), 1.43);
        assert_eq!(covalent_bond_length(Element::H, Element::N), 1.01);
        assert_eq!(covalent_bond_length(Element::Cl, Element::C), 1.77);
    }

    #[test]
    fn homonuclear_pairs_are_tabulated() {
        assert_eq!(covalent_bond_length(Element::C, Element::C), 1.54);
        assert_eq!(covalent_bond_length(Element::N, Element::N), 1.45);
        assert_eq!(covalent_bond_length(Element::O, Element::O), 1.48);
    }

    #[test]
    fn every_tabulated_pair_resolves_in_both_orders() {
        for (first, partners) in COVALENT_BOND_LENGTHS.entries() {
            for (second, length) in partners.entries() {
                let a: Element = first.parse().unwrap();
                let b: Element = second.parse().unwrap();
                assert_eq!(covalent_bond_length(a, b), *length);
                assert_eq!(covalent_bond_length(b, a), *length);
            }
        }
    }

    #[test]
    fn missing_pairs_fall_back_to_default() {
        assert_eq!(covalent_bond_length(Element::S, Element::P), DEFAULT_BOND_LENGTH);
        assert_eq!(covalent_bond_length(Element::H, Element::H), DEFAULT_BOND_LENGTH);
        assert_eq!(covalent_bond_length(Element::I, Element::Br), DEFAULT_BOND_LENGTH);
    }
}
