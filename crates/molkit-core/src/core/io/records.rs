use crate::core::models::element::Element;
use serde::{Deserialize, Serialize};

/// Plain, serializable form of a molecule.
///
/// Ids are opaque strings. Graphs write their own ids as `atom_<n>` / `bond_<n>`, but any
/// unique string is accepted when converting back into a
/// [`MoleculeGraph`](crate::core::models::graph::MoleculeGraph).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoleculeRecord {
    #[serde(default)]
    pub atoms: Vec<AtomRecord>,
    #[serde(default)]
    pub bonds: Vec<BondRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    pub id: String,
    pub element: Element,
    pub position: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRecord {
    pub id: String,
    pub a1: String,
    pub a2: String,
    pub order: u8,
}
