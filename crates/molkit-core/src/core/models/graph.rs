use super::atom::Atom;
use super::element::Element;
use super::ids::{AtomId, BondId};
use super::topology::{Bond, BondOrder, ParseBondOrderError, pair_key};
use crate::core::io::records::{AtomRecord, BondRecord, MoleculeRecord};
use nalgebra::Point3;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

/// Largest `atom_<n>` / `bond_<n>` number adopted verbatim when loading. Ids above it are
/// kept as external keys so the counters stay far from overflow.
const MAX_ADOPTED_INDEX: u64 = u32::MAX as u64;

/// Errors raised while rebuilding a graph from records. Ids are reported as they appear in
/// the input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error(transparent)]
    InvalidBondOrder(#[from] ParseBondOrderError),

    #[error("Duplicate atom id '{0}'")]
    DuplicateAtom(String),

    #[error("Duplicate bond id '{0}'")]
    DuplicateBond(String),

    #[error("Bond '{bond}' references missing atom '{atom}'")]
    MissingEndpoint { bond: String, atom: String },

    #[error("Bond '{0}' joins an atom to itself")]
    SelfBond(String),

    #[error("Bond '{bond}' duplicates existing bond '{existing}' between the same atoms")]
    DuplicatePair { bond: String, existing: String },
}

/// A mutable molecular graph: atoms keyed by [`AtomId`], bonds keyed by [`BondId`].
///
/// The graph is an arena of id-keyed records, so cloning it is a plain deep copy and
/// snapshots never share state. Both collections iterate in ascending id order, which is
/// creation order because ids are minted from monotone counters and never reused.
///
/// The following hold after every public operation:
///
/// - every bond's endpoints exist,
/// - no bond joins an atom to itself,
/// - at most one bond exists per unordered atom pair,
/// - removing an atom removes its bonds.
///
/// Loaded documents may name atoms and bonds with arbitrary strings. Such entities get a
/// fresh internal id and keep their original string as their external key, which
/// [`to_record`](Self::to_record) writes back out.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeGraph {
    atoms: BTreeMap<AtomId, Atom>,
    bonds: BTreeMap<BondId, Bond>,
    /// Bond lookup by unordered endpoint pair.
    pair_index: HashMap<(AtomId, AtomId), BondId>,
    atom_keys: BTreeMap<AtomId, String>,
    bond_keys: BTreeMap<BondId, String>,
    next_atom_id: u64,
    next_bond_id: u64,
}

impl Default for MoleculeGraph {
    fn default() -> Self {
        Self {
            atoms: BTreeMap::new(),
            bonds: BTreeMap::new(),
            pair_index: HashMap::new(),
            atom_keys: BTreeMap::new(),
            bond_keys: BTreeMap::new(),
            next_atom_id: 1,
            next_bond_id: 1,
        }
    }
}

impl MoleculeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(&id)
    }

    pub fn bond(&self, id: BondId) -> Option<&Bond> {
        self.bonds.get(&id)
    }

    pub fn contains_atom(&self, id: AtomId) -> bool {
        self.atoms.contains_key(&id)
    }

    /// Iterates atoms in creation order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter().map(|(id, atom)| (*id, atom))
    }

    /// Iterates bonds in creation order.
    pub fn bonds_iter(&self) -> impl Iterator<Item = (BondId, &Bond)> {
        self.bonds.iter().map(|(id, bond)| (*id, bond))
    }

    pub fn atom_ids(&self) -> Vec<AtomId> {
        self.atoms.keys().copied().collect()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The string an atom is known by outside the graph: the id it was loaded under, or
    /// its `atom_<n>` form.
    pub fn atom_key(&self, id: AtomId) -> String {
        self.atom_keys
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    pub fn bond_key(&self, id: BondId) -> String {
        self.bond_keys
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    /// Resolves an external atom key back to the atom it names.
    pub fn find_atom(&self, key: &str) -> Option<AtomId> {
        self.atom_keys
            .iter()
            .find(|(_, external)| external.as_str() == key)
            .map(|(id, _)| *id)
            .or_else(|| {
                AtomId::from_canonical(key)
                    .filter(|id| self.atoms.contains_key(id) && !self.atom_keys.contains_key(id))
            })
    }

    pub fn add_atom(
        &mut self,
        element: Element,
        position: Point3<f64>,
        charge: Option<f64>,
    ) -> AtomId {
        let id = AtomId::new(self.next_atom_id);
        self.next_atom_id += 1;
        self.atoms.insert(id, Atom::new(id, element, position, charge));
        id
    }

    /// Removes an atom together with every bond incident to it.
    ///
    /// Returns `false` if the atom does not exist.
    pub fn remove_atom(&mut self, atom_id: AtomId) -> bool {
        if self.atoms.remove(&atom_id).is_none() {
            return false;
        }
        self.atom_keys.remove(&atom_id);

        let incident: Vec<BondId> = self
            .bonds
            .values()
            .filter(|bond| bond.contains(atom_id))
            .map(|bond| bond.id)
            .collect();
        for bond_id in incident {
            self.remove_bond(bond_id);
        }

        true
    }

    /// Bonds two distinct, existing atoms.
    ///
    /// Returns `None` for a self-bond or a missing endpoint. If the pair is already bonded
    /// the existing bond id is returned and its order is left untouched.
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId, order: BondOrder) -> Option<BondId> {
        if atom1_id == atom2_id {
            return None;
        }
        if !self.atoms.contains_key(&atom1_id) || !self.atoms.contains_key(&atom2_id) {
            return None;
        }

        let key = pair_key(atom1_id, atom2_id);
        if let Some(existing) = self.pair_index.get(&key) {
            return Some(*existing);
        }

        let id = BondId::new(self.next_bond_id);
        self.next_bond_id += 1;
        self.bonds
            .insert(id, Bond::new(id, atom1_id, atom2_id, order));
        self.pair_index.insert(key, id);
        Some(id)
    }

    pub fn remove_bond(&mut self, bond_id: BondId) -> bool {
        match self.bonds.remove(&bond_id) {
            Some(bond) => {
                self.pair_index.remove(&bond.key());
                self.bond_keys.remove(&bond_id);
                true
            }
            None => false,
        }
    }

    /// Removes the bond joining `a` and `b`, whichever way round it was created.
    pub fn remove_bond_between(&mut self, a: AtomId, b: AtomId) -> bool {
        match self.pair_index.get(&pair_key(a, b)).copied() {
            Some(bond_id) => self.remove_bond(bond_id),
            None => false,
        }
    }

    pub fn bond_between(&self, a: AtomId, b: AtomId) -> Option<&Bond> {
        self.pair_index
            .get(&pair_key(a, b))
            .and_then(|id| self.bonds.get(id))
    }

    /// Atoms directly bonded to `atom_id`, ordered by bond creation.
    pub fn neighbors(&self, atom_id: AtomId) -> Vec<AtomId> {
        self.bonds
            .values()
            .filter_map(|bond| bond.partner(atom_id))
            .collect()
    }

    /// Bond order between two atoms as an integer, `0` when they are not bonded.
    pub fn bond_order(&self, a: AtomId, b: AtomId) -> u8 {
        self.bond_between(a, b)
            .map_or(0, |bond| bond.order.as_u8())
    }

    pub fn bonds_for_atom(&self, atom_id: AtomId) -> Vec<&Bond> {
        self.bonds
            .values()
            .filter(|bond| bond.contains(atom_id))
            .collect()
    }

    /// Moves an atom. Returns `false` if the atom does not exist.
    pub fn set_atom_position(&mut self, atom_id: AtomId, position: Point3<f64>) -> bool {
        match self.atoms.get_mut(&atom_id) {
            Some(atom) => {
                atom.position = position;
                true
            }
            None => false,
        }
    }

    /// Mutable access to every atom position, for in-place geometry updates.
    ///
    /// Only coordinates are exposed so the topology invariants cannot be broken.
    pub(crate) fn positions_mut(&mut self) -> impl Iterator<Item = (AtomId, &mut Point3<f64>)> {
        self.atoms
            .iter_mut()
            .map(|(id, atom)| (*id, &mut atom.position))
    }

    /// Molecular formula in Hill order: carbon, hydrogen, then the remaining elements
    /// alphabetically. Counts of one are omitted.
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for atom in self.atoms.values() {
            *counts.entry(atom.element.symbol()).or_default() += 1;
        }

        let leading = [Element::C.symbol(), Element::H.symbol()];
        let mut formula = String::new();
        let ordered = leading
            .iter()
            .filter_map(|symbol| counts.get(symbol).map(|count| (*symbol, *count)))
            .chain(
                counts
                    .iter()
                    .filter(|&(symbol, _)| !leading.contains(symbol))
                    .map(|(symbol, count)| (*symbol, *count)),
            );
        for (symbol, count) in ordered {
            formula.push_str(symbol);
            if count > 1 {
                formula.push_str(&count.to_string());
            }
        }
        formula
    }

    /// Sum of the atomic weights of all atoms, in g/mol.
    pub fn molecular_weight(&self) -> f64 {
        self.atoms
            .values()
            .map(|atom| atom.element.atomic_weight())
            .sum()
    }

    pub fn to_record(&self) -> MoleculeRecord {
        MoleculeRecord {
            atoms: self
                .atoms
                .values()
                .map(|atom| AtomRecord {
                    id: self.atom_key(atom.id),
                    element: atom.element,
                    position: [atom.position.x, atom.position.y, atom.position.z],
                    charge: atom.charge,
                })
                .collect(),
            bonds: self
                .bonds
                .values()
                .map(|bond| BondRecord {
                    id: self.bond_key(bond.id),
                    a1: self.atom_key(bond.atom1_id),
                    a2: self.atom_key(bond.atom2_id),
                    order: bond.order.as_u8(),
                })
                .collect(),
        }
    }

    /// Rebuilds a graph from plain records.
    ///
    /// Ids in `atom_<n>` / `bond_<n>` form are adopted as they are and the counters resume
    /// after the largest of them, so later insertions never collide with loaded content.
    /// Any other id string is treated as an opaque key: the entity gets the next free id
    /// and keeps the string for [`to_record`](Self::to_record). Records that would break a
    /// graph invariant are rejected.
    pub fn from_record(record: &MoleculeRecord) -> Result<Self, GraphError> {
        let adopt_atom =
            |key: &str| AtomId::from_canonical(key).filter(|id| id.index() <= MAX_ADOPTED_INDEX);
        let adopt_bond =
            |key: &str| BondId::from_canonical(key).filter(|id| id.index() <= MAX_ADOPTED_INDEX);

        let mut graph = Self::new();
        graph.next_atom_id = record
            .atoms
            .iter()
            .filter_map(|atom| adopt_atom(&atom.id))
            .map(|id| id.index() + 1)
            .max()
            .unwrap_or(1);
        graph.next_bond_id = record
            .bonds
            .iter()
            .filter_map(|bond| adopt_bond(&bond.id))
            .map(|id| id.index() + 1)
            .max()
            .unwrap_or(1);

        let mut atoms_by_key: HashMap<&str, AtomId> = HashMap::new();
        for atom_record in &record.atoms {
            let key = atom_record.id.as_str();
            if atoms_by_key.contains_key(key) {
                return Err(GraphError::DuplicateAtom(key.to_string()));
            }
            let id = match adopt_atom(key) {
                Some(id) => id,
                None => {
                    let id = AtomId::new(graph.next_atom_id);
                    graph.next_atom_id += 1;
                    graph.atom_keys.insert(id, key.to_string());
                    id
                }
            };
            atoms_by_key.insert(key, id);

            let [x, y, z] = atom_record.position;
            graph.atoms.insert(
                id,
                Atom::new(id, atom_record.element, Point3::new(x, y, z), atom_record.charge),
            );
        }

        let mut bond_keys_seen: HashSet<&str> = HashSet::new();
        for bond_record in &record.bonds {
            let key = bond_record.id.as_str();
            if !bond_keys_seen.insert(key) {
                return Err(GraphError::DuplicateBond(key.to_string()));
            }
            let endpoint = |atom: &str| {
                atoms_by_key
                    .get(atom)
                    .copied()
                    .ok_or_else(|| GraphError::MissingEndpoint {
                        bond: key.to_string(),
                        atom: atom.to_string(),
                    })
            };
            let a1 = endpoint(bond_record.a1.as_str())?;
            let a2 = endpoint(bond_record.a2.as_str())?;
            if a1 == a2 {
                return Err(GraphError::SelfBond(key.to_string()));
            }
            let pair = pair_key(a1, a2);
            if let Some(existing) = graph.pair_index.get(&pair) {
                return Err(GraphError::DuplicatePair {
                    bond: key.to_string(),
                    existing: graph.bond_key(*existing),
                });
            }
            let order = BondOrder::try_from(bond_record.order)?;

            let id = match adopt_bond(key) {
                Some(id) => id,
                None => {
                    let id = BondId::new(graph.next_bond_id);
                    graph.next_bond_id += 1;
                    graph.bond_keys.insert(id, key.to_string());
                    id
                }
            };
            graph.bonds.insert(id, Bond::new(id, a1, a2, order));
            graph.pair_index.insert(pair, id);
        }

        Ok(graph)
    }
}
