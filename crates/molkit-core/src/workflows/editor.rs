use crate::core::models::element::Element;
use crate::core::models::graph::MoleculeGraph;
use crate::core::models::ids::{AtomId, BondId};
use crate::core::models::topology::BondOrder;
use crate::engine::config::EditorConfig;
use crate::engine::history::UndoStack;
use crate::engine::layout::{center_molecule, optimize_geometry_with, place_atom_relative};
use crate::engine::progress::ProgressReporter;
use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Where [`MoleculeEditor::add_atom`] puts a new atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtomPlacement {
    /// An explicit position.
    At(Point3<f64>),
    Origin,
    /// Next to `base`, along `direction` if given, otherwise along a random direction.
    Relative {
        base: AtomId,
        direction: Option<Vector3<f64>>,
    },
}

/// Builds a methane molecule: one carbon bonded to four tetrahedral hydrogens, centered.
pub fn methane() -> MoleculeGraph {
    const CORNERS: [[f64; 3]; 4] = [
        [0.89, 0.89, 0.89],
        [-0.89, -0.89, 0.89],
        [0.89, -0.89, -0.89],
        [-0.89, 0.89, -0.89],
    ];

    let mut graph = MoleculeGraph::new();
    let carbon = graph.add_atom(Element::C, Point3::origin(), None);
    for [x, y, z] in CORNERS {
        let hydrogen = graph.add_atom(Element::H, Point3::new(x, y, z), None);
        graph.add_bond(carbon, hydrogen, BondOrder::Single);
    }
    center_molecule(&mut graph);
    graph
}

/// An editing session over a single molecule with undo/redo.
///
/// Every edit is applied to a private copy of the current molecule, optionally relaxed and
/// centered, then published as a new [`Arc`] snapshot. Readers holding an earlier snapshot
/// never observe later edits. Successful structural edits are recorded in the history;
/// [`move_atom`](Self::move_atom) is not, so a drag can be previewed without flooding it.
pub struct MoleculeEditor<R: Rng = ThreadRng> {
    molecule: Arc<MoleculeGraph>,
    history: UndoStack,
    config: EditorConfig,
    rng: R,
}

impl MoleculeEditor<ThreadRng> {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl Default for MoleculeEditor<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoleculeEditor<R> {
    /// Creates an editor whose random placements draw from `rng`.
    pub fn with_rng(config: EditorConfig, rng: R) -> Self {
        let molecule = MoleculeGraph::new();
        let mut history = UndoStack::with_capacity(config.history_capacity);
        history.push(&molecule);
        Self {
            molecule: Arc::new(molecule),
            history,
            config,
            rng,
        }
    }

    pub fn molecule(&self) -> Arc<MoleculeGraph> {
        Arc::clone(&self.molecule)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Adds an atom and recenters the molecule.
    ///
    /// A relative placement whose base atom does not exist puts the atom at the origin.
    pub fn add_atom(&mut self, element: Element, placement: AtomPlacement) -> AtomId {
        let mut next = self.working_copy();

        let position = match placement {
            AtomPlacement::At(position) => position,
            AtomPlacement::Origin => Point3::origin(),
            AtomPlacement::Relative { base, direction } => match next.atom(base) {
                Some(base_atom) => {
                    place_atom_relative(base_atom, element, direction, &mut self.rng)
                }
                None => {
                    warn!("Base atom {} not found; placing new {} at the origin.", base, element);
                    Point3::origin()
                }
            },
        };

        let id = next.add_atom(element, position, None);
        center_molecule(&mut next);
        self.commit(next);
        debug!("Added atom {} ({}).", id, element);
        id
    }

    /// Removes an atom and its bonds; returns `false` and records nothing if it is absent.
    pub fn remove_atom(&mut self, id: AtomId) -> bool {
        let mut next = self.working_copy();
        if !next.remove_atom(id) {
            return false;
        }
        center_molecule(&mut next);
        self.commit(next);
        true
    }

    /// Bonds two atoms and briefly relaxes the structure around the new bond.
    ///
    /// Returns `None` without touching the molecule or history when the graph refuses the
    /// bond (self-bond or missing endpoint).
    pub fn add_bond(&mut self, a: AtomId, b: AtomId, order: BondOrder) -> Option<BondId> {
        let mut next = self.working_copy();
        let id = next.add_bond(a, b, order)?;
        self.relax(&mut next, self.config.bond_edit_iterations);
        center_molecule(&mut next);
        self.commit(next);
        Some(id)
    }

    pub fn remove_bond(&mut self, id: BondId) -> bool {
        let mut next = self.working_copy();
        if !next.remove_bond(id) {
            return false;
        }
        self.relax(&mut next, self.config.bond_edit_iterations);
        center_molecule(&mut next);
        self.commit(next);
        true
    }

    /// Moves an atom without recording the change in the history.
    pub fn move_atom(&mut self, id: AtomId, position: Point3<f64>) -> bool {
        let mut next = self.working_copy();
        if !next.set_atom_position(id, position) {
            return false;
        }
        self.molecule = Arc::new(next);
        true
    }

    /// Relaxes the whole molecule for the configured number of iterations.
    #[instrument(skip_all, name = "editor_optimize")]
    pub fn optimize(&mut self) {
        let mut next = self.working_copy();
        self.relax(&mut next, self.config.optimize_iterations);
        center_molecule(&mut next);
        self.commit(next);
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.molecule = Arc::new(previous);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.molecule = Arc::new(next);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the molecule with an empty one and starts a fresh history.
    pub fn clear(&mut self) {
        self.reset(MoleculeGraph::new());
    }

    /// Replaces the molecule with a centered copy of `graph` and starts a fresh history.
    pub fn load(&mut self, graph: &MoleculeGraph) {
        let mut loaded = graph.clone();
        center_molecule(&mut loaded);
        self.reset(loaded);
    }

    fn working_copy(&self) -> MoleculeGraph {
        (*self.molecule).clone()
    }

    fn relax(&self, graph: &mut MoleculeGraph, iterations: usize) {
        optimize_geometry_with(
            graph,
            iterations,
            &self.config.relaxation,
            &ProgressReporter::new(),
        );
    }

    fn commit(&mut self, graph: MoleculeGraph) {
        self.history.push(&graph);
        self.molecule = Arc::new(graph);
    }

    fn reset(&mut self, graph: MoleculeGraph) {
        self.history = UndoStack::with_capacity(self.config.history_capacity);
        self.history.push(&graph);
        self.molecule = Arc::new(graph);
    }
}
