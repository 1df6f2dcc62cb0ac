//! # molkit Core Library
//!
//! An editing engine for small molecules: a mutable graph of atoms and bonds, a geometry
//! engine that places new atoms and relaxes the structure toward plausible 3-D coordinates,
//! and a bounded undo/redo history over graph snapshots.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MoleculeGraph`, `Element`,
//!   `Bond`), the bond-length table and force kernels, and JSON I/O.
//!
//! - **[`engine`]: The Logic Core.** Relative atom placement, damped force-field relaxation,
//!   centering, and the `UndoStack` snapshot history.
//!
//! - **[`workflows`]: The Public API.** `MoleculeEditor`, an editing session that applies
//!   every edit to a private copy, relaxes and recenters it, and records it for undo; plus a
//!   one-shot relaxation workflow used by the command-line tool.
//!
//! ## Example
//!
//! ```
//! use molkit::core::models::element::Element;
//! use molkit::core::models::topology::BondOrder;
//! use molkit::workflows::editor::{AtomPlacement, MoleculeEditor};
//!
//! let mut editor = MoleculeEditor::new();
//! let c = editor.add_atom(Element::C, AtomPlacement::Origin);
//! let o = editor.add_atom(Element::O, AtomPlacement::Relative { base: c, direction: None });
//! editor.add_bond(c, o, BondOrder::Double).unwrap();
//!
//! assert_eq!(editor.molecule().formula(), "CO");
//! assert!(editor.undo());
//! assert_eq!(editor.molecule().bond_count(), 0);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
