//! # Core Models Module
//!
//! Data structures describing an editable molecule.
//!
//! ## Key Components
//!
//! - [`element`] - The supported elements and their radius/weight tables
//! - [`atom`] - An atom with its element, position and optional charge
//! - [`topology`] - Bonds and bond orders
//! - [`graph`] - [`graph::MoleculeGraph`], the id-keyed arena of atoms and bonds
//! - [`ids`] - Stable identifiers for atoms and bonds
//!
//! ## Usage
//!
//! ```
//! use molkit::core::models::{element::Element, graph::MoleculeGraph, topology::BondOrder};
//! use nalgebra::Point3;
//!
//! let mut graph = MoleculeGraph::new();
//! let c = graph.add_atom(Element::C, Point3::origin(), None);
//! let o = graph.add_atom(Element::O, Point3::new(1.43, 0.0, 0.0), None);
//! graph.add_bond(c, o, BondOrder::Single).unwrap();
//! assert_eq!(graph.formula(), "CO");
//! ```

pub mod atom;
pub mod element;
pub mod graph;
pub mod ids;
pub mod topology;
