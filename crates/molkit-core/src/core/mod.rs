//! # Core Module
//!
//! Stateless building blocks of the molecule editor.
//!
//! - **Molecular Representation** ([`models`]) - Elements, atoms, bonds and the
//!   [`models::graph::MoleculeGraph`] arena
//! - **Force Model** ([`forcefield`]) - Bond-length table, force kernels and relaxation
//!   parameters
//! - **File I/O** ([`io`]) - Plain records and the JSON transit format
//! - **Utilities** ([`utils`]) - Geometry helpers shared by the layout engine

pub mod forcefield;
pub mod io;
pub mod models;
pub mod utils;
