//! # I/O Module
//!
//! Reading and writing molecules. [`records`] holds the plain serializable form of a
//! [`MoleculeGraph`](crate::core::models::graph::MoleculeGraph); [`json`] implements the
//! [`traits::MolecularFile`] interface for the JSON transit format.

pub mod json;
pub mod records;
pub mod traits;
