//! # Engine Module
//!
//! The stateful layer that turns a [`MoleculeGraph`](crate::core::models::graph::MoleculeGraph)
//! into something editable: geometry placement and relaxation, plus the snapshot history
//! that makes edits reversible.
//!
//! ## Architecture
//!
//! - **Layout** ([`layout`]) - Relative atom placement, damped force-field relaxation and
//!   centering
//! - **Sampling** ([`sampling`]) - Uniform directions on the unit sphere
//! - **History** ([`history`]) - Bounded undo/redo of molecule snapshots
//! - **Configuration** ([`config`]) - Editor settings and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting of relaxation steps
//!
//! Nothing here holds global state; every operation works on a graph passed in by the caller.

pub mod config;
pub mod history;
pub mod layout;
pub mod progress;
pub mod sampling;
