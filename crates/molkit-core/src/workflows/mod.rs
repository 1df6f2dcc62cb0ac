//! # Workflows Module
//!
//! User-facing entry points that tie the [`engine`](crate::engine) and
//! [`core`](crate::core) layers together.
//!
//! - **Editor** ([`editor`]) - An interactive editing session: structural edits that relax
//!   and recenter the molecule, with undo/redo over published snapshots
//! - **Relaxation** ([`relax`]) - One-shot relaxation of a molecule with a before/after
//!   bond deviation report

pub mod editor;
pub mod relax;
