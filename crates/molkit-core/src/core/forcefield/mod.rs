//! # Force Field Module
//!
//! The simplified distance-based force model used to relax molecule geometry.
//!
//! - [`lengths`] - Covalent bond-length table with symmetric lookup
//! - [`potentials`] - Force kernels for the bonded spring and non-bonded Lennard-Jones terms
//! - [`params`] - Tunable constants of the relaxation, loadable from TOML
//!
//! Physical accuracy is illustrative: the model only aims at plausible-looking
//! separations for small molecules.

pub mod lengths;
pub mod params;
pub(crate) mod potentials;
