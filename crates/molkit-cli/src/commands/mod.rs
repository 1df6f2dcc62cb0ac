pub mod add_atom;
pub mod info;
pub mod optimize;

use crate::error::{CliError, Result};
use molkit::core::io::json::JsonFile;
use molkit::core::io::traits::MolecularFile;
use molkit::core::models::graph::MoleculeGraph;
use std::path::Path;
use tracing::info;

pub(crate) fn read_molecule(path: &Path) -> Result<MoleculeGraph> {
    info!("Loading molecule from {:?}", path);
    JsonFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub(crate) fn write_molecule(graph: &MoleculeGraph, path: &Path) -> Result<()> {
    info!("Writing molecule to {:?}", path);
    JsonFile::write_to_path(graph, path).map_err(|e| CliError::FileWriting {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
