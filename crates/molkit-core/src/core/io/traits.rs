use crate::core::models::graph::MoleculeGraph;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing molecule file formats.
///
/// Implementors handle format-specific parsing and serialization; the path helpers
/// take care of opening and buffering files.
pub trait MolecularFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a molecule from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, the content violates a graph invariant, or I/O
    /// operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<MoleculeGraph, Self::Error>;

    /// Writes a molecule to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(graph: &MoleculeGraph, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a molecule from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<MoleculeGraph, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a molecule to a file path, creating or truncating the file.
    fn write_to_path<P: AsRef<Path>>(graph: &MoleculeGraph, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
