use super::records::MoleculeRecord;
use super::traits::MolecularFile;
use crate::core::models::graph::{GraphError, MoleculeGraph};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("Invalid molecule: {0}")]
    Graph(#[from] GraphError),
}

/// The JSON transit format:
///
/// ```json
/// { "atoms": [ { "id": "atom_1", "element": "C", "position": [0.0, 0.0, 0.0] } ],
///   "bonds": [ { "id": "bond_1", "a1": "atom_1", "a2": "atom_2", "order": 1 } ] }
/// ```
pub struct JsonFile;

impl JsonFile {
    pub fn to_json_string(graph: &MoleculeGraph) -> Result<String, JsonError> {
        Ok(serde_json::to_string_pretty(&graph.to_record())?)
    }

    pub fn from_json_str(s: &str) -> Result<MoleculeGraph, JsonError> {
        let record: MoleculeRecord = serde_json::from_str(s)?;
        Ok(MoleculeGraph::from_record(&record)?)
    }
}

impl MolecularFile for JsonFile {
    type Error = JsonError;

    fn read_from(reader: &mut impl BufRead) -> Result<MoleculeGraph, Self::Error> {
        let record: MoleculeRecord = serde_json::from_reader(reader)?;
        Ok(MoleculeGraph::from_record(&record)?)
    }

    fn write_to(graph: &MoleculeGraph, writer: &mut impl Write) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut *writer, &graph.to_record())?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;
    use crate::core::models::topology::BondOrder;
    use nalgebra::Point3;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn formaldehyde() -> MoleculeGraph {
        let mut graph = MoleculeGraph::new();
        let c = graph.add_atom(Element::C, Point3::origin(), None);
        let o = graph.add_atom(Element::O, Point3::new(1.2, 0.0, 0.0), Some(-0.4));
        let h1 = graph.add_atom(Element::H, Point3::new(-0.5, 0.9, 0.0), None);
        let h2 = graph.add_atom(Element::H, Point3::new(-0.5, -0.9, 0.0), None);
        graph.add_bond(c, o, BondOrder::Double).unwrap();
        graph.add_bond(c, h1, BondOrder::Single).unwrap();
        graph.add_bond(c, h2, BondOrder::Single).unwrap();
        graph
    }

    #[test]
    fn reads_documented_layout() {
        let input = r#"{
            "atoms": [
                { "id": "atom_1", "element": "C", "position": [0.0, 0.0, 0.0] },
                { "id": "atom_2", "element": "Cl", "position": [1.77, 0.0, 0.0], "charge": -0.2 }
            ],
            "bonds": [ { "id": "bond_1", "a1": "atom_1", "a2": "atom_2", "order": 1 } ]
        }"#;

        let graph = JsonFile::read_from(&mut Cursor::new(input)).unwrap();
        assert_eq!(graph.formula(), "CCl");
        let cl = graph.atom("atom_2".parse().unwrap()).unwrap();
        assert_eq!(cl.charge, Some(-0.2));
        assert_eq!(
            graph.bond_order("atom_1".parse().unwrap(), "atom_2".parse().unwrap()),
            1
        );
    }

    #[test]
    fn written_json_omits_absent_charges() {
        let mut graph = MoleculeGraph::new();
        graph.add_atom(Element::H, Point3::origin(), None);
        let text = JsonFile::to_json_string(&graph).unwrap();
        assert!(!text.contains("charge"));
        assert!(text.contains("\"atom_1\""));
        assert!(text.contains("\"bonds\": []"));
    }

    #[test]
    fn file_round_trip_restores_equal_graph() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("formaldehyde.json");
        let graph = formaldehyde();

        JsonFile::write_to_path(&graph, &path).unwrap();
        let restored = JsonFile::read_from_path(&path).unwrap();

        assert_eq!(restored, graph);
        assert_eq!(restored.formula(), "CH2O");
    }

    #[test]
    fn reads_documents_with_arbitrary_ids() {
        let input = r#"{
            "atoms": [
                { "id": "c1", "element": "C", "position": [0.0, 0.0, 0.0] },
                { "id": "o1", "element": "O", "position": [1.2, 0.0, 0.0] }
            ],
            "bonds": [ { "id": "b1", "a1": "c1", "a2": "o1", "order": 2 } ]
        }"#;

        let graph = JsonFile::from_json_str(input).unwrap();
        let c = graph.find_atom("c1").unwrap();
        let o = graph.find_atom("o1").unwrap();
        assert_eq!(graph.bond_order(c, o), 2);

        let text = JsonFile::to_json_string(&graph).unwrap();
        assert!(text.contains("\"b1\""));
        assert_eq!(JsonFile::from_json_str(&text).unwrap().to_record(), graph.to_record());
    }

    #[test]
    fn reads_largest_numeric_id_without_panicking() {
        let input = r#"{ "atoms": [
            { "id": "atom_18446744073709551615", "element": "C", "position": [0, 0, 0] }
        ] }"#;

        let mut graph = JsonFile::from_json_str(input).unwrap();
        let added = graph.add_atom(Element::H, Point3::origin(), None);
        assert_eq!(graph.atom_count(), 2);
        assert_eq!(graph.atom_key(added), "atom_2");
        assert!(graph.find_atom("atom_18446744073709551615").is_some());
    }

    #[test]
    fn rejects_unknown_element() {
        let input = r#"{ "atoms": [ { "id": "atom_1", "element": "Fe", "position": [0, 0, 0] } ] }"#;
        assert!(matches!(JsonFile::from_json_str(input), Err(JsonError::Syntax(_))));
    }

    #[test]
    fn rejects_dangling_bond() {
        let input = r#"{
            "atoms": [ { "id": "atom_1", "element": "C", "position": [0, 0, 0] } ],
            "bonds": [ { "id": "bond_1", "a1": "atom_1", "a2": "atom_5", "order": 1 } ]
        }"#;
        assert!(matches!(JsonFile::from_json_str(input), Err(JsonError::Graph(_))));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempdir().unwrap();
        let result = JsonFile::read_from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(JsonError::Io(_))));
    }
}
