use super::element::Element;
use super::ids::AtomId;
use nalgebra::Point3;

/// Represents an atom placed in 3-D space.
///
/// An atom's identity is its [`AtomId`]; two atoms with the same element and position
/// are still distinct atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Stable identifier assigned by the owning graph.
    pub id: AtomId,
    /// The chemical element of the atom.
    pub element: Element,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Optional formal or partial charge in elementary charge units.
    pub charge: Option<f64>,
}

impl Atom {
    pub(crate) fn new(
        id: AtomId,
        element: Element,
        position: Point3<f64>,
        charge: Option<f64>,
    ) -> Self {
        Self {
            id,
            element,
            position,
            charge,
        }
    }

    /// Euclidean distance to another atom.
    pub fn distance_to(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_fields() {
        let atom = Atom::new(
            AtomId::new(1),
            Element::N,
            Point3::new(1.0, 2.0, 3.0),
            Some(-0.5),
        );

        assert_eq!(atom.id, AtomId::new(1));
        assert_eq!(atom.element, Element::N);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.charge, Some(-0.5));
    }

    #[test]
    fn atoms_with_same_payload_but_different_ids_are_not_equal() {
        let a = Atom::new(AtomId::new(1), Element::C, Point3::origin(), None);
        let b = Atom::new(AtomId::new(2), Element::C, Point3::origin(), None);
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn distance_to_is_euclidean() {
        let a = Atom::new(AtomId::new(1), Element::C, Point3::origin(), None);
        let b = Atom::new(AtomId::new(2), Element::O, Point3::new(3.0, 4.0, 0.0), None);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
