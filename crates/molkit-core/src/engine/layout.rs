use super::progress::{Progress, ProgressReporter};
use super::sampling::random_unit_direction;
use crate::core::forcefield::lengths::covalent_bond_length;
use crate::core::forcefield::params::RelaxationParams;
use crate::core::forcefield::potentials::{harmonic_bond_force, lennard_jones_force};
use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use crate::core::models::graph::MoleculeGraph;
use crate::core::models::ids::{AtomId, BondId};
use crate::core::utils::geometry::{centroid, unit_direction};
use nalgebra::{Point3, Vector3};
use rand::Rng;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument, trace, warn};

/// Iteration count used by a plain "optimize" request.
pub const DEFAULT_OPTIMIZE_ITERATIONS: usize = 30;

/// Computes where a new atom of `new_element` should go when attached to `base`.
///
/// The new atom sits at `bond_length + r(base) + r(new)` from the base atom, along
/// `direction` if one is given and non-zero, otherwise along a direction sampled
/// uniformly from the unit sphere using `rng`.
pub fn place_atom_relative(
    base: &Atom,
    new_element: Element,
    direction: Option<Vector3<f64>>,
    rng: &mut impl Rng,
) -> Point3<f64> {
    let bond_length = covalent_bond_length(base.element, new_element);
    let distance =
        bond_length + base.element.covalent_radius() + new_element.covalent_radius();

    let dir = match direction {
        Some(requested) => unit_direction(&requested).unwrap_or_else(|| {
            warn!(
                "Zero-length placement direction requested next to {}; sampling a random one.",
                base.id
            );
            random_unit_direction(rng)
        }),
        None => random_unit_direction(rng),
    };

    base.position + dir * distance
}

/// Relaxes atom positions for `iterations` steps with the default [`RelaxationParams`].
///
/// See [`optimize_geometry_with`].
pub fn optimize_geometry(graph: &mut MoleculeGraph, iterations: usize) {
    optimize_geometry_with(
        graph,
        iterations,
        &RelaxationParams::default(),
        &ProgressReporter::new(),
    );
}

#[derive(Debug, Clone, Copy)]
struct Spring {
    i: usize,
    j: usize,
    target: f64,
}

/// Relaxes atom positions in place with a damped force integration.
///
/// Each step accumulates a Hookean spring force on every bond (pulling the endpoints
/// toward the tabulated covalent length) and a Lennard-Jones force on every non-bonded
/// pair closer than `params.cutoff`, then advances velocities and positions with a
/// semi-implicit Euler step. Velocities start from rest on every call.
///
/// The run is deterministic. Its cost is O(n²) per step because every non-bonded pair is
/// visited, which is fine for the tens of atoms an interactive editor handles but does
/// not scale to large structures.
#[instrument(
    level = "debug",
    skip_all,
    fields(atoms = graph.atom_count(), bonds = graph.bond_count(), iterations = iterations)
)]
pub fn optimize_geometry_with(
    graph: &mut MoleculeGraph,
    iterations: usize,
    params: &RelaxationParams,
    reporter: &ProgressReporter,
) {
    let index: HashMap<AtomId, usize> = graph
        .atoms_iter()
        .enumerate()
        .map(|(i, (id, _))| (id, i))
        .collect();
    let mut positions: Vec<Point3<f64>> =
        graph.atoms_iter().map(|(_, atom)| atom.position).collect();
    let n = positions.len();

    let springs: Vec<Spring> = graph
        .bonds_iter()
        .filter_map(|(_, bond)| {
            let i = *index.get(&bond.atom1_id)?;
            let j = *index.get(&bond.atom2_id)?;
            let a1 = graph.atom(bond.atom1_id)?;
            let a2 = graph.atom(bond.atom2_id)?;
            Some(Spring {
                i,
                j,
                target: covalent_bond_length(a1.element, a2.element),
            })
        })
        .collect();
    debug_assert_eq!(springs.len(), graph.bond_count(), "bond with a missing endpoint");

    let bonded: HashSet<(usize, usize)> = springs
        .iter()
        .map(|s| (s.i.min(s.j), s.i.max(s.j)))
        .collect();

    let mut velocities = vec![Vector3::<f64>::zeros(); n];
    let mut forces = vec![Vector3::<f64>::zeros(); n];

    reporter.report(Progress::RelaxationStart {
        iterations: iterations as u64,
    });

    for iteration in 0..iterations {
        forces.fill(Vector3::zeros());

        for spring in &springs {
            let delta = positions[spring.j] - positions[spring.i];
            let dist = delta.norm();
            if dist > params.min_distance {
                let magnitude = harmonic_bond_force(dist, spring.target, params.spring_constant);
                let f = delta * (magnitude / dist);
                forces[spring.i] += f;
                forces[spring.j] -= f;
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if bonded.contains(&(i, j)) {
                    continue;
                }
                let delta = positions[j] - positions[i];
                let dist = delta.norm();
                if dist > params.min_distance && dist < params.cutoff {
                    let magnitude = lennard_jones_force(dist, params.lj_sigma, params.lj_epsilon);
                    let f = delta * (magnitude / dist);
                    forces[i] -= f;
                    forces[j] += f;
                }
            }
        }

        for k in 0..n {
            velocities[k] = (velocities[k] + forces[k] * params.time_step) * params.damping;
            positions[k] += velocities[k] * params.time_step;
        }

        let max_force = forces.iter().map(|f| f.norm()).fold(0.0, f64::max);
        trace!(iteration, max_force, "Relaxation step finished.");
        reporter.report(Progress::IterationFinish {
            index: iteration as u64,
            max_force,
        });
    }

    for ((_, position), relaxed) in graph.positions_mut().zip(positions) {
        *position = relaxed;
    }

    reporter.report(Progress::RelaxationFinish);
    debug!("Geometry relaxation finished.");
}

/// Translates the molecule so that its centroid sits at the origin.
///
/// Does nothing for an empty graph. Inter-atom distances are unchanged.
pub fn center_molecule(graph: &mut MoleculeGraph) {
    let Some(center) = centroid(graph.atoms_iter().map(|(_, atom)| &atom.position)) else {
        return;
    };
    let shift = center.coords;
    for (_, position) in graph.positions_mut() {
        *position -= shift;
    }
}

/// Signed deviation of every bond from its tabulated covalent length.
pub fn bond_deviations(graph: &MoleculeGraph) -> Vec<(BondId, f64)> {
    graph
        .bonds_iter()
        .filter_map(|(id, bond)| {
            let a1 = graph.atom(bond.atom1_id)?;
            let a2 = graph.atom(bond.atom2_id)?;
            Some((
                id,
                a1.distance_to(a2) - covalent_bond_length(a1.element, a2.element),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::topology::BondOrder;
    use crate::engine::sampling::direction_from_uniforms;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TOLERANCE: f64 = 1e-9;

    fn distance(graph: &MoleculeGraph, a: AtomId, b: AtomId) -> f64 {
        graph.atom(a).unwrap().distance_to(graph.atom(b).unwrap())
    }

    fn positions(graph: &MoleculeGraph) -> Vec<Point3<f64>> {
        graph.atoms_iter().map(|(_, atom)| atom.position).collect()
    }

    fn carbon_monoxide(separation: f64) -> (MoleculeGraph, AtomId, AtomId) {
        let mut graph = MoleculeGraph::new();
        let c = graph.add_atom(Element::C, Point3::origin(), None);
        let o = graph.add_atom(Element::O, Point3::new(separation, 0.0, 0.0), None);
        graph.add_bond(c, o, BondOrder::Single).unwrap();
        (graph, c, o)
    }

    fn distorted_ethanol() -> MoleculeGraph {
        let mut graph = MoleculeGraph::new();
        let c1 = graph.add_atom(Element::C, Point3::new(0.1, -0.2, 0.0), None);
        let c2 = graph.add_atom(Element::C, Point3::new(1.9, 0.3, 0.2), None);
        let o = graph.add_atom(Element::O, Point3::new(2.4, 1.8, -0.1), None);
        let h = graph.add_atom(Element::H, Point3::new(3.1, 2.0, 0.4), None);
        let h2 = graph.add_atom(Element::H, Point3::new(-0.6, 0.5, 0.9), None);
        graph.add_bond(c1, c2, BondOrder::Single).unwrap();
        graph.add_bond(c2, o, BondOrder::Single).unwrap();
        graph.add_bond(o, h, BondOrder::Single).unwrap();
        graph.add_bond(c1, h2, BondOrder::Single).unwrap();
        graph
    }

    #[test]
    fn place_atom_relative_uses_requested_direction() {
        let mut graph = MoleculeGraph::new();
        let c = graph.add_atom(Element::C, Point3::new(1.0, 2.0, 3.0), None);
        let mut rng = StdRng::seed_from_u64(0);

        let pos = place_atom_relative(
            graph.atom(c).unwrap(),
            Element::H,
            Some(Vector3::new(0.0, 0.0, 2.0)),
            &mut rng,
        );

        // 1.09 (C-H) + 0.77 (C) + 0.31 (H)
        assert!((pos - Point3::new(1.0, 2.0, 5.17)).norm() < TOLERANCE);
    }

    #[test]
    fn place_atom_relative_samples_direction_from_rng() {
        let mut graph = MoleculeGraph::new();
        let o = graph.add_atom(Element::O, Point3::new(-1.0, 0.5, 0.0), None);
        let base = graph.atom(o).unwrap();

        let mut rng = StdRng::seed_from_u64(2024);
        let mut replay = StdRng::seed_from_u64(2024);
        let u1: f64 = replay.gen_range(0.0..1.0);
        let u2: f64 = replay.gen_range(0.0..1.0);

        let pos = place_atom_relative(base, Element::H, None, &mut rng);
        let expected = base.position + direction_from_uniforms(u1, u2) * (0.96 + 0.73 + 0.31);
        assert!((pos - expected).norm() < TOLERANCE);
    }

    #[test]
    fn place_atom_relative_uses_default_length_for_untabulated_pairs() {
        let mut graph = MoleculeGraph::new();
        let s = graph.add_atom(Element::S, Point3::origin(), None);
        let mut rng = StdRng::seed_from_u64(5);

        let pos = place_atom_relative(graph.atom(s).unwrap(), Element::P, None, &mut rng);
        assert!((pos.coords.norm() - (1.5 + 1.02 + 1.06)).abs() < TOLERANCE);
    }

    #[test]
    fn place_atom_relative_zero_direction_falls_back_to_sampling() {
        let mut graph = MoleculeGraph::new();
        let c = graph.add_atom(Element::C, Point3::origin(), None);
        let mut rng = StdRng::seed_from_u64(11);

        let pos = place_atom_relative(
            graph.atom(c).unwrap(),
            Element::C,
            Some(Vector3::zeros()),
            &mut rng,
        );
        assert!((pos.coords.norm() - (1.54 + 0.77 + 0.77)).abs() < TOLERANCE);
    }

    #[test]
    fn zero_iterations_leave_positions_unchanged() {
        let mut graph = distorted_ethanol();
        let before = positions(&graph);
        optimize_geometry(&mut graph, 0);
        assert_eq!(positions(&graph), before);
    }

    #[test]
    fn single_step_pulls_stretched_bond_together() {
        let (mut graph, c, o) = carbon_monoxide(3.0);
        optimize_geometry(&mut graph, 1);

        // F = 0.1 * (3.0 - 1.43); v = F * dt * damping; each atom moves v * dt.
        let step = 0.1 * (3.0 - 1.43) * 0.1 * 0.9 * 0.1;
        assert!((graph.atom(c).unwrap().position.x - step).abs() < TOLERANCE);
        assert!((distance(&graph, c, o) - (3.0 - 2.0 * step)).abs() < TOLERANCE);
    }

    #[test]
    fn carbon_oxygen_bond_converges_to_tabulated_length() {
        let (mut graph, c, o) = carbon_monoxide(3.0);
        optimize_geometry(&mut graph, 500);
        assert!((distance(&graph, c, o) - 1.43).abs() < 0.01);

        let (mut compressed, c, o) = carbon_monoxide(0.8);
        optimize_geometry(&mut compressed, 500);
        assert!((distance(&compressed, c, o) - 1.43).abs() < 0.01);
    }

    #[test]
    fn default_run_moves_bond_toward_target() {
        let (mut graph, c, o) = carbon_monoxide(3.0);
        optimize_geometry(&mut graph, DEFAULT_OPTIMIZE_ITERATIONS);
        let d = distance(&graph, c, o);
        assert!(d < 3.0 && d > 1.43);
    }

    #[test]
    fn close_non_bonded_atoms_repel() {
        let mut graph = MoleculeGraph::new();
        let a = graph.add_atom(Element::H, Point3::origin(), None);
        let b = graph.add_atom(Element::H, Point3::new(2.0, 0.0, 0.0), None);
        optimize_geometry(&mut graph, 10);
        assert!(distance(&graph, a, b) > 2.0);
    }

    #[test]
    fn pairs_beyond_cutoff_feel_no_force() {
        let mut graph = MoleculeGraph::new();
        graph.add_atom(Element::N, Point3::origin(), None);
        graph.add_atom(Element::N, Point3::new(0.0, 6.0, 0.0), None);
        let before = positions(&graph);
        optimize_geometry(&mut graph, DEFAULT_OPTIMIZE_ITERATIONS);
        assert_eq!(positions(&graph), before);
    }

    #[test]
    fn bonded_pairs_skip_the_non_bonded_term() {
        // At the tabulated length the spring is relaxed, so a bonded pair must stay put even
        // though it sits well inside the Lennard-Jones range.
        let (mut graph, c, o) = carbon_monoxide(1.43);
        optimize_geometry(&mut graph, 20);
        assert!((distance(&graph, c, o) - 1.43).abs() < TOLERANCE);
    }

    #[test]
    fn relaxation_conserves_centroid() {
        let mut graph = distorted_ethanol();
        let before = centroid(&positions(&graph)).unwrap();
        optimize_geometry(&mut graph, 40);
        let after = centroid(&positions(&graph)).unwrap();
        assert!((after - before).norm() < 1e-9);
    }

    #[test]
    fn relaxation_is_deterministic() {
        let mut a = distorted_ethanol();
        let mut b = a.clone();
        optimize_geometry(&mut a, 25);
        optimize_geometry(&mut b, 25);
        assert_eq!(a, b);
    }

    #[test]
    fn velocities_restart_on_each_call() {
        let (mut split, _, _) = carbon_monoxide(3.0);
        let mut joined = split.clone();
        optimize_geometry(&mut split, 1);
        optimize_geometry(&mut split, 1);
        optimize_geometry(&mut joined, 2);
        assert_ne!(positions(&split), positions(&joined));
    }

    #[test]
    fn relaxation_preserves_ids_and_topology() {
        let mut graph = distorted_ethanol();
        let ids = graph.atom_ids();
        let formula = graph.formula();
        let bonds = graph.bond_count();
        optimize_geometry(&mut graph, 15);
        assert_eq!(graph.atom_ids(), ids);
        assert_eq!(graph.formula(), formula);
        assert_eq!(graph.bond_count(), bonds);
    }

    #[test]
    fn progress_reports_every_iteration() {
        use std::sync::{Arc, Mutex};

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        let (mut graph, _, _) = carbon_monoxide(2.0);
        optimize_geometry_with(&mut graph, 3, &RelaxationParams::default(), &reporter);

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], Progress::RelaxationStart { iterations: 3 });
        assert!(matches!(events[3], Progress::IterationFinish { index: 2, .. }));
        assert_eq!(events[4], Progress::RelaxationFinish);
    }

    #[test]
    fn center_molecule_moves_centroid_to_origin() {
        let mut graph = distorted_ethanol();
        let before = graph.atom_ids();
        let d_before = distance(&graph, before[0], before[2]);

        center_molecule(&mut graph);

        let center = centroid(&positions(&graph)).unwrap();
        assert!(center.coords.norm() < 1e-12);
        assert!((distance(&graph, before[0], before[2]) - d_before).abs() < 1e-12);
    }

    #[test]
    fn center_molecule_on_empty_graph_is_noop() {
        let mut graph = MoleculeGraph::new();
        center_molecule(&mut graph);
        assert!(graph.is_empty());
    }

    #[test]
    fn bond_deviations_are_signed() {
        let (graph, _, _) = carbon_monoxide(2.0);
        let deviations = bond_deviations(&graph);
        assert_eq!(deviations.len(), 1);
        assert!((deviations[0].1 - 0.57).abs() < TOLERANCE);
    }
}
