use crate::core::forcefield::params::RelaxationParams;
use crate::core::models::graph::MoleculeGraph;
use crate::core::utils::geometry::calculate_rmsd;
use crate::engine::layout::{
    DEFAULT_OPTIMIZE_ITERATIONS, bond_deviations, center_molecule, optimize_geometry_with,
};
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct RelaxConfig {
    pub iterations: usize,
    pub params: RelaxationParams,
    /// Translate the result so its centroid sits at the origin.
    pub center: bool,
}

impl Default for RelaxConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_OPTIMIZE_ITERATIONS,
            params: RelaxationParams::default(),
            center: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelaxReport {
    pub graph: MoleculeGraph,
    /// Largest absolute deviation of any bond from its tabulated length, before relaxing.
    pub max_deviation_before: f64,
    pub max_deviation_after: f64,
    /// RMS displacement of the atoms, measured before centering. `None` for an empty graph.
    pub displacement_rmsd: Option<f64>,
}

/// Relaxes a copy of `graph` and reports how far its bonds moved toward their target lengths.
#[instrument(skip_all, name = "relax_workflow", fields(iterations = config.iterations))]
pub fn run(graph: &MoleculeGraph, config: &RelaxConfig, reporter: &ProgressReporter) -> RelaxReport {
    let mut working = graph.clone();
    let max_deviation_before = max_abs_deviation(&working);
    let start = positions(&working);

    optimize_geometry_with(&mut working, config.iterations, &config.params, reporter);

    let displacement_rmsd = calculate_rmsd(&start, &positions(&working));
    if config.center {
        center_molecule(&mut working);
    }

    let max_deviation_after = max_abs_deviation(&working);
    info!(
        "Relaxation finished: max bond deviation {:.4} -> {:.4} A.",
        max_deviation_before, max_deviation_after
    );
    reporter.report(Progress::Message(format!(
        "Max bond deviation {max_deviation_before:.4} -> {max_deviation_after:.4} A"
    )));

    RelaxReport {
        graph: working,
        max_deviation_before,
        max_deviation_after,
        displacement_rmsd,
    }
}

fn positions(graph: &MoleculeGraph) -> Vec<Point3<f64>> {
    graph.atoms_iter().map(|(_, atom)| atom.position).collect()
}

fn max_abs_deviation(graph: &MoleculeGraph) -> f64 {
    bond_deviations(graph)
        .into_iter()
        .map(|(_, deviation)| deviation.abs())
        .fold(0.0, f64::max)
}
