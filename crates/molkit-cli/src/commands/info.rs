use super::read_molecule;
use crate::cli::InfoArgs;
use crate::error::Result;
use molkit::core::models::graph::MoleculeGraph;
use molkit::engine::layout::bond_deviations;

pub fn run(args: InfoArgs) -> Result<()> {
    let graph = read_molecule(&args.input)?;
    print!("{}", summarize(&graph));
    Ok(())
}

fn summarize(graph: &MoleculeGraph) -> String {
    let max_deviation = bond_deviations(graph)
        .into_iter()
        .map(|(_, d)| d.abs())
        .fold(0.0, f64::max);

    format!(
        "Formula:          {}\n\
         Molecular weight: {:.3} g/mol\n\
         Atoms:            {}\n\
         Bonds:            {}\n\
         Max bond strain:  {:.3} A\n",
        if graph.is_empty() { "-".to_string() } else { graph.formula() },
        graph.molecular_weight(),
        graph.atom_count(),
        graph.bond_count(),
        max_deviation,
    )
}
