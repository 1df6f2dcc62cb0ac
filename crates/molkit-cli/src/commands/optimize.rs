use super::{read_molecule, write_molecule};
use crate::cli::OptimizeArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use molkit::engine::progress::ProgressReporter;
use molkit::workflows::relax;
use tracing::info;

pub fn run(args: OptimizeArgs) -> Result<()> {
    let partial_config = PartialConfig::from_optional_file(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_optimize_args(&args)?;

    let graph = read_molecule(&args.input)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Relaxing {} ({} atoms, {} bonds) for {} iterations...",
        graph.formula(),
        graph.atom_count(),
        graph.bond_count(),
        config.iterations
    );
    let report = relax::run(&graph, &config, &reporter);

    write_molecule(&report.graph, &args.output)?;
    println!(
        "✓ Max bond deviation {:.4} -> {:.4} A, written to: {}",
        report.max_deviation_before,
        report.max_deviation_after,
        args.output.display()
    );
    Ok(())
}
