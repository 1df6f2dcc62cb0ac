use super::{read_molecule, write_molecule};
use crate::cli::AddAtomArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use molkit::workflows::editor::{AtomPlacement, MoleculeEditor};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

pub fn run(args: AddAtomArgs) -> Result<()> {
    let config = PartialConfig::from_optional_file(args.config.as_deref())?.into_editor_config()?;
    let graph = read_molecule(&args.input)?;

    let base = match args.base.as_deref() {
        Some(key) => Some(graph.find_atom(key).ok_or_else(|| {
            CliError::Argument(format!(
                "Atom '{}' does not exist in {}",
                key,
                args.input.display()
            ))
        })?),
        None => None,
    };

    let rng = match args.seed {
        Some(seed) => {
            debug!("Seeding placement RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut editor = MoleculeEditor::with_rng(config, rng);
    editor.load(&graph);

    let placement = match base {
        Some(base) => AtomPlacement::Relative {
            base,
            direction: None,
        },
        None => AtomPlacement::Origin,
    };
    let new_id = editor.add_atom(args.element, placement);
    info!("Placed {} as {}", args.element, new_id);

    if let Some(base) = base {
        let bond_id = editor
            .add_bond(base, new_id, args.bond_order)
            .ok_or_else(|| anyhow::anyhow!("Failed to bond {} to {}", new_id, base))?;
        info!("Created {} bond {} between {} and {}", args.bond_order, bond_id, base, new_id);
    }

    let molecule = editor.molecule();
    write_molecule(&molecule, &args.output)?;
    println!(
        "✓ Added {} ({}); molecule is now {}, written to: {}",
        args.element,
        molecule.atom_key(new_id),
        molecule.formula(),
        args.output.display()
    );
    Ok(())
}
