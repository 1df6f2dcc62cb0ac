use clap::{Args, Parser, Subcommand};
use molkit::core::models::element::Element;
use molkit::core::models::topology::BondOrder;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "molkit - build, edit and relax small molecules from the command line.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the formula, molecular weight and size of a molecule.
    Info(InfoArgs),
    /// Relax a molecule's geometry toward tabulated bond lengths.
    Optimize(OptimizeArgs),
    /// Attach a new atom to a molecule and relax the new bond.
    AddAtom(AddAtomArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input molecule (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `optimize` subcommand.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Path to the input molecule (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the relaxed molecule (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of relaxation iterations.
    #[arg(short = 'n', long, value_name = "INT")]
    pub iterations: Option<usize>,

    /// Override the spring constant of the bonded term.
    #[arg(short = 'k', long, value_name = "FLOAT")]
    pub spring_constant: Option<f64>,

    /// Keep the relaxed coordinates where they are instead of centering them.
    #[arg(long)]
    pub no_center: bool,
}

/// Arguments for the `add-atom` subcommand.
#[derive(Args, Debug)]
pub struct AddAtomArgs {
    /// Path to the input molecule (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the edited molecule (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Element of the new atom (H, C, N, O, F, S, P, Cl, Br, I).
    #[arg(short, long, required = true, value_name = "SYMBOL")]
    pub element: Element,

    /// Id of the atom to attach to, as written in the input file (e.g. 'atom_1'). Without
    /// it the new atom is placed at the origin and left unbonded.
    #[arg(short, long, value_name = "ATOM_ID")]
    pub base: Option<String>,

    /// Order of the bond to the base atom (1, 2, 3 or single/double/triple).
    #[arg(long, default_value = "1", value_name = "ORDER")]
    pub bond_order: BondOrder,

    /// Seed for the random placement direction.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
