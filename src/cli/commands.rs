use clap::Parser;

use crate::generator::{generate_project, ProjectConfig};

/// Command-line interface for jamgen
///
/// Scaffolds a CLion-ready contest project: one C++ stub and one stdin
/// fixture per problem, plus a run configuration for each target.
#[derive(Parser)]
#[command(name = "jamgen")]
#[command(about = "Scaffold a CLion contest project", long_about = None)]
pub struct Cli {
    /// Project name, used as the root directory of the generated tree
    pub name: String,

    /// Number of problems to scaffold (zero or negative generates none)
    #[arg(allow_negative_numbers = true)]
    pub problem_count: i32,
}

/// Execute the command provided by the user
///
/// Parses the command line, builds the immutable [`ProjectConfig`] and runs
/// the generation pipeline.
///
/// # Errors
///
/// Returns an error if any directory or file in the generated tree cannot
/// be created or written.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ProjectConfig::new(cli.name, cli.problem_count);
    println!(
        "Creating project for: '{}' ({} problems)",
        config.name, config.problem_count
    );
    generate_project(&config)?;
    println!("Finished.");
    Ok(())
}
