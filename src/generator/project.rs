use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use super::templates::{
    write_cmake_lists, write_cmake_profiles, write_problem_source, write_project_name,
    write_run_config,
};

/// Immutable description of the project to scaffold
///
/// Built once from the parsed command line and consumed by
/// [`generate_project`]; only its rendered byproducts persist.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Project name, used as the root directory and embedded verbatim into
    /// rendered files
    pub name: String,
    /// Requested number of problems; zero or negative yields no problems
    pub problem_count: i32,
    /// Zero-padded decimal labels ("01", "02", ...), one per problem, in
    /// ascending index order
    pub problem_labels: Vec<String>,
}

impl ProjectConfig {
    /// Build a config, deriving the label sequence from `problem_count`
    ///
    /// Labels are the 1-based problem indices rendered at a minimum width of
    /// two digits, so index 7 yields `"07"` and index 100 yields `"100"`.
    pub fn new(name: impl Into<String>, problem_count: i32) -> Self {
        let problem_labels = (1..=problem_count).map(|p| format!("{p:02}")).collect();
        Self {
            name: name.into(),
            problem_count,
            problem_labels,
        }
    }
}

/// Generate the full project tree for `config`
///
/// Creates the directory skeleton, the per-problem files and the CLion
/// configuration, all relative to the current working directory. Existing
/// files are truncated, so rerunning with the same inputs overwrites the
/// tree with identical content.
///
/// Returns the project root directory.
///
/// # Errors
///
/// Returns an error on the first directory or file operation that fails;
/// files written before that point are left on disk.
pub fn generate_project(config: &ProjectConfig) -> anyhow::Result<PathBuf> {
    let base_dir = PathBuf::from(&config.name);
    build_directories(&base_dir)?;
    write_problem_files(config, &base_dir)?;
    write_ide_configs(config, &base_dir)?;
    Ok(base_dir)
}

fn build_directories(base_dir: &Path) -> anyhow::Result<()> {
    let run_config_dir = base_dir.join(".idea").join("runConfigurations");
    fs::create_dir_all(&run_config_dir)
        .with_context(|| format!("could not build directory {run_config_dir:?}"))?;
    debug!(dir = ?run_config_dir, "created project directories");
    Ok(())
}

fn write_problem_files(config: &ProjectConfig, base_dir: &Path) -> anyhow::Result<()> {
    for label in &config.problem_labels {
        let stdin_path = base_dir.join(format!("problem_{label}.stdin.txt"));
        fs::write(&stdin_path, "")
            .with_context(|| format!("could not create stdin file for problem {label}"))?;
        debug!(path = ?stdin_path, "created stdin fixture");

        let source_path = base_dir.join(format!("problem_{label}.cpp"));
        write_problem_source(&source_path, label)?;
    }
    Ok(())
}

fn write_ide_configs(config: &ProjectConfig, base_dir: &Path) -> anyhow::Result<()> {
    let idea_dir = base_dir.join(".idea");
    write_project_name(&idea_dir, &config.name)?;
    write_cmake_lists(base_dir, config)?;
    write_cmake_profiles(&idea_dir, config)?;

    let run_config_dir = idea_dir.join("runConfigurations");
    for label in &config.problem_labels {
        write_run_config(&run_config_dir, label, &config.name)?;
    }
    Ok(())
}
