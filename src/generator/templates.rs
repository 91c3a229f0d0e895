use askama::Template;
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use super::project::ProjectConfig;

/// Template data for generating CMakeLists.txt
///
/// Declares one `add_executable` target per problem label.
#[derive(Template)]
#[template(path = "CMakeLists.txt.txt")]
pub struct CMakeListsTemplateData {
    /// Project name
    pub name: String,
    /// Number of problems
    pub problem_count: i32,
    /// Problem labels, ascending
    pub labels: Vec<String>,
}

/// Template data for generating the CLion CMake profile (`.idea/cmake.xml`)
#[derive(Template)]
#[template(path = "cmake.xml", escape = "none")]
pub struct CMakeProfilesTemplateData {
    /// Project name
    pub name: String,
    /// Number of problems
    pub problem_count: i32,
    /// Problem labels, ascending
    pub labels: Vec<String>,
}

/// Template data for generating a per-problem CLion run configuration
#[derive(Template)]
#[template(path = "run_configuration.xml", escape = "none")]
pub struct RunConfigTemplateData {
    /// Two-digit problem label
    pub problem_id: String,
    /// Project name
    pub name: String,
}

/// Template for the C++ contest stub, copied verbatim per problem
#[derive(Template)]
#[template(path = "problem.cpp", escape = "none")]
pub struct ProblemSourceTemplate;

/// Render a template into `path`, truncating any existing file
///
/// `label` names the template in error messages.
fn render_to_file<T: Template>(label: &str, path: &Path, template: &T) -> anyhow::Result<()> {
    let rendered = template
        .render()
        .with_context(|| format!("could not render template '{label}'"))?;
    fs::write(path, rendered)
        .with_context(|| format!("could not write template '{label}' to {path:?}"))?;
    debug!(template = label, path = ?path, "rendered template");
    Ok(())
}

/// Write the project name marker (`.idea/.name`)
///
/// The name is written verbatim, no template involved.
pub fn write_project_name(idea_dir: &Path, name: &str) -> anyhow::Result<()> {
    let path = idea_dir.join(".name");
    fs::write(&path, name)
        .with_context(|| format!("could not write project name marker {path:?}"))?;
    debug!(path = ?path, "wrote project name marker");
    Ok(())
}

/// Write the CMake build description (`CMakeLists.txt`)
pub fn write_cmake_lists(base_dir: &Path, config: &ProjectConfig) -> anyhow::Result<()> {
    let data = CMakeListsTemplateData {
        name: config.name.clone(),
        problem_count: config.problem_count,
        labels: config.problem_labels.clone(),
    };
    render_to_file("cmake lists", &base_dir.join("CMakeLists.txt"), &data)
}

/// Write the CLion CMake profile settings (`.idea/cmake.xml`)
pub fn write_cmake_profiles(idea_dir: &Path, config: &ProjectConfig) -> anyhow::Result<()> {
    let data = CMakeProfilesTemplateData {
        name: config.name.clone(),
        problem_count: config.problem_count,
        labels: config.problem_labels.clone(),
    };
    render_to_file("cmake profiles", &idea_dir.join("cmake.xml"), &data)
}

/// Write one per-problem run configuration
///
/// The configuration builds the problem's target and redirects its stdin to
/// the matching `.stdin.txt` fixture.
pub fn write_run_config(dir: &Path, label: &str, project: &str) -> anyhow::Result<()> {
    let data = RunConfigTemplateData {
        problem_id: label.to_string(),
        name: project.to_string(),
    };
    render_to_file(
        &format!("run config {label}"),
        &dir.join(format!("problem_{label}.xml")),
        &data,
    )
}

/// Write one C++ contest stub
pub fn write_problem_source(path: &Path, label: &str) -> anyhow::Result<()> {
    render_to_file(
        &format!("problem source {label}"),
        path,
        &ProblemSourceTemplate,
    )
}
