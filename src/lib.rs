//! # jamgen
//!
//! **jamgen** scaffolds a local CLion project for competitive-programming
//! practice. Given a project name and a problem count it produces a directory
//! tree with one C++ source stub and one stdin fixture per problem, a
//! `CMakeLists.txt` with one target per problem, and CLion run configurations
//! that build each target and redirect its stdin to the matching fixture.
//!
//! ## Architecture
//!
//! The library is organized into two modules:
//!
//! - **[`cli`]** - Command-line parsing and the `run_cli` entry point
//! - **[`generator`]** - Project configuration and the template-driven
//!   generation pipeline
//!
//! ## Generated Structure
//!
//! ```text
//! <name>/
//! ├── CMakeLists.txt                  # One add_executable per problem
//! ├── problem_01.cpp ...              # C++ contest stubs
//! ├── problem_01.stdin.txt ...        # Empty stdin fixtures
//! └── .idea/
//!     ├── .name                       # Project name marker
//!     ├── cmake.xml                   # CMake profile settings
//!     └── runConfigurations/
//!         └── problem_01.xml ...      # One run configuration per problem
//! ```
//!
//! ## Usage
//!
//! ```bash
//! jamgen round_a 4
//! ```
//!
//! ```rust,no_run
//! use jamgen::generator::{generate_project, ProjectConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ProjectConfig::new("round_a", 4);
//! let project_dir = generate_project(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! Generation is strictly sequential and aborts on the first error; files
//! written before a failure are left on disk.

pub mod cli;
pub mod generator;

pub use generator::{generate_project, ProjectConfig};
