//! # Generator Module
//!
//! The generator module turns a [`ProjectConfig`] into a CLion-ready contest
//! project on disk.
//!
//! ## Overview
//!
//! Generation is a fixed, strictly sequential pipeline:
//!
//! ```text
//! ProjectConfig → Directories → Problem Files → IDE Configuration
//! ```
//!
//! 1. **Directories** - Create the project root and `.idea/runConfigurations`
//! 2. **Problem Files** - One empty stdin fixture and one C++ stub per problem
//! 3. **IDE Configuration** - `.idea/.name`, `CMakeLists.txt`, `cmake.xml`
//!    and one run configuration per problem, rendered from Askama templates
//!
//! Every step either succeeds or returns an error that aborts the run; files
//! written before the failure are left on disk.
//!
//! ## Template Customization
//!
//! Templates are embedded at compile time from the `templates/` directory:
//!
//! - `CMakeLists.txt.txt` - CMake build description, one target per problem
//! - `cmake.xml` - CLion CMake profile settings
//! - `run_configuration.xml` - Per-problem run configuration
//! - `problem.cpp` - C++ contest stub, copied verbatim per problem

mod project;
mod templates;
#[cfg(test)]
mod tests;

pub use project::*;
pub use templates::*;
