//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod bessel;
pub mod body;
pub mod eigenvalues;
pub mod heat;
pub mod profile;
