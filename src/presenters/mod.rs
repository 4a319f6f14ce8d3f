//! Output adapters that turn finished frames into files.

pub mod file;
