//! Command-line adapter: parses flags or a JSON job file into a render
//! request and writes the result to disk.

pub mod args;
pub mod commands;
pub mod job_file;
