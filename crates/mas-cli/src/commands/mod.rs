//! CLI subcommand implementations.

pub mod chronological;
pub mod serve;
pub mod windows;
