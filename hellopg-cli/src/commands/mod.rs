//! Subcommand implementations

pub mod db_check;
pub mod serve;
