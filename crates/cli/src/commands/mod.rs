//! Subcommand implementations.

pub mod init_db;
pub mod register;
