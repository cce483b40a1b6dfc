//! CLI commands

pub mod compare;
pub mod templates;
