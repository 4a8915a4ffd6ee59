//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod query;
pub mod show;
pub mod tags;

pub use args::{Cli, Commands, QueryArgs};
