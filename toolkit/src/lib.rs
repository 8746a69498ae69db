//! Tooling around `artkit`: the API reference generator, the source bundler
//! and a few built-in scenes for the `artkit-cli` command.

pub mod docgen;
pub mod packaging;
pub mod prelude;
pub mod scenes;
pub mod utils;
