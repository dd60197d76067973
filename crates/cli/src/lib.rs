//! `marketday` command-line front end: load a market manifest and report on it.

pub mod args;
pub mod manifest;

pub use args::Args;
pub use manifest::{Manifest, ManifestError};
