//! Command-line front end
//!
//! `indefinite-article [--only] <word>`
//!
//! ## Module Structure
//!
//! - **args.rs**: clap argument definitions and conversion to [`OutputConfig`]
//! - **run.rs**: Resolves the word and writes the result
//!
//! Usage errors (missing or extra words) are reported by clap on stderr with
//! exit status 2.
//!
//! [`OutputConfig`]: crate::config::OutputConfig

pub mod args;
pub mod run;

pub use args::Args;
pub use run::run;
