pub mod article;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;

pub use article::{article, resolve, with_article, Article};
