pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod reporting;

pub use error::{Result, SociogramError};
pub use graph::SocialGraph;
