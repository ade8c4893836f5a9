pub mod config;
pub mod matching;
pub mod metadata;
pub mod orchestrator;
pub mod outcome;
pub mod selection;

pub use config::*;
pub use metadata::*;
pub use orchestrator::*;
pub use outcome::*;
