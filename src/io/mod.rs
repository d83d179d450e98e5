pub mod cli;
pub mod configuration;
pub mod content;
pub mod error;
pub mod sprite;
