pub mod base_dir;
pub mod cli;
pub mod config;
pub mod error;
pub mod identifier;
pub mod logging;
pub mod prompt;
pub mod route;
pub mod scaffold;
pub mod template;
pub mod writer;
