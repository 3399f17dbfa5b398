// crates/cli/src/lib.rs
pub mod args;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;
pub mod run;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
