pub mod cli;
pub mod colors;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod runner;
pub mod strip;
#[cfg(test)]
pub mod tests;
