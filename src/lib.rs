pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pronote;

#[cfg(test)]
pub mod testing;
