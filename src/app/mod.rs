pub mod api;
pub mod cli;
pub mod commands;
pub mod locations;
pub mod logging;
pub mod session;
mod context;

pub use context::AppContext;
