//! alternate: jump between a source file and its configured alternate files.
//!
//! Patterns pair a regex for the current file with templates for its
//! alternates (`$1`, `$2`, … are replaced by capture groups). Running the
//! navigation switches to the alternate that exists, asks when several do,
//! and jumps back to the previous file when none does.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    CandidateStatus, CheckOutcome, NavigationOutcome, ResolveReport, check_at, load_settings,
    navigate_at, resolve_at,
};
pub use app::locations::Locations;
pub use domain::{AppError, PatternConfig, Settings, expand_template};
