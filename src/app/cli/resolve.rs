//! Resolve command implementation.

use std::path::Path;

use crate::app::api::ResolveReport;
use crate::app::locations::Locations;
use crate::domain::{AppError, Settings};

pub fn run_resolve(
    file: &Path,
    settings: &Settings,
    locations: &Locations,
) -> Result<(), AppError> {
    match crate::app::api::resolve_at(file, settings)? {
        ResolveReport::NotConfigured => {
            println!("No alternate patterns configured in {}", locations.config.display());
        }
        ResolveReport::NoMatch => {
            println!("No pattern matches {}", file.display());
        }
        ResolveReport::Matched { pattern, candidates } => {
            println!("Pattern: {}", pattern);
            if candidates.is_empty() {
                println!("  (no alternates)");
            }
            for candidate in candidates {
                let mark = if candidate.exists { "✓" } else { "✗" };
                println!("  {} {}", mark, candidate.path.display());
            }
        }
    }
    Ok(())
}
