//! Check command implementation.

use crate::app::locations::Locations;
use crate::domain::AppError;

pub fn run_check(locations: &Locations) -> Result<i32, AppError> {
    let outcome = crate::app::api::check_at(locations)?;

    if !outcome.found {
        println!("⚠️  No settings file at {}", locations.config.display());
        return Ok(0);
    }

    for check in &outcome.patterns {
        match &check.error {
            None => println!(
                "  ✅ #{} {} ({} alternate(s))",
                check.index + 1,
                check.main,
                check.alternates
            ),
            Some(error) => println!("  ❌ #{} {}\n{}", check.index + 1, check.main, error),
        }
    }

    if outcome.is_healthy() {
        println!("✅ {} pattern(s) OK in {}", outcome.patterns.len(), locations.config.display());
        Ok(0)
    } else {
        println!("❌ {} malformed pattern(s) will be skipped", outcome.invalid_count());
        Ok(1)
    }
}
