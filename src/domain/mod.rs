pub mod error;
pub mod pattern;
pub mod resolver;
pub mod selection;
pub mod settings;
pub mod template;

pub use error::AppError;
pub use pattern::{
    AlternatePattern, PatternCheck, PatternConfig, compile_patterns, validate_patterns,
};
pub use resolver::{Resolution, resolve};
pub use selection::{Selection, basename};
pub use settings::Settings;
pub use template::expand_template;
