pub mod errors;
pub mod types;

pub use errors::{ConfigError, PresetError};
pub use types::{steps, Appearance, Gamut, ScaleKind, STEP_COUNT};

pub type Result<T> = std::result::Result<T, PresetError>;
