//! Options file loading (TOML, YAML or JSON).

mod loader;
mod paths;


pub use loader::{load_options_from_path, load_options_from_str, OptionsFormat};
pub use paths::{default_options_path, options_search_paths};
