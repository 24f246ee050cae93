//! Options path resolution.

use std::path::PathBuf;

/// File name looked up in the working directory.
pub const LOCAL_OPTIONS_FILE: &str = "radix-colors.toml";

/// Candidate options files, in lookup order: `./radix-colors.toml`, then
/// `<config dir>/radix-colors/preset.toml`.
pub fn options_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_OPTIONS_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("radix-colors").join("preset.toml"));
    }
    paths
}

/// The first existing options file, if any.
pub fn default_options_path() -> Option<PathBuf> {
    options_search_paths().into_iter().find(|path| path.exists())
}
