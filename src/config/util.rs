//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// An absolute `config_name` is returned as-is when it exists. Otherwise
/// walks up parent directories until `config_name` is found.
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← start
/// /home/user/site/plume.toml      ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}
