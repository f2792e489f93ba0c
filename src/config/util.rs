//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/app/assets/     ← cwd
/// /home/user/app/iconplate.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Check that a ratio lies in `(min, max]` (or `[min, max]` when `inclusive_min`).
pub fn ratio_in_range(value: f32, min: f32, max: f32, inclusive_min: bool) -> bool {
    let above = if inclusive_min { value >= min } else { value > min };
    value.is_finite() && above && value <= max
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("iconplate.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("iconplate.toml")).unwrap();
        assert_eq!(found, dir.path().join("iconplate.toml"));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("x/iconplate.toml")).unwrap();

        assert!(find_config_from(&dir.path().join("x"), Path::new("iconplate.toml")).is_none());
    }

    #[test]
    fn test_ratio_in_range() {
        assert!(ratio_in_range(1.0, 0.0, 1.0, false));
        assert!(!ratio_in_range(0.0, 0.0, 1.0, false));
        assert!(ratio_in_range(0.0, 0.0, 0.5, true));
        assert!(!ratio_in_range(0.51, 0.0, 0.5, true));
        assert!(!ratio_in_range(f32::NAN, 0.0, 1.0, true));
    }
}
