//! Settings overrides from `PATHTREE_*` environment variables.
//!
//! Kept in its own test binary: environment variables are process-wide and
//! would leak into the file-based tests in `config_test.rs`.

use std::env;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use pathtree::config::Settings;

#[test]
fn given_env_overrides_when_load_then_env_wins_over_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pathtree.toml");
    fs::write(&path, "display_depth = 2\nskip_hidden = false\n").unwrap();

    env::set_var("PATHTREE_DISPLAY_DEPTH", "7");
    env::set_var("PATHTREE_DEFAULT_DIR", "/srv/mirror");
    env::set_var("PATHTREE_MAX_DEPTH", "4");
    env::set_var("PATHTREE_SKIP_HIDDEN", "true");

    // Act
    let result = Settings::load(Some(&path));

    for key in [
        "PATHTREE_DISPLAY_DEPTH",
        "PATHTREE_DEFAULT_DIR",
        "PATHTREE_MAX_DEPTH",
        "PATHTREE_SKIP_HIDDEN",
    ] {
        env::remove_var(key);
    }

    // Assert
    let settings = result.expect("load settings");
    assert_eq!(settings.display_depth, 7);
    assert_eq!(settings.default_dir, PathBuf::from("/srv/mirror"));
    assert_eq!(settings.max_depth, Some(4));
    assert!(settings.skip_hidden);
}
