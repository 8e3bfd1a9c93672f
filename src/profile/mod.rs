pub mod init;
pub mod schema;
pub mod steps;
pub mod validation;

pub use schema::CompleteProfile;
pub use validation::validate_profile;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/gc-score/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("gc-score")
}

/// Get the default profile file path (~/.config/gc-score/profile.yaml)
pub fn get_profile_path() -> PathBuf {
    get_config_dir().join("profile.yaml")
}

/// Read a profile file into a string.
///
/// Kept separate from parsing so the CLI can report read failures and
/// parse failures with distinct exit codes.
pub fn read_profile_file(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!(
            "Profile not found at {}. Run `gc-score init` to create one.",
            path.display()
        );
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile at {}", path.display()))
}

/// Parse profile content. JSON for `.json` files, YAML otherwise.
pub fn parse_profile(path: &Path, content: &str) -> Result<CompleteProfile> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(content)
            .with_context(|| format!("Failed to parse profile: invalid JSON in {}", path.display()))
    } else {
        serde_saphyr::from_str(content)
            .with_context(|| format!("Failed to parse profile: invalid YAML in {}", path.display()))
    }
}

/// Load a profile from a file.
///
/// # Arguments
///
/// * `path` - Optional path to the profile. If None, uses the default
///   path (~/.config/gc-score/profile.yaml)
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or
/// cannot be parsed.
pub fn load_profile(path: Option<PathBuf>) -> Result<CompleteProfile> {
    let profile_path = path.unwrap_or_else(get_profile_path);
    let content = read_profile_file(&profile_path)?;
    parse_profile(&profile_path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("gc-score-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_load_missing_profile_fails() {
        let result = load_profile(Some(temp_file("does-not-exist.yaml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_yaml_profile() {
        let path = temp_file("profile.yaml");
        fs::write(&path, "workStyle:\n  disciplineRating: 4\n").unwrap();
        let profile = load_profile(Some(path.clone())).unwrap();
        assert_eq!(profile.work_style.discipline_rating, 4);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_json_profile() {
        let path = temp_file("profile.json");
        fs::write(&path, r#"{"techReadiness":{"aiComfortLevel":5}}"#).unwrap();
        let profile = load_profile(Some(path.clone())).unwrap();
        assert_eq!(profile.tech_readiness.ai_comfort_level, 5);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_error_mentions_path() {
        let path = temp_file("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_profile(Some(path.clone())).unwrap_err();
        assert!(format!("{}", err).contains("bad.json"));
        fs::remove_file(path).ok();
    }
}
