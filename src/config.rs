//! @dose
//! purpose: Configuration file parsing for linemark.toml. Handles extra
//!     comment-syntax rules and the default-profile fallback switch.
//!
//! when-editing:
//!     - !Config is loaded once at startup from the working directory
//!     - !Config rules are checked before the builtin table; first match wins
//!
//! invariants:
//!     - Config::load returns default config if linemark.toml doesn't exist
//!     - A malformed file warns on stderr and falls back to defaults
//!
//! gotchas:
//!     - An entry needs name or ext plus line or block markers; anything else
//!       is skipped with a warning
//!     - block entries take a two-element array, start then end

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::profile::{CommentProfile, ProfileRule, Resolver};

/// Main configuration structure matching linemark.toml
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra comment-syntax rules, checked before the builtin table
    #[serde(rename = "profile")]
    pub profiles: Vec<ProfileEntry>,

    /// Whether unrecognized files fall back to `//` line comments
    pub default_profile: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles: Vec::new(),
            default_profile: true,
        }
    }
}

/// One `[[profile]]` entry: matched by exact `name` or by `ext`, carrying
/// either a `line` marker or a `block` marker pair.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileEntry {
    pub name: Option<String>,
    pub ext: Option<String>,
    pub line: Option<String>,
    pub block: Option<[String; 2]>,
}

impl ProfileEntry {
    fn to_profile(&self) -> Option<CommentProfile> {
        if let Some([start, end]) = &self.block {
            return Some(CommentProfile::block(start, end));
        }
        self.line
            .as_deref()
            .filter(|marker| !marker.is_empty())
            .map(CommentProfile::line)
    }
}

impl Config {
    /// Load configuration from linemark.toml in the given directory. A
    /// missing file yields the defaults; an unreadable or unparsable file
    /// warns on stderr and also yields the defaults.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join("linemark.toml");

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse linemark.toml: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read linemark.toml: {}", e);
                Self::default()
            }
        }
    }

    /// Build the comment-syntax resolver from this config. Malformed
    /// entries (no matcher, or no markers) are skipped with a warning.
    pub fn resolver(&self) -> Resolver {
        let mut rules = Vec::new();
        for entry in &self.profiles {
            let Some(profile) = entry.to_profile() else {
                eprintln!("Warning: ignoring [[profile]] entry without line or block markers");
                continue;
            };
            if let Some(name) = &entry.name {
                rules.push(ProfileRule::name(name, profile));
            } else if let Some(ext) = &entry.ext {
                rules.push(ProfileRule::ext(ext, profile));
            } else {
                eprintln!("Warning: ignoring [[profile]] entry without name or ext");
            }
        }
        Resolver::new(rules, self.default_profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.profiles.is_empty());
        assert!(config.default_profile);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path());
        assert!(config.profiles.is_empty());
        assert!(config.default_profile);
    }

    #[test]
    fn test_load_profiles() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r##"
default_profile = false

[[profile]]
ext = "sql"
line = "--"

[[profile]]
name = "Justfile"
line = "#"

[[profile]]
ext = "vue"
block = ["<!--", "-->"]
"##;
        fs::write(temp_dir.path().join("linemark.toml"), config_content).unwrap();

        let config = Config::load(temp_dir.path());
        assert_eq!(config.profiles.len(), 3);
        assert!(!config.default_profile);

        let resolver = config.resolver();
        assert_eq!(resolver.resolve("query.sql").unwrap().line_start, "--");
        assert_eq!(resolver.resolve("Justfile").unwrap().line_start, "#");
        assert_eq!(
            resolver.resolve("App.vue").unwrap().block_markers(),
            Some(("<!--", "-->"))
        );
        // Fallback disabled
        assert!(resolver.resolve("data.bin").is_none());
    }

    #[test]
    fn test_load_invalid_toml_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("linemark.toml"), "profile = not valid").unwrap();

        let config = Config::load(temp_dir.path());
        assert!(config.profiles.is_empty());
        assert!(config.default_profile);
    }

    #[test]
    fn test_config_rule_overrides_builtin() {
        let config = Config {
            profiles: vec![ProfileEntry {
                name: None,
                ext: Some("js".to_string()),
                line: Some("#".to_string()),
                block: None,
            }],
            default_profile: true,
        };
        let resolver = config.resolver();
        assert_eq!(resolver.resolve("app.js").unwrap().line_start, "#");
    }

    #[test]
    fn test_entries_without_markers_are_skipped() {
        let config = Config {
            profiles: vec![ProfileEntry {
                name: None,
                ext: Some("sql".to_string()),
                line: None,
                block: None,
            }],
            default_profile: true,
        };
        let resolver = config.resolver();
        // Falls through to the default
        assert_eq!(resolver.resolve("query.sql").unwrap().line_start, "//");
    }
}
