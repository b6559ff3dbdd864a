use crate::error::{CliqError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const APP_DIR: &str = "cliq";
pub const FAV_TEMPLATES_DIR: &str = "fav_templates";
pub const SETTINGS_FILE: &str = "settings.yaml";

pub const CLIQFILE_YAML: &str = ".cliqfile.yaml";
pub const CLIQFILE_YML: &str = ".cliqfile.yml";

/// Suffixes tried on lookup, in order. New files always use the first.
pub const CLIQFILE_SUFFIXES: [&str; 2] = [CLIQFILE_YAML, CLIQFILE_YML];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `~/.config/cliq`
pub fn default_config_root() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(CliqError::HomeNotFound)?;
    Ok(home.join(".config").join(APP_DIR))
}

pub fn favorites_dir(root: &Path) -> PathBuf {
    root.join(FAV_TEMPLATES_DIR)
}

pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

// ---------------------------------------------------------------------------
// Favorite file naming
// ---------------------------------------------------------------------------

/// Lowercase hex MD5 of the UTF-8 template name. Only used to derive file
/// names, so a fast fixed-width digest is enough.
pub fn name_hash(name: &str) -> String {
    format!("{:x}", md5::compute(name.as_bytes()))
}

pub fn hashed_file_name(name: &str, suffix: &str) -> String {
    format!("{}{suffix}", name_hash(name))
}

/// File name used before names were hashed. `None` when the raw name could
/// escape the favorites directory.
pub fn legacy_file_name(name: &str, suffix: &str) -> Option<String> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return None;
    }
    Some(format!("{name}{suffix}"))
}

static HASHED_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn hashed_name_re() -> &'static Regex {
    HASHED_NAME_RE
        .get_or_init(|| Regex::new(r"^[0-9a-f]{32}\.cliqfile\.ya?ml$").expect("valid regex"))
}

/// True for `<32 lowercase hex>.cliqfile.yaml` / `.yml`.
pub fn is_hashed_file_name(file_name: &str) -> bool {
    hashed_name_re().is_match(file_name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_md5_hex() {
        assert_eq!(name_hash(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(name_hash("Foo"), name_hash("Foo"));
        assert_ne!(name_hash("Foo"), name_hash("foo"));
        assert_eq!(name_hash("日本語").len(), 32);
    }

    #[test]
    fn hashed_names_match_pattern() {
        for name in ["Foo", "../../etc/passwd", "with space", "日本語"] {
            let file = hashed_file_name(name, CLIQFILE_YAML);
            assert!(is_hashed_file_name(&file), "{file}");
            assert!(is_hashed_file_name(&hashed_file_name(name, CLIQFILE_YML)));
        }
    }

    #[test]
    fn non_hashed_names_are_rejected() {
        for file in [
            "Foo.cliqfile.yaml",
            "D41D8CD98F00B204E9800998ECF8427E.cliqfile.yaml",
            "d41d8cd98f00b204e9800998ecf8427e.yaml",
            "d41d8cd98f00b204e9800998ecf8427e.cliqfile.yaml.bak",
            "d41d8cd98f00b204e9800998ecf842.cliqfile.yaml",
        ] {
            assert!(!is_hashed_file_name(file), "{file}");
        }
    }

    #[test]
    fn legacy_names_refuse_traversal() {
        assert_eq!(
            legacy_file_name("draft", CLIQFILE_YAML).as_deref(),
            Some("draft.cliqfile.yaml")
        );
        assert_eq!(legacy_file_name("../secret", CLIQFILE_YAML), None);
        assert_eq!(legacy_file_name("a\\b", CLIQFILE_YAML), None);
        assert_eq!(legacy_file_name("..", CLIQFILE_YAML), None);
        assert_eq!(legacy_file_name("", CLIQFILE_YAML), None);
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/cfg/cliq");
        assert_eq!(
            favorites_dir(root),
            PathBuf::from("/tmp/cfg/cliq/fav_templates")
        );
        assert_eq!(
            settings_path(root),
            PathBuf::from("/tmp/cfg/cliq/settings.yaml")
        );
    }
}
