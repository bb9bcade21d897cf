use std::path::PathBuf;

use dirs_next::home_dir;

/// Expands a leading `~` (either `~/` or the Windows-style `~\`) to the
/// user's home directory. Other paths are returned as-is, trimmed.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_absolute_paths_untouched() {
        assert_eq!(expand_tilde(" /etc/beranda.json "), PathBuf::from("/etc/beranda.json"));
    }

    #[test]
    fn expands_home_prefix() {
        let expanded = expand_tilde("~/beranda/preferences.json");
        assert!(expanded.ends_with("beranda/preferences.json"));
        assert!(!expanded.starts_with("~") || home_dir().is_none());
    }
}
