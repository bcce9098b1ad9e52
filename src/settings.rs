use std::path::PathBuf;

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("budget_tools")
}

/// Default location of the remembered description -> category mapping.
pub fn default_category_dict() -> PathBuf {
    config_dir().join("cat_dict.json")
}

/// Expand a leading `~` to the home directory. Other paths pass through unchanged.
pub fn expand_home(path: PathBuf) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path;
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path,
    }
}
