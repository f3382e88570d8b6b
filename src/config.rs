//! Persistent defaults and the stored theme choice.
//!
//! Folio keeps its settings in a flag-token file: one `--flag [value]`
//! per line, `#` comments allowed. The global file lives in the
//! platform config directory; a `.foliorc` in the working directory
//! overrides it per option. The `--theme` line doubles as the stored
//! theme preference written back on every toggle.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ui::style::ThemeKind;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// The explicit choice this mode carries, if any.
    pub const fn as_kind(self) -> Option<ThemeKind> {
        match self {
            Self::Auto => None,
            Self::Light => Some(ThemeKind::Light),
            Self::Dark => Some(ThemeKind::Dark),
        }
    }

    pub const fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::Light,
            ThemeKind::Dark => Self::Dark,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub nav: bool,
    pub no_nav: bool,
    pub theme: Option<ThemeMode>,
    pub section: Option<String>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            nav: self.nav || other.nav,
            no_nav: self.no_nav || other.no_nav,
            theme: other.theme.or(self.theme),
            section: other.section.clone().or_else(|| self.section.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("folio").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("folio")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("folio").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("folio").join("config");
        }
    }

    PathBuf::from(".foliorc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".foliorc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# folio defaults (saved with --save)".to_string());
    if flags.nav {
        lines.push("--nav".to_string());
    }
    if flags.no_nav {
        lines.push("--no-nav".to_string());
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        lines.push(format!("--theme {}", theme_str));
    }
    if let Some(section) = &flags.section {
        lines.push(format!("--section {}", section));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Persist a theme choice, rewriting only the `--theme` line and
/// preserving every other saved flag.
pub fn save_theme(path: &Path, theme: ThemeKind) -> Result<()> {
    let mut flags = load_config_flags(path)?;
    flags.theme = Some(ThemeMode::from_kind(theme));
    save_config_flags(path, &flags)
}

/// Read back the stored theme choice. `auto`, a missing file, or an
/// unreadable file all count as "nothing stored".
pub fn stored_theme(path: &Path) -> Option<ThemeKind> {
    load_config_flags(path).ok()?.theme.and_then(ThemeMode::as_kind)
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--nav" {
            flags.nav = true;
        } else if token == "--no-nav" {
            flags.no_nav = true;
        } else if token == "--theme" {
            if let Some(next) = tokens.get(i + 1) {
                flags.theme = parse_theme(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--theme=") {
            flags.theme = parse_theme(value);
        } else if token == "--section" {
            if let Some(next) = tokens.get(i + 1) {
                flags.section = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--section=") {
            flags.section = Some(value.to_string());
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}
