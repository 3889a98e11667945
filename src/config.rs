//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/subpagelist/subpagelist.toml`
//! 3. Local config: `<dir>/.subpagelist.toml` (working directory by default)
//! 4. Environment variables: `SUBPAGELIST_*` prefix, `__` as section separator

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, Fallback, RenderOptions};

/// Default rendering settings, overridable per request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Indentation marker, repeated once per depth level
    pub marker: String,
    /// CSS class of the wrapping container
    pub container_class: String,
    /// Show the page itself above its sub pages
    pub show_root: bool,
    /// Wrap the list in a container element
    pub wrap: bool,
    /// Maximum number of sub pages (unlimited if not set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            marker: options.marker,
            container_class: options.container_class,
            show_root: options.include_root,
            wrap: options.wrap,
            limit: options.max_entries,
        }
    }
}

impl RenderSettings {
    /// Render options seeded from these settings.
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            include_root: self.show_root,
            max_entries: self.limit,
            intro: String::new(),
            wrap: self.wrap,
            fallback: Fallback::Default,
            marker: self.marker.clone(),
            container_class: self.container_class.clone(),
        }
    }

    fn merge(&self, overlay: &RawRenderSettings) -> Self {
        Self {
            marker: overlay.marker.clone().unwrap_or_else(|| self.marker.clone()),
            container_class: overlay
                .container_class
                .clone()
                .unwrap_or_else(|| self.container_class.clone()),
            show_root: overlay.show_root.unwrap_or(self.show_root),
            wrap: overlay.wrap.unwrap_or(self.wrap),
            limit: overlay.limit.or(self.limit),
        }
    }
}

/// Raw render settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub marker: Option<String>,
    pub container_class: Option<String>,
    pub show_root: Option<bool>,
    pub wrap: Option<bool>,
    pub limit: Option<usize>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub pages_file: Option<PathBuf>,
    pub render: RawRenderSettings,
}

/// Unified configuration for subpagelist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// File listing all known page paths, one per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_file: Option<PathBuf>,
    /// Rendering defaults
    pub render: RenderSettings,
}

/// Get the XDG config directory for subpagelist.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "subpagelist").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("subpagelist.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".subpagelist.toml")
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Scalars in the overlay replace the base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            pages_file: overlay
                .pages_file
                .clone()
                .or_else(|| self.pages_file.clone()),
            render: self.render.merge(&overlay.render),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory holding `.subpagelist.toml` (default: cwd)
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let cwd;
        let local_dir = match local_dir {
            Some(dir) => Some(dir),
            None => {
                cwd = std::env::current_dir().ok();
                cwd.as_deref()
            }
        };
        Self::load_from(global_config_path().as_deref(), local_dir)
    }

    /// Load settings from explicit global and local locations.
    pub fn load_from(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.pages_file = current.pages_file.as_deref().map(expand_path);

        Ok(current)
    }

    /// Apply SUBPAGELIST_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SUBPAGELIST")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("pages_file") {
            settings.pages_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("render.marker") {
            settings.render.marker = val;
        }
        if let Ok(val) = config.get_string("render.container_class") {
            settings.render.container_class = val;
        }
        if let Ok(val) = config.get_bool("render.show_root") {
            settings.render.show_root = val;
        }
        if let Ok(val) = config.get_bool("render.wrap") {
            settings.render.wrap = val;
        }
        if let Ok(val) = config.get_int("render.limit") {
            let limit = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("render.limit must not be negative, got {}", val),
            })?;
            settings.render.limit = Some(limit);
        }

        Ok(settings)
    }

    /// Serialize to TOML for display.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

/// Template written by `config init`.
pub fn config_template() -> &'static str {
    r#"# subpagelist configuration

# File listing all known page paths, one per line
# pages_file = "~/wiki/pages.txt"

[render]
# Indentation marker, repeated once per depth level
marker = "*"
# CSS class of the wrapping container
container_class = "subpagelist"
# Show the page itself above its sub pages
show_root = false
# Wrap the list in a container element
wrap = false
# Maximum number of sub pages
# limit = 20
"#
}
