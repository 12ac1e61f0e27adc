//! Default configuration written into new projects and themes.
//! The structures are serialized with serde_yaml, so the bytes produced for
//! a given release are always the same.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_THEME;
use crate::error::Result;

/// Project configuration stored in `verless.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    pub site: Site,
    pub plugins: Vec<String>,
    pub theme: String,
    pub build: Build,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub meta: Meta,
    pub nav: Nav,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub base: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nav {
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            site: Site {
                meta: Meta {
                    title: "My verless site".to_string(),
                    subtitle: "Built with verless".to_string(),
                    description: "A static site generated by verless".to_string(),
                    author: "verless".to_string(),
                    base: "http://localhost:8080".to_string(),
                },
                nav: Nav {
                    items: vec![NavItem {
                        label: "Home".to_string(),
                        target: "/".to_string(),
                    }],
                },
            },
            plugins: Vec::new(),
            theme: DEFAULT_THEME.to_string(),
            build: Build { overwrite: false },
        }
    }
}

/// Theme configuration stored in `theme.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub version: String,
    pub build: ThemeBuild,
}

/// Commands a renderer runs before building with the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeBuild {
    pub before: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            build: ThemeBuild { before: Vec::new() },
        }
    }
}

/// Options for creating a project.
#[derive(Debug, Clone, Default)]
pub struct CreateProjectOptions {
    /// Remove an existing project before creating the new one
    pub overwrite: bool,
}

/// Options for creating a theme.
#[derive(Debug, Clone)]
pub struct CreateThemeOptions {
    /// Project the theme is created in
    pub project: PathBuf,
}

impl Default for CreateThemeOptions {
    fn default() -> Self {
        Self {
            project: PathBuf::from("."),
        }
    }
}

/// Serialized bytes of the default `verless.yml`.
pub fn default_config() -> Result<Vec<u8>> {
    Ok(serde_yaml::to_string(&Config::default())?.into_bytes())
}

/// Serialized bytes of the default `theme.yml`.
pub fn default_theme_config() -> Result<Vec<u8>> {
    Ok(serde_yaml::to_string(&ThemeConfig::default())?.into_bytes())
}
