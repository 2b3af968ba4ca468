//! Editor configuration
//!
//! Defaults can be overridden per instance with [`EditorOptions`], or for
//! every instance from `~/.config/rich-editor/config.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One entry of the color picker. An empty `value` is the "default color"
/// swatch, which clears formatting instead of applying a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl ColorSwatch {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// True for the swatch that removes colors
    pub fn is_reset(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Configuration of one editor instance. Immutable once the editor exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Shown while the surface is empty
    pub placeholder: String,
    /// CSS length for the content area's minimum height
    #[serde(alias = "minHeight")]
    pub min_height: String,
    /// CSS length for the content area's maximum height
    #[serde(alias = "maxHeight")]
    pub max_height: String,
    #[serde(alias = "showCharCount")]
    pub show_char_count: bool,
    /// Color picker palette, in display order
    pub colors: Vec<ColorSwatch>,
}

pub fn default_colors() -> Vec<ColorSwatch> {
    vec![
        ColorSwatch::new("Violet IFEN", "#1F154d"),
        ColorSwatch::new("Turquoise IFEN", "#00b2bb"),
        ColorSwatch::new("Gris foncé", "#333333"),
        ColorSwatch::new("Noir", "#000000"),
        ColorSwatch::new("Rouge alerte", "#d32f2f"),
        ColorSwatch::new("Vert", "#00FF00"),
        ColorSwatch::new("Bleu", "#0056b3"),
        ColorSwatch::new("Défaut", ""),
    ]
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: "Entrez votre texte ici...".to_string(),
            min_height: "300px".to_string(),
            max_height: "600px".to_string(),
            show_char_count: true,
            colors: default_colors(),
        }
    }
}

/// Per-instance overrides. Set fields replace the base value; `colors`
/// replaces the whole palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    pub placeholder: Option<String>,
    #[serde(alias = "minHeight")]
    pub min_height: Option<String>,
    #[serde(alias = "maxHeight")]
    pub max_height: Option<String>,
    #[serde(alias = "showCharCount")]
    pub show_char_count: Option<bool>,
    pub colors: Option<Vec<ColorSwatch>>,
}

impl EditorOptions {
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn min_height(mut self, height: impl Into<String>) -> Self {
        self.min_height = Some(height.into());
        self
    }

    pub fn max_height(mut self, height: impl Into<String>) -> Self {
        self.max_height = Some(height.into());
        self
    }

    pub fn show_char_count(mut self, show: bool) -> Self {
        self.show_char_count = Some(show);
        self
    }

    pub fn colors(mut self, colors: Vec<ColorSwatch>) -> Self {
        self.colors = Some(colors);
        self
    }
}

impl EditorConfig {
    /// Apply `options` over this configuration
    pub fn merged(mut self, options: EditorOptions) -> Self {
        if let Some(placeholder) = options.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(min_height) = options.min_height {
            self.min_height = min_height;
        }
        if let Some(max_height) = options.max_height {
            self.max_height = max_height;
        }
        if let Some(show) = options.show_char_count {
            self.show_char_count = show;
        }
        if let Some(colors) = options.colors {
            self.colors = colors;
        }
        self
    }

    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any
    /// error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The swatch at `index` in the palette
    pub fn swatch(&self, index: usize) -> Option<&ColorSwatch> {
        self.colors.get(index)
    }
}
