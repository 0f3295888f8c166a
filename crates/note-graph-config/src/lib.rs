pub mod palette;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use palette::{DEFAULT_PALETTES, Palettes, builtin_palettes, resolve_color};

/// The default configuration, as shipped.
pub const DEFAULT_CONFIG: &str = include_str!("../resources/default-config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Built-in {file} is invalid: {source}")]
    DefaultsParseError {
        file: &'static str,
        source: toml::de::Error,
    },

    #[error("Palette name can't be one of the top level configuration names (it is {palette})")]
    ReservedPaletteName { palette: String },

    #[error("Palette {palette} is not available")]
    UnknownPalette { palette: String },

    #[error("Colour {color} is not available in palette {palette}")]
    UnknownColor { palette: String, color: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphSection {
    pub notes_path: PathBuf,
    /// Output path without extension.
    pub destination: PathBuf,
    pub anonymise: bool,
    pub prune: bool,
    pub exclude_titles: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub include_only_tags: Vec<String>,
    pub show_tag_edges: bool,
    pub show_note_edges: bool,
    /// Layout command; empty disables running Graphviz.
    pub run_graphviz: String,
    pub output_format: String,
    pub overlap: String,
    pub max_label_length: usize,
    pub sep: String,
    pub splines: String,
    pub bgcolor: String,
    pub free_form: String,
    pub min_text_length: usize,
    pub tag_url: String,
    pub note_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeSection {
    pub shape: String,
    pub style: String,
    pub fill_color: String,
    pub strike_color: String,
    pub free_form: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeSection {
    pub strike_color: String,
    pub arrowhead: String,
    pub free_form: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphSection,
    pub tag: NodeSection,
    pub note: NodeSection,
    pub tag_link: EdgeSection,
    pub note_link: EdgeSection,
    /// User palettes, layered over the built-in ones.
    pub palettes: Palettes,
}

impl Default for Config {
    fn default() -> Self {
        fn owned(s: &str) -> String {
            s.to_string()
        }

        Self {
            graph: GraphSection {
                notes_path: PathBuf::from("~/notes"),
                destination: PathBuf::from("note-graph"),
                anonymise: false,
                prune: false,
                exclude_titles: Vec::new(),
                exclude_tags: Vec::new(),
                include_only_tags: Vec::new(),
                show_tag_edges: true,
                show_note_edges: true,
                run_graphviz: owned("neato"),
                output_format: owned("png"),
                overlap: owned("false"),
                max_label_length: 20,
                sep: owned("+8"),
                splines: owned("true"),
                bgcolor: owned("solarized.base3"),
                free_form: String::new(),
                min_text_length: 1,
                tag_url: owned("bear://x-callback-url/open-tag?name={tag}"),
                note_url: owned("bear://x-callback-url/open-note?id={id}"),
            },
            tag: NodeSection {
                shape: owned("box"),
                style: owned("filled,rounded"),
                fill_color: owned("solarized.yellow"),
                strike_color: owned("solarized.base01"),
                free_form: String::new(),
            },
            note: NodeSection {
                shape: owned("ellipse"),
                style: owned("filled"),
                fill_color: owned("solarized.blue"),
                strike_color: owned("solarized.base01"),
                free_form: String::new(),
            },
            tag_link: EdgeSection {
                strike_color: owned("solarized.yellow"),
                arrowhead: owned("none"),
                free_form: String::new(),
            },
            note_link: EdgeSection {
                strike_color: owned("solarized.blue"),
                arrowhead: owned("normal"),
                free_form: String::new(),
            },
            palettes: Palettes::new(),
        }
    }
}

impl Config {
    /// Parses a user configuration, key by key over [`DEFAULT_CONFIG`].
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
        let user: toml::Table = toml::from_str(content)?;
        merge_tables(&mut merged, user);
        toml::Value::Table(merged).try_into()
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config =
            Self::from_toml_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.expand_paths();
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/note-graph");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands shell variables and tilde in the configured paths.
    pub fn expand_paths(&mut self) {
        for path in [&mut self.graph.notes_path, &mut self.graph.destination] {
            if let Some(expanded) = Self::expand_path(path.as_path()) {
                *path = expanded;
            }
        }
    }

    /// A copy with every palette reference replaced by its colour.
    pub fn resolved(&self) -> Result<Self, ConfigError> {
        let builtin = builtin_palettes()?;
        let color = |spec: &str| resolve_color(spec, &self.palettes, &builtin);

        let mut resolved = self.clone();
        resolved.graph.bgcolor = color(&self.graph.bgcolor)?;
        for node in [&mut resolved.tag, &mut resolved.note] {
            node.fill_color = color(&node.fill_color)?;
            node.strike_color = color(&node.strike_color)?;
        }
        for edge in [&mut resolved.tag_link, &mut resolved.note_link] {
            edge.strike_color = color(&edge.strike_color)?;
        }
        Ok(resolved)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Overlays `overlay` onto `base`, recursing into tables present in both.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let toml::Value::Table(table) = value else {
            base.insert(key, value);
            continue;
        };
        if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
            merge_tables(existing, table);
            continue;
        }
        base.insert(key, toml::Value::Table(table));
    }
}
