//! Application settings.
//!
//! Loaded from TOML. Every section and every key is optional:
//!
//! ```toml
//! [form]
//! title = "Edit Product"
//! submit_label = "Save"
//!
//! [page]
//! lang = "en"
//! title = "Products"
//!
//! [logging]
//! filter = "product_form=debug,info"
//! ```

use product_form_pages::FormSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Document-level settings for the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
	/// `lang` attribute of the rendered document
	pub lang: String,
	/// Document title
	pub title: String,
}

impl Default for PageSettings {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			title: "Product Form".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// `EnvFilter` directives used when `RUST_LOG` is unset
	pub filter: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
		}
	}
}

/// All settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
	pub form: FormSettings,
	pub page: PageSettings,
	pub logging: LoggingSettings,
}

impl AppSettings {
	/// Parse settings from a TOML string.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(content)?)
	}

	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if the file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}
}
