//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`strata.toml` shipped with the crate)
//! 2. `~/.config/strata/strata.toml`
//! 3. `./strata.toml`
//! 4. An explicitly named file, if given
//! 5. `STRATA_`-prefixed environment variables, `__` between sections
//!    (`STRATA_STORAGE__BACKEND=memory`)

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strata_error::{ConfigError, StrataError, StrataResult};
use strata_fragment::FragmentStore;
use strata_storage::{StorageConfig, Stores};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../strata.toml");

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "strata=debug")
    #[serde(default = "default_level")]
    level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Top-level Strata configuration.
///
/// # Example
///
/// ```no_run
/// use strata::StrataConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StrataConfig::load()?;
/// println!("backend: {}", config.storage.backend);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StrataConfig {
    /// Storage backend selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StrataConfig {
    /// Load configuration from a single file, without defaults or overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StrataResult<Self> {
        debug!("Loading configuration from file");

        let built = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StrataError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?;
        deserialize(built)
    }

    /// Load the layered configuration.
    ///
    /// User files are optional and skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse.
    pub fn load() -> StrataResult<Self> {
        Self::load_with(None::<&Path>)
    }

    /// Load the layered configuration with an extra file above the user files.
    ///
    /// # Arguments
    ///
    /// * `explicit` - File that must exist when given (e.g. a `--config` flag)
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is missing or any source fails to parse.
    #[instrument(skip(explicit))]
    pub fn load_with(explicit: Option<impl AsRef<Path>>) -> StrataResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/strata/strata.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("strata").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("STRATA")
                .prefix_separator("_")
                .separator("__"),
        );

        let built = builder.build().map_err(|e| {
            StrataError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?;
        deserialize(built)
    }

    /// Build the storage tables this configuration names.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be initialized.
    pub fn stores(&self) -> StrataResult<Stores> {
        Stores::from_config(&self.storage)
    }

    /// Build a fragment store over the configured backend.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be initialized.
    pub fn fragment_store(&self) -> StrataResult<FragmentStore> {
        Ok(FragmentStore::new(self.stores()?))
    }
}

fn deserialize(built: Config) -> StrataResult<StrataConfig> {
    built.try_deserialize().map_err(|e| {
        StrataError::from(ConfigError::new(format!(
            "Failed to parse configuration: {}",
            e
        )))
    })
}
