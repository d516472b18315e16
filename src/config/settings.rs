use std::path::Path;

use config::{Config, ConfigBuilder, Environment, File};
use keylist_error::{ListError, ListResult};
use serde::{Deserialize, Serialize};

use crate::{collection::ReindexOrder, logging::LoggingConfig};

/// Prefix of environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "KEYLIST";
/// Separator between nested keys, e.g. `KEYLIST__COLLECTION__REINDEX_ORDER`.
pub const ENV_SEPARATOR: &str = "__";

/// Collection behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub reindex_order: ReindexOrder,
}

/// All settings of the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub collection: CollectionConfig,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Defaults overlaid with `KEYLIST__*` environment variables.
    pub fn load() -> ListResult<Self> {
        Self::finish(Config::builder())
    }

    /// Defaults overlaid with the file at `path` (format picked by
    /// extension), then with the environment.
    pub fn load_from(path: impl AsRef<Path>) -> ListResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ListError::ConfigNotFound(path.to_path_buf()));
        }
        Self::finish(Config::builder().add_source(File::from(path)))
    }

    fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> ListResult<Self> {
        let cfg = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;

        let settings: Settings = cfg.try_deserialize().map_err(config_error)?;
        tracing::debug!(
            reindex_order = %settings.collection.reindex_order,
            log_level = %settings.logging.level,
            "settings loaded"
        );
        Ok(settings)
    }
}

fn config_error(err: config::ConfigError) -> ListError {
    ListError::Config(err.to_string())
}
