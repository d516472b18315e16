pub mod settings;

pub use settings::{CollectionConfig, Settings, ENV_PREFIX, ENV_SEPARATOR};
