use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::{
    config::{FileSinkConfig, LoggingConfig},
    formatter,
};

/// Daily rolling file layer. The returned guard must outlive the
/// subscriber, otherwise buffered lines are lost.
pub fn layer_with_config<S>(
    config: &LoggingConfig,
    file: &FileSinkConfig,
) -> (Box<dyn LayerTrait<S> + Send + Sync>, WorkerGuard)
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let appender = rolling::daily(&file.dir, &file.prefix);
    let (writer, guard) = non_blocking(appender);

    // No color codes in files.
    let layer = formatter::build_formatter_from_config(config, writer, false);

    (layer, guard)
}
