use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Logger settings for hosts that want to see this crate's diagnostics.
///
/// The crate only ever logs codec decode failures, at `debug`, under the
/// `opencg_geometry::codec` target. With the default `info` level nothing is
/// printed; use a filter such as `"opencg_geometry::codec=debug"` to see them.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives. `None` falls back to `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl LoggingConfig {
    /// Config that surfaces decode failures regardless of `RUST_LOG`.
    pub fn codec_debug() -> Self {
        Self {
            env_filter: Some("opencg_geometry::codec=debug".into()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger, once per process.
///
/// Later calls are no-ops. A logger that is already installed, such as the
/// one `test-log` sets up, is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(LevelFilter::Info),
        };
        builder.write_style(config.write_style);

        if let Err(err) = builder.try_init() {
            log::debug!("keeping existing logger: {err}");
        }
    });
}
