//! Log output setup.
//!
//! ```no_run
//! let config = quill_session::Config::from_json(r#"{"log_level":"debug"}"#).unwrap();
//! quill_session::telemetry::builder().with_config(&config).init();
//! ```

use tracing::Subscriber;
use tracing_subscriber::{prelude::*, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "QUILL_LOG";

#[derive(Debug, Clone)]
pub struct Builder {
    log_level: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

pub fn builder() -> Builder {
    Builder::default()
}

impl Builder {
    /// Set the filter directive, e.g. `"debug"` or `"quill_mutation=trace"`.
    pub fn with_log_level(mut self, log_level: &str) -> Self {
        self.log_level = log_level.to_string();
        self
    }

    /// Take the filter directive from `config.log_level`.
    pub fn with_config(self, config: &Config) -> Self {
        self.with_log_level(&config.log_level)
    }

    /// Filter in effect: `QUILL_LOG` when set, the configured level otherwise.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Build a subscriber writing formatted events to stderr.
    pub fn build(self) -> Box<dyn Subscriber + Send + Sync + 'static> {
        Box::new(
            tracing_subscriber::registry()
                .with(self.filter())
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    }

    /// Install as the global subscriber. Returns false if one was already set.
    pub fn init(self) -> bool {
        self.build().try_init().is_ok()
    }
}
