//! Configuration shared by every request built from an [`Expect`](crate::expect::Expect)

use std::fmt;
use std::sync::Arc;

use crate::chain::{PanicReporter, Reporter};
use crate::http::Client;
use crate::printer::Printer;

/// Main configuration struct
#[derive(Clone)]
pub struct Config {
    /// Prepended to every request URL, separated by a single slash
    pub base_url: String,
    /// Transport executing assembled requests
    pub client: Arc<dyn Client>,
    /// Optional request/response logger
    pub printer: Option<Arc<dyn Printer>>,
    /// Receives the first failure of each request
    pub reporter: Arc<dyn Reporter>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::new(),
            client: Arc::new(reqwest::Client::new()),
            printer: None,
            reporter: Arc::new(PanicReporter),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("printer", &self.printer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default_config_has_no_base_url_or_printer() {
        let config = Config::default();
        assert!(config.base_url.is_empty());
        assert!(config.printer.is_none());
    }

    #[test]
    fn debug_output_shows_base_url() {
        let config = Config {
            base_url: "http://example.org".to_string(),
            ..Config::default()
        };
        let output = format!("{:?}", config);
        assert!(output.contains("http://example.org"));
        assert!(output.contains("printer: false"));
    }
}
