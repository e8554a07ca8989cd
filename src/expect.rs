//! Entry point creating request builders from a shared [`Config`]

use crate::config::Config;
use crate::http::request::RequestBuilder;
use crate::utils::UrlArgs;

/// Creates [`RequestBuilder`]s sharing one configuration.
///
/// Every builder gets its own failure chain, so a failed request does not
/// affect the next one.
#[derive(Debug, Clone, Default)]
pub struct Expect {
    config: Config,
}

impl Expect {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start a request with an arbitrary method
    pub fn request(&self, method: &str, urlfmt: &str, args: &UrlArgs<'_>) -> RequestBuilder {
        RequestBuilder::new(self.config.clone(), method, urlfmt, args)
    }

    pub fn get(&self, urlfmt: &str, args: &UrlArgs<'_>) -> RequestBuilder {
        self.request("GET", urlfmt, args)
    }

    pub fn head(&self, urlfmt: &str, args: &UrlArgs<'_>) -> RequestBuilder {
        self.request("HEAD", urlfmt, args)
    }

    pub fn post(&self, urlfmt: &str, args: &UrlArgs<'_>) -> RequestBuilder {
        self.request("POST", urlfmt, args)
    }

    pub fn put(&self, urlfmt: &str, args: &UrlArgs<'_>) -> RequestBuilder {
        self.request("PUT", urlfmt, args)
    }

    pub fn patch(&self, urlfmt: &str, args: &UrlArgs<'_>) -> RequestBuilder {
        self.request("PATCH", urlfmt, args)
    }

    pub fn delete(&self, urlfmt: &str, args: &UrlArgs<'_>) -> RequestBuilder {
        self.request("DELETE", urlfmt, args)
    }

    pub fn options(&self, urlfmt: &str, args: &UrlArgs<'_>) -> RequestBuilder {
        self.request("OPTIONS", urlfmt, args)
    }
}
