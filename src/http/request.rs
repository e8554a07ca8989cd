//! Fluent request builder
//!
//! [`RequestBuilder`] incrementally describes a request, then
//! [`expect()`](RequestBuilder::expect) assembles it, sends it through the
//! configured [`Client`](crate::http::Client) and hands back a
//! [`Response`] for assertions.
//!
//! Every failure is recorded on the builder's [`Chain`]. Once the chain has
//! failed, further configuration calls are accepted but ignored, and
//! `expect()` returns a response handle without a response.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use url::{form_urlencoded, Url};

use crate::chain::Chain;
use crate::config::Config;
use crate::error::ExpectError;
use crate::http::auth::Auth;
use crate::http::response::Response;
use crate::http::{Body, Request};
use crate::utils::{UrlArgs, UrlUtils};


const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Query parameters keyed by name, values in the order they were added
type QueryValues = BTreeMap<String, Vec<String>>;

/// Incrementally builds a request, sends it and returns a [`Response`].
#[derive(Debug)]
#[must_use]
pub struct RequestBuilder {
    config: Config,
    chain: Chain,
    method: Method,
    /// `None` only when the URL could not be built; the chain has failed then.
    url: Option<Url>,
    /// `None` until the first `with_query`, the URL's raw query is authoritative until then.
    query: Option<QueryValues>,
    headers: HeaderMap,
    body: Option<Body>,
}

impl RequestBuilder {
    /// Create a new request builder.
    ///
    /// `urlfmt` may contain `%v`, `%s` or `%d` placeholders which are
    /// replaced positionally by `args`. A `None` argument is reported as a
    /// failure. If `config.base_url` is non-empty it is prepended to the
    /// interpolated URL, separated by a single slash.
    ///
    /// ```no_run
    /// use httpexpect::config::Config;
    /// use httpexpect::http::request::RequestBuilder;
    ///
    /// # async fn run() {
    /// let response = RequestBuilder::new(Config::default(), "PUT", "http://example.org/path", &[])
    ///     .with_query("foo", 123)
    ///     .with_json(&serde_json::json!({"bar": "baz"}))
    ///     .expect()
    ///     .await;
    /// # }
    /// ```
    pub fn new(config: Config, method: &str, urlfmt: &str, args: &UrlArgs<'_>) -> Self {
        let mut chain = Chain::new(config.reporter.clone());

        if args.iter().any(Option::is_none) {
            chain.fail(ExpectError::NilArgument {
                method: method.to_string(),
                args: UrlUtils::describe_args(args),
            });
        }

        let method = match Method::from_bytes(method.as_bytes()) {
            Ok(method) => method,
            Err(_) => {
                chain.fail(ExpectError::InvalidMethod(method.to_string()));
                Method::GET
            }
        };

        let url = UrlUtils::interpolate(urlfmt, args)
            .map(|path| UrlUtils::concat(&config.base_url, &path))
            .and_then(|url| UrlUtils::parse(&url));
        let url = match url {
            Ok(url) => Some(url),
            Err(err) => {
                chain.fail(err);
                None
            }
        };

        Self {
            config,
            chain,
            method,
            url,
            query: None,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn failed(&self) -> bool {
        self.chain.failed()
    }

    /// Add a query parameter; repeated keys keep every value.
    ///
    /// Parameters already present in the URL are preserved. The final query
    /// is encoded with keys sorted when the request is sent.
    pub fn with_query(mut self, key: &str, value: impl fmt::Display) -> Self {
        if self.chain.failed() {
            return self;
        }
        if let Some(url) = &self.url {
            self.query
                .get_or_insert_with(|| parse_query(url))
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }
        self
    }

    /// Add a header; an existing header with the same name is kept.
    pub fn with_header(mut self, key: &str, value: impl fmt::Display) -> Self {
        if self.chain.failed() {
            return self;
        }
        self.append_header(key, &value.to_string());
        self
    }

    /// Add every header of `headers`, as if by [`with_header`](Self::with_header).
    pub fn with_headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        headers
            .into_iter()
            .fold(self, |req, (key, value)| req.with_header(key.as_ref(), value))
    }

    /// Add an `Authorization: Basic` header
    pub fn with_basic_auth(self, username: &str, password: &str) -> Self {
        self.with_header(AUTHORIZATION.as_str(), Auth::basic_auth(username, password))
    }

    /// Add an `Authorization: Bearer` header
    pub fn with_bearer_token(self, token: &str) -> Self {
        self.with_header(AUTHORIZATION.as_str(), Auth::bearer_token(token))
    }

    /// Use `reader` as the request body, replacing any previous body.
    ///
    /// The transport reads it to the end; its length is unknown until then.
    /// `None` removes the body.
    pub fn with_body(mut self, reader: Option<Box<dyn Read + Send>>) -> Self {
        if self.chain.failed() {
            return self;
        }
        self.body = reader.map(Body::Reader);
        self
    }

    /// Use `bytes` as the request body, replacing any previous body.
    ///
    /// `None` removes the body.
    pub fn with_bytes(mut self, bytes: Option<&[u8]>) -> Self {
        if self.chain.failed() {
            return self;
        }
        self.body = bytes.map(|bytes| Body::Bytes(bytes.to_vec()));
        self
    }

    /// Serialize `object` as the JSON body and add a JSON `Content-Type`.
    ///
    /// On serialization failure the body and headers are left untouched.
    pub fn with_json<T: Serialize + ?Sized>(mut self, object: &T) -> Self {
        if self.chain.failed() {
            return self;
        }
        match serde_json::to_vec(object) {
            Ok(bytes) => {
                self.append_header(CONTENT_TYPE.as_str(), JSON_CONTENT_TYPE);
                self.body = Some(Body::Bytes(bytes));
            }
            Err(err) => self.chain.fail(ExpectError::Json(err)),
        }
        self
    }

    /// Use `text` as a UTF-8 body and add a plain text `Content-Type`.
    pub fn with_text(mut self, text: &str) -> Self {
        if self.chain.failed() {
            return self;
        }
        self.append_header(CONTENT_TYPE.as_str(), TEXT_CONTENT_TYPE);
        self.body = Some(Body::Bytes(text.as_bytes().to_vec()));
        self
    }

    /// Form-encode `fields` in the given order as the body and add a form
    /// `Content-Type`.
    pub fn with_form<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        if self.chain.failed() {
            return self;
        }
        let mut form = form_urlencoded::Serializer::new(String::new());
        for (key, value) in fields {
            form.append_pair(key.as_ref(), &value.to_string());
        }
        self.append_header(CONTENT_TYPE.as_str(), FORM_CONTENT_TYPE);
        self.body = Some(Body::Bytes(form.finish().into_bytes()));
        self
    }

    /// Send the request and return a [`Response`] to inspect.
    ///
    /// Nothing is sent if a failure has already been recorded.
    pub async fn expect(mut self) -> Response {
        let response = self.send_request().await;
        Response::new(self.chain, response)
    }

    async fn send_request(&mut self) -> Option<reqwest::Response> {
        if self.chain.failed() {
            return None;
        }

        let mut url = self.url.take()?;
        if let Some(query) = self.query.take() {
            let encoded = encode_query(&query);
            url.set_query((!encoded.is_empty()).then_some(encoded.as_str()));
        }

        let request = Request::new(
            self.method.clone(),
            url,
            std::mem::take(&mut self.headers),
            self.body.take(),
        );

        if let Some(printer) = &self.config.printer {
            printer.request(&request);
        }

        log::debug!("sending {} {}", request.method(), request.url());

        match self.config.client.execute(request).await {
            Ok(response) => {
                log::debug!("received {} from {}", response.status(), response.url());
                if let Some(printer) = &self.config.printer {
                    printer.response(&response);
                }
                Some(response)
            }
            Err(err) => {
                self.chain.fail(err);
                None
            }
        }
    }

    fn append_header(&mut self, key: &str, value: &str) {
        let name = match HeaderName::from_bytes(key.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                self.chain
                    .fail(ExpectError::InvalidHeader(format!("'{}': {}", key, e)));
                return;
            }
        };
        let value = match HeaderValue::from_str(value) {
            Ok(value) => value,
            Err(e) => {
                self.chain.fail(ExpectError::InvalidHeader(format!(
                    "'{}: {}': {}",
                    key, value, e
                )));
                return;
            }
        };
        self.headers.append(name, value);
    }
}

fn parse_query(url: &Url) -> QueryValues {
    let mut values = QueryValues::new();
    for (key, value) in url.query_pairs() {
        values
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    values
}

fn encode_query(values: &QueryValues) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, key_values) in values {
        for value in key_values {
            query.append_pair(key, value);
        }
    }
    query.finish()
}
