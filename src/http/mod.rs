//! HTTP transport module
//!
//! This module defines the assembled [`Request`], the [`Client`] seam that
//! executes it, and the builder and response types layered on top.

use crate::error::{ExpectError, Result};
use futures_util::future::BoxFuture;
use reqwest::header::HeaderMap;
use reqwest::Method;
use std::fmt;
use std::io::Read;
use url::Url;

pub mod auth;
pub mod request;
pub mod response;

/// Request body, at most one per request
pub enum Body {
    /// In-memory bytes with a known length
    Bytes(Vec<u8>),
    /// Stream read by the transport until exhaustion
    Reader(Box<dyn Read + Send>),
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Body::Reader(_) => f.write_str("Reader"),
        }
    }
}

/// Fully assembled request handed to a [`Client`]
#[derive(Debug)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Body>,
}

impl Request {
    pub(crate) fn new(method: Method, url: Url, headers: HeaderMap, body: Option<Body>) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute URL including the encoded query
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// `Some(0)` without a body, `None` when the length is only known
    /// after reading a streaming body.
    pub fn content_length(&self) -> Option<u64> {
        match &self.body {
            None => Some(0),
            Some(Body::Bytes(bytes)) => Some(bytes.len() as u64),
            Some(Body::Reader(_)) => None,
        }
    }

    pub fn into_parts(self) -> (Method, Url, HeaderMap, Option<Body>) {
        (self.method, self.url, self.headers, self.body)
    }

    /// Convert into a `reqwest::Request`, draining a streaming body
    pub fn into_reqwest(self) -> Result<reqwest::Request> {
        let (method, url, headers, body) = self.into_parts();
        let mut request = reqwest::Request::new(method, url);
        *request.headers_mut() = headers;

        let bytes = match body {
            None => None,
            Some(Body::Bytes(bytes)) => Some(bytes),
            Some(Body::Reader(mut reader)) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Some(buf)
            }
        };
        if let Some(bytes) = bytes {
            *request.body_mut() = Some(reqwest::Body::from(bytes));
        }

        Ok(request)
    }
}

/// Transport executing assembled requests
///
/// Implementations return either a response or an error, never both.
pub trait Client: Send + Sync {
    fn execute(&self, request: Request) -> BoxFuture<'_, Result<reqwest::Response>>;
}

impl Client for reqwest::Client {
    fn execute(&self, request: Request) -> BoxFuture<'_, Result<reqwest::Response>> {
        Box::pin(async move {
            let request = request.into_reqwest()?;
            reqwest::Client::execute(self, request)
                .await
                .map_err(ExpectError::Http)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Body, Request};
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
    use reqwest::Method;
    use std::io::Cursor;
    use url::Url;

    fn request_with(body: Option<Body>) -> Request {
        let url = Url::parse("http://example.org/path?a=1").expect("valid url");
        let mut headers = HeaderMap::new();
        headers.append(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        Request::new(Method::PUT, url, headers, body)
    }

    #[test]
    fn content_length_follows_body_kind() {
        assert_eq!(request_with(None).content_length(), Some(0));
        assert_eq!(
            request_with(Some(Body::Bytes(b"abc".to_vec()))).content_length(),
            Some(3)
        );
        let reader = Cursor::new(b"abc".to_vec());
        assert_eq!(
            request_with(Some(Body::Reader(Box::new(reader)))).content_length(),
            None
        );
    }

    #[test]
    fn into_reqwest_keeps_method_url_and_headers() {
        let request = request_with(None).into_reqwest().expect("converted");
        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.url().as_str(), "http://example.org/path?a=1");
        assert_eq!(request.headers()[CONTENT_TYPE], "text/plain");
        assert!(request.body().is_none());
    }

    #[test]
    fn into_reqwest_drains_streaming_body() {
        let reader = Cursor::new(b"streamed".to_vec());
        let request = request_with(Some(Body::Reader(Box::new(reader))))
            .into_reqwest()
            .expect("converted");
        let body = request.body().and_then(|b| b.as_bytes()).expect("bytes");
        assert_eq!(body, b"streamed");
    }

    #[test]
    fn into_reqwest_reports_read_errors() {
        struct Broken;
        impl std::io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe"))
            }
        }

        let err = request_with(Some(Body::Reader(Box::new(Broken))))
            .into_reqwest()
            .expect_err("read error");
        assert!(err.to_string().contains("broken pipe"));
    }
}
