//! Request and response printers

use crate::http::{Body, Request};
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};
use url::Url;


/// Observes requests right before they are sent and responses right
/// after they are received.
pub trait Printer: Send + Sync {
    fn request(&self, request: &Request);
    fn response(&self, response: &reqwest::Response);
}

/// Logs one line per request and per response
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactPrinter;

impl Printer for CompactPrinter {
    fn request(&self, request: &Request) {
        log::info!("{} {}", request.method(), request.url());
    }

    fn response(&self, response: &reqwest::Response) {
        log::info!("{} {}", response.status(), response.url());
    }
}

/// Dumps requests and responses to stderr in curl's verbose format
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugPrinter {
    /// Also print in-memory request bodies
    pub body: bool,
}

impl DebugPrinter {
    pub fn new(body: bool) -> Self {
        Self { body }
    }
}

impl Printer for DebugPrinter {
    fn request(&self, request: &Request) {
        eprint!("{}", format_request(request, self.body));
    }

    fn response(&self, response: &reqwest::Response) {
        eprint!(
            "{}",
            format_response(response.version(), response.status(), response.headers())
        );
    }
}

pub(crate) fn format_request(request: &Request, with_body: bool) -> String {
    let url = request.url();
    let mut out = format!("> {} {}\n", request.method(), request_path(url));

    if let Some(host_value) = request.headers().get("host") {
        let host = host_value.to_str().unwrap_or("<non-utf8>");
        out.push_str(&format!("> Host: {}\n", host));
    } else if let Some(host) = url.host_str() {
        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        out.push_str(&format!("> Host: {}\n", host));
    }

    for (name, value) in request.headers().iter() {
        if name.as_str().eq_ignore_ascii_case("host") {
            continue;
        }
        let value = value.to_str().unwrap_or("<non-utf8>");
        out.push_str(&format!("> {}: {}\n", name, value));
    }
    out.push_str(">\n");

    if with_body {
        match request.body() {
            Some(Body::Bytes(bytes)) if !bytes.is_empty() => {
                out.push_str(&String::from_utf8_lossy(bytes));
                out.push('\n');
            }
            Some(Body::Reader(_)) => out.push_str("<streamed body>\n"),
            _ => {}
        }
    }

    out
}

pub(crate) fn format_response(version: Version, status: StatusCode, headers: &HeaderMap) -> String {
    let mut out = format!("< {} {}\n", http_version_label(version), status);
    for (name, value) in headers.iter() {
        let value = value.to_str().unwrap_or("<non-utf8>");
        out.push_str(&format!("< {}: {}\n", name, value));
    }
    out.push_str("<\n");
    out
}

pub(crate) fn http_version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

fn request_path(url: &Url) -> String {
    match url[url::Position::BeforePath..].trim() {
        "" => "/".to_string(),
        path => path.to_string(),
    }
}
