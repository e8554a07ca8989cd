//! httpexpect - fluent HTTP request builder for end-to-end API tests
//!
//! Requests are described step by step with a [`RequestBuilder`], sent
//! through a pluggable [`Client`](crate::http::Client), and returned as a
//! [`Response`] for assertions. Failures along the way are funnelled into
//! a [`Chain`] and reported once through its [`Reporter`].

pub mod chain;
pub mod config;
pub mod error;
pub mod expect;
pub mod http;
pub mod logging;
pub mod printer;
pub mod utils;

pub use chain::{Chain, LogReporter, PanicReporter, Reporter};
pub use config::Config;
pub use error::{ExpectError, Result};
pub use expect::Expect;
pub use crate::http::request::RequestBuilder;
pub use crate::http::response::Response;
pub use printer::{CompactPrinter, DebugPrinter, Printer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
