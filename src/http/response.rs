//! Response handle passed on to assertions

use crate::chain::Chain;

/// Raw response paired with the chain of the request that produced it.
///
/// `raw()` is `None` when the request failed before or during dispatch;
/// that failure has already been reported through the chain.
#[derive(Debug)]
pub struct Response {
    chain: Chain,
    response: Option<reqwest::Response>,
}

impl Response {
    pub fn new(chain: Chain, response: Option<reqwest::Response>) -> Self {
        Self { chain, response }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn failed(&self) -> bool {
        self.chain.failed()
    }

    pub fn raw(&self) -> Option<&reqwest::Response> {
        self.response.as_ref()
    }

    pub fn into_raw(self) -> Option<reqwest::Response> {
        self.response
    }
}
