// crates/countries-core/src/transport.rs

//! # Transport
//!
//! The seam below the [`Fetcher`](crate::fetcher::Fetcher): one async GET,
//! returning whatever status and body the server sent. Status validation and
//! JSON parsing happen above this layer so every transport behaves the same.
//!
//! The trait carries no `Send` bound. Requests are driven concurrently inside
//! a single task, never spawned, which keeps browser `fetch` futures usable.

use crate::error::Result;

/// Raw response as handed back by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for `200..=299`, like `Response.ok` in the browser.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Issues exactly one GET request to `url`.
    ///
    /// Non-2xx statuses are *not* errors at this level; only failures to
    /// obtain a response at all are.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

// -----------------------------------------------------------------------------
// NATIVE TRANSPORT (reqwest)
// -----------------------------------------------------------------------------

#[cfg(feature = "http")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use super::{HttpResponse, Transport};
    use crate::error::{CountryError, Result};

    /// [`Transport`] backed by a shared `reqwest::Client`.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Transport for ReqwestTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            let failed = |e: reqwest::Error| CountryError::Transport {
                url: url.to_owned(),
                message: e.to_string(),
            };

            let response = self.client.get(url).send().await.map_err(failed)?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(failed)?;

            Ok(HttpResponse::new(status, body.to_vec()))
        }
    }
}
