//! Conformance test harness.
//!
//! Provides a configured client against a target deployment, raw request
//! helpers for cases that deliberately bypass the typed API, and scoped
//! pet acquisition with guaranteed teardown.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use reqwest::Response;
use serde_json::Value;

use petstore_client::{ClientConfig, Pet, PetstoreClient};

/// Test harness for petstore conformance testing.
///
/// # Example
///
/// ```rust,ignore
/// use common::harness::PetstoreHarness;
///
/// #[tokio::test]
/// async fn test_read() {
///     let mut server = mockito::Server::new_async().await;
///     // ... script mocks ...
///     let harness = PetstoreHarness::new(&server.url());
///
///     let pet = harness.client.get_pet(123).await.unwrap();
///     assert_eq!(pet.id, 123);
/// }
/// ```
pub struct PetstoreHarness {
    /// The typed client under test.
    pub client: PetstoreClient,

    /// Raw HTTP client for requests the typed client refuses to build.
    raw: reqwest::Client,

    /// Base URL requests are issued against.
    pub base_url: String,
}

impl PetstoreHarness {
    /// Creates a harness against the given base URL.
    pub fn new(base_url: &str) -> Self {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::for_testing()
        };
        let client = PetstoreClient::new(&config).expect("failed to build client");

        Self {
            client,
            raw: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a harness against the live service configured by the
    /// environment (`PETSTORE_API` honored).
    pub fn live() -> Self {
        let config = ClientConfig::from_env();
        let client = PetstoreClient::new(&config).expect("failed to build client");
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Self {
            client,
            raw: reqwest::Client::new(),
            base_url,
        }
    }

    /// Makes a raw GET request for a pet id.
    pub async fn get_pet_raw(&self, id: i64) -> Response {
        self.raw
            .get(format!("{}/pet/{}", self.base_url, id))
            .header("Accept", "application/json")
            .send()
            .await
            .expect("request failed")
    }

    /// Makes a raw POST to the create endpoint with an arbitrary JSON body.
    pub async fn post_pet_raw(&self, body: &Value) -> Response {
        self.raw
            .post(format!("{}/pet", self.base_url))
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    /// Creates `pet`, runs `body` with the service's echo of it, and deletes
    /// the pet on every exit path.
    ///
    /// Teardown runs even when the body panics; the panic is resumed after
    /// cleanup so the test still fails with its original message. A teardown
    /// failure is reported but never masks the body's own outcome.
    pub async fn with_pet<F, Fut>(&self, pet: Pet, body: F)
    where
        F: FnOnce(Pet) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let id = pet.id;
        let created = self
            .client
            .create_pet(&pet)
            .await
            .expect("fixture pet creation failed");

        let outcome = AssertUnwindSafe(body(created)).catch_unwind().await;

        if let Err(err) = self.client.delete_pet(id).await {
            eprintln!("teardown: failed to delete pet {}: {}", id, err);
        }

        if let Err(panic) = outcome {
            std::panic::resume_unwind(panic);
        }
    }
}
