//! Common test infrastructure for hexshade integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod mock_server;

pub use mock_server::MockPaletteServer;

use hexshade::models::{ApiConfig, PaletteWithCredits};
use hexshade::services::{LospecClient, PaletteSource, SourceError};

/// API settings pointed at a mock server
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

/// Fetch a palette from the mock server.
///
/// The blocking client owns its own runtime, so it is built, used and
/// dropped on a blocking thread.
pub async fn fetch_blocking(
    server: &MockPaletteServer,
    name: &str,
) -> Result<PaletteWithCredits, SourceError> {
    let config = api_config(&server.url());
    let name = name.to_string();
    tokio::task::spawn_blocking(move || LospecClient::new(&config)?.fetch(&name))
        .await
        .expect("fetch task panicked")
}
