//! Mock palette API for testing remote fetches.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Wrapper around wiremock MockServer serving `/palette-list/{slug}.json`
pub struct MockPaletteServer {
    pub server: MockServer,
}

impl MockPaletteServer {
    /// Start a new mock palette server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the base URL of the mock server
    pub fn url(&self) -> String {
        self.server.uri()
    }

    fn palette_path(slug: &str) -> String {
        format!("/palette-list/{slug}.json")
    }

    /// Serve a palette as JSON
    pub async fn mock_palette(&self, slug: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(Self::palette_path(slug)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .insert_header("content-type", "application/json"),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Serve a raw (possibly invalid) body
    pub async fn mock_raw(&self, slug: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(Self::palette_path(slug)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock an endpoint that returns an error
    pub async fn mock_error(&self, slug: &str, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(Self::palette_path(slug)))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
