#![allow(dead_code)]

use std::time::Duration;
use toolrouter::config::HttpSettings;
use toolrouter::tools::{Tool, ToolFactory};
use toolrouter::ToolSpec;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn factory() -> ToolFactory {
    ToolFactory::new(&HttpSettings::default()).unwrap()
}

pub fn factory_with_timeout(timeout: Duration) -> ToolFactory {
    ToolFactory::new(&HttpSettings {
        timeout,
        ..HttpSettings::default()
    })
    .unwrap()
}

pub fn tool(spec: ToolSpec) -> Tool {
    factory().create(spec)
}

/// Serve `body` as JSON to every GET after waiting `delay`. The server shuts
/// down when the returned handle is dropped.
pub async fn delayed_json_server(delay: Duration, body: &'static str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body, "application/json")
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}
