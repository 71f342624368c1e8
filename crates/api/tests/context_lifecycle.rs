//! Context init/shutdown lifecycle tests.

use std::sync::Arc;

use postpilot_api::AppContext;
use postpilot_domain::{ApiConfig, Config, NotificationConfig, Session};
use postpilot_infra::LogNotifier;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn init_with_notifications_enabled_then_shutdown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scheduled-posts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })),
        )
        .mount(&server)
        .await;

    let config = Config {
        api: ApiConfig { base_url: server.uri(), timeout_secs: 5 },
        notifications: NotificationConfig {
            lead_secs: 60,
            idle_poll_secs: 1,
            enabled: true,
        },
    };

    let ctx = AppContext::init(&config, Session::anonymous("user-1"), Arc::new(LogNotifier::new()))
        .await
        .expect("context initialises");

    // Shutdown is idempotent and never panics.
    ctx.shutdown().await;
    ctx.shutdown().await;
}

#[tokio::test]
async fn init_rejects_invalid_base_url() {
    let config = Config {
        api: ApiConfig { base_url: "not a url".into(), timeout_secs: 5 },
        notifications: NotificationConfig { enabled: false, ..NotificationConfig::default() },
    };

    let result =
        AppContext::init(&config, Session::anonymous("user-1"), Arc::new(LogNotifier::new())).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn init_rejects_empty_user_id() {
    let server = MockServer::start().await;
    let config = Config {
        api: ApiConfig { base_url: server.uri(), timeout_secs: 5 },
        notifications: NotificationConfig { enabled: false, ..NotificationConfig::default() },
    };

    let result =
        AppContext::init(&config, Session::anonymous(""), Arc::new(LogNotifier::new())).await;
    assert!(result.is_err());
}
