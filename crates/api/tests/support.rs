use std::sync::Arc;

use postpilot_api::AppContext;
use postpilot_domain::{ApiConfig, Config, NotificationConfig, Session};
use postpilot_infra::LogNotifier;
use wiremock::MockServer;

/// Shared context for integration tests that drive commands against a
/// mocked remote collection.
pub struct TestContext {
    /// Application context under test.
    pub ctx: Arc<AppContext>,
    /// Mock remote collection; keep alive for the test's lifetime.
    pub server: MockServer,
}

/// Create a context for `user-1` pointed at a fresh mock server.
///
/// Notifications are disabled so tests only observe command traffic.
pub async fn setup_test_context() -> TestContext {
    let server = MockServer::start().await;

    let config = Config {
        api: ApiConfig { base_url: server.uri(), timeout_secs: 5 },
        notifications: NotificationConfig { enabled: false, ..NotificationConfig::default() },
    };
    let session = Session::with_token("user-1", "test-token");

    let ctx = AppContext::init(&config, session, Arc::new(LogNotifier::new()))
        .await
        .expect("context initialises");

    TestContext { ctx, server }
}

/// JSON body for one remote post row.
pub fn post_row(id: &str, content: &str, scheduled_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": "user-1",
        "content": content,
        "scheduled_at": scheduled_at,
        "status": "scheduled"
    })
}
