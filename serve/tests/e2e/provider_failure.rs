use relation::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_provider_failure_returns_500_generic_message() {
    let base = common::spawn_server(MockLlm::failing("upstream exploded: secret detail")).await;
    let (status, body) = common::post_relation(&base, r#"{"words":["a","b"]}"#).await;
    assert_eq!(status, 500);
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
}
