use relation::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_health_reports_ok() {
    let base = common::spawn_server(MockLlm::new("")).await;
    let body: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}
