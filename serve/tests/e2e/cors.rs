use relation::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_cross_origin_requests_are_allowed() {
    let base = common::spawn_server(MockLlm::new(r#"{"edges":[],"isolated":[]}"#)).await;
    let client = reqwest::Client::new();

    let preflight = client
        .request(reqwest::Method::OPTIONS, format!("{}/relation", base))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();
    assert!(preflight.status().is_success());
    assert!(preflight
        .headers()
        .contains_key("access-control-allow-origin"));

    let resp = client
        .post(format!("{}/relation", base))
        .header("origin", "http://localhost:3000")
        .json(&serde_json::json!({ "words": ["a"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}
