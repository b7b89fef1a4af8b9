use relation::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_non_json_output_returns_raw_with_200() {
    let base = common::spawn_server(MockLlm::new("```json\nSorry, no idea.\n```")).await;
    let (status, body) = common::post_relation(&base, r#"{"words":["a","b"]}"#).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        serde_json::json!({ "raw": "Sorry, no idea.", "error": "Could not parse Gemini output" })
    );
}

#[tokio::test]
async fn e2e_misshaped_json_returns_raw_with_200() {
    let base = common::spawn_server(MockLlm::new(r#"{"edges":"none"}"#)).await;
    let (status, body) = common::post_relation(&base, r#"{"words":["a"]}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body["raw"], r#"{"edges":"none"}"#);
    assert_eq!(body["error"], "Could not parse Gemini output");
    assert!(body.get("data").is_none());
}
