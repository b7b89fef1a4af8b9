use relation::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_invalid_words_return_400_with_exact_message() {
    let llm = MockLlm::new(r#"{"edges":[],"isolated":[]}"#);
    let base = common::spawn_server(llm).await;

    for body in [
        "{}",
        r#"{"words":"dog"}"#,
        r#"{"words":[]}"#,
        r#"{"words":null}"#,
        r#"{"words":[1,2]}"#,
        "not json",
        "",
    ] {
        let (status, json) = common::post_relation(&base, body).await;
        assert_eq!(status, 400, "body {:?}", body);
        assert_eq!(
            json,
            serde_json::json!({ "error": "Please send words as an array" }),
            "body {:?}",
            body
        );
    }
}

#[tokio::test]
async fn e2e_invalid_words_never_reach_the_provider() {
    let llm = std::sync::Arc::new(MockLlm::new("unused"));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let service = relation::RelationService::new(llm.clone());
    tokio::spawn(serve::run_serve_on_listener(listener, service));

    let (status, _) = common::post_relation(&base, r#"{"words":[]}"#).await;
    assert_eq!(status, 400);
    assert!(llm.prompts().is_empty());
}
