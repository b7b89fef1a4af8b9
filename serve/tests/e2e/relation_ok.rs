use relation::{MockLlm, RelationResponse};

use super::common;

const FENCED: &str = "```json\n{\"edges\":[{\"from\":\"dog\",\"to\":\"animal\",\"relation\":\"is-a\",\"why\":\"x\"}],\"isolated\":[]}\n```";

#[tokio::test]
async fn e2e_fenced_output_is_parsed() {
    let base = common::spawn_server(MockLlm::new(FENCED)).await;
    let (status, body) = common::post_relation(&base, r#"{"words":["dog","animal"]}"#).await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["edges"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["isolated"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["edges"][0]["from"], "dog");
    assert_eq!(
        body["summary"],
        "Here’s how your words are related:\n• dog → animal (is-a): x\n\nIsolated words: none"
    );
    assert!(body.get("error").is_none());

    let parsed: RelationResponse = serde_json::from_value(body).unwrap();
    assert!(matches!(parsed, RelationResponse::Success { .. }));
}

#[tokio::test]
async fn e2e_isolated_words_are_listed() {
    let base = common::spawn_server(MockLlm::new(
        r#"{"edges":[{"from":"dog","to":"animal","relation":"is-a","why":"a dog is a kind of animal"}],"isolated":["rock"]}"#,
    ))
    .await;
    let (status, body) =
        common::post_relation(&base, r#"{"words":["dog","animal","rock"]}"#).await;
    assert_eq!(status, 200);
    assert_eq!(
        body["summary"],
        "Here’s how your words are related:\n• dog → animal (is-a): a dog is a kind of animal\n\nIsolated words: rock"
    );
    assert_eq!(body["data"]["isolated"][0], "rock");
}
