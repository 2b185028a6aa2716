use serde_json::Value;

use crate::utils::PATH_ASSISTANT_CHAT;
use super::api_client::{ApiClient, ApiError, ApiRequest};

/// Send a question (as a query parameter) and return the reply text.
pub async fn chat(client: &ApiClient, question: &str, token: Option<&str>) -> Result<String, ApiError> {
    log::info!("💬 Pregunta al asistente ({} caracteres)", question.len());
    let request = ApiRequest::post(PATH_ASSISTANT_CHAT)
        .token(token)
        .param("question", question);
    let value: Value = client.call(request).await?;
    Ok(reply_text(value))
}

/// Structured replies use their `response`/`answer`/`message` field when present,
/// anything else is shown as JSON text.
fn reply_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        Value::Object(ref map) => ["response", "answer", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn question_travels_in_the_query_string() {
        let transport = FakeTransport::new();
        transport.respond(200, r#""Stay in well-lit streets.""#);
        let client = ApiClient::with_transport("http://api.test", transport.clone());

        let reply = block_on(chat(&client, "Is it safe at night?", Some("t"))).unwrap();
        assert_eq!(reply, "Stay in well-lit streets.");

        let sent = transport.last_request();
        assert_eq!(
            sent.url,
            "http://api.test/api/v1/assistant/chat?question=Is+it+safe+at+night%3F"
        );
        assert_eq!(sent.body, None);
    }

    #[test]
    fn structured_replies_are_flattened() {
        assert_eq!(reply_text(serde_json::json!({"answer": "Yes"})), "Yes");
        assert_eq!(reply_text(serde_json::json!({"score": 3})), r#"{"score":3}"#);
        assert_eq!(reply_text(serde_json::json!(null)), "");
    }
}
