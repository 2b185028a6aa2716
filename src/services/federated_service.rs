use serde_json::Value;

use crate::utils::{PATH_FEDERATED_AGGREGATE, PATH_FEDERATED_TRAIN};
use super::api_client::{ApiClient, ApiError, ApiRequest};

/// Train the prediction model on this user's history (server side)
pub async fn train_local(client: &ApiClient, token: Option<&str>) -> Result<String, ApiError> {
    log::info!("🧪 Entrenamiento federado local...");
    status_call(client, PATH_FEDERATED_TRAIN, token).await
}

/// Merge local updates into the shared model
pub async fn aggregate(client: &ApiClient, token: Option<&str>) -> Result<String, ApiError> {
    log::info!("🧪 Agregando modelos federados...");
    status_call(client, PATH_FEDERATED_AGGREGATE, token).await
}

async fn status_call(client: &ApiClient, path: &str, token: Option<&str>) -> Result<String, ApiError> {
    let value: Value = client.call(ApiRequest::post(path).token(token)).await?;
    Ok(match value {
        Value::String(text) => text,
        Value::Null => "OK".to_string(),
        other => other
            .get("status")
            .or_else(|| other.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn train_then_aggregate_report_status() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"status":"local model updated"}"#);
        transport.respond(200, "");
        let client = ApiClient::with_transport("http://api.test", transport.clone());

        assert_eq!(block_on(train_local(&client, Some("t"))).unwrap(), "local model updated");
        assert_eq!(block_on(aggregate(&client, Some("t"))).unwrap(), "OK");

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://api.test/api/v1/federated/train-local",
                "http://api.test/api/v1/federated/aggregate"
            ]
        );
    }
}
