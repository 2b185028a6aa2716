use serde::Deserialize;
use serde_json::Value;

use crate::models::Accommodation;
use crate::utils::PATH_RECOMMEND_ACCOMMODATION;
use super::api_client::{ApiClient, ApiError, ApiRequest};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationPayload {
    List(Vec<Accommodation>),
    Wrapped { recommendations: Vec<Accommodation> },
    Other(Value),
}

/// Safe stays near the user's current or predicted location.
///
/// `Ok(None)` when the backend answered with something that is not a list of stays.
pub async fn accommodations(
    client: &ApiClient,
    token: Option<&str>,
) -> Result<Option<Vec<Accommodation>>, ApiError> {
    log::info!("🏨 Buscando alojamientos recomendados...");
    let request = ApiRequest::post(PATH_RECOMMEND_ACCOMMODATION).token(token);
    Ok(match client.call::<RecommendationPayload>(request).await? {
        RecommendationPayload::List(stays) => Some(stays),
        RecommendationPayload::Wrapped { recommendations } => Some(recommendations),
        RecommendationPayload::Other(value) => {
            log::warn!("⚠️ Recomendaciones en formato desconocido: {}", value);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;

    #[test]
    fn wrapped_list_and_free_text() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"recommendations":[{"id":1,"name":"Inn","type":"Hotel","safety_score":91}]}"#,
        );
        transport.respond(200, r#""Try the old town""#);
        let client = ApiClient::with_transport("http://api.test", transport);

        let stays = block_on(accommodations(&client, Some("t"))).unwrap().unwrap();
        assert_eq!(stays.len(), 1);
        assert_eq!(stays[0].name, "Inn");

        assert_eq!(block_on(accommodations(&client, Some("t"))).unwrap(), None);
    }
}
