use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use super::serde_ext::id_from_any;

/// Coordenadas geográficas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// A reading from the browser geolocation API
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl LocationFix {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// One entry of the server-side location history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(alias = "created_at")]
    pub timestamp: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl LocationRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Accepts RFC 3339 and the offset-less form the backend emits, read as UTC.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return Some(with_offset.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub confidence: f64,
}

impl PredictedLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Current,
    Predicted,
    History,
}

/// Marker handed to the Leaflet bridge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub kind: MarkerKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MapMarker {
    pub fn new(coordinates: Coordinates, kind: MarkerKind, label: Option<String>) -> Self {
        Self {
            lat: coordinates.latitude,
            lng: coordinates.longitude,
            kind,
            label,
        }
    }

    /// Current position first, then the prediction, then history in server order.
    pub fn collect(
        current: Option<&Coordinates>,
        predicted: Option<&PredictedLocation>,
        history: &[LocationRecord],
    ) -> Vec<MapMarker> {
        let mut markers = Vec::with_capacity(history.len() + 2);
        if let Some(current) = current {
            markers.push(MapMarker::new(*current, MarkerKind::Current, Some("You are here".to_string())));
        }
        if let Some(predicted) = predicted {
            markers.push(MapMarker::new(
                predicted.coordinates(),
                MarkerKind::Predicted,
                Some(format!("Predicted ({:.0}%)", predicted.confidence * 100.0)),
            ));
        }
        markers.extend(history.iter().map(|record| {
            MapMarker::new(record.coordinates(), MarkerKind::History, record.address.clone())
        }));
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_record_accepts_backend_shape() {
        let record: LocationRecord = serde_json::from_str(
            r#"{"id":12,"latitude":1.5,"longitude":2.5,"accuracy":8.0,"created_at":"2025-01-02T03:04:05.123"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "12");
        assert_eq!(record.address, None);
        let ts = record.parsed_timestamp().unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-01-02T03:04:05.123+00:00");
    }

    #[test]
    fn history_record_accepts_demo_shape() {
        let record: LocationRecord = serde_json::from_str(
            r#"{"id":"1","latitude":40.7,"longitude":-74.0,"timestamp":"2025-01-02T03:04:05Z","address":"New York, NY"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "1");
        assert!(record.parsed_timestamp().is_some());
        assert_eq!(record.address.as_deref(), Some("New York, NY"));
    }

    #[test]
    fn markers_keep_current_then_prediction_then_history() {
        let current = Coordinates::new(1.0, 2.0);
        let predicted = PredictedLocation { latitude: 3.0, longitude: 4.0, confidence: 0.9 };
        let history = vec![LocationRecord {
            id: "a".into(),
            latitude: 5.0,
            longitude: 6.0,
            accuracy: None,
            timestamp: "2025-01-01T00:00:00Z".into(),
            address: Some("Somewhere".into()),
        }];

        let markers = MapMarker::collect(Some(&current), Some(&predicted), &history);
        let kinds: Vec<_> = markers.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![MarkerKind::Current, MarkerKind::Predicted, MarkerKind::History]);
        assert_eq!(markers[1].label.as_deref(), Some("Predicted (90%)"));

        let json = serde_json::to_value(&markers[2]).unwrap();
        assert_eq!(json["kind"], "history");
        assert_eq!(json["label"], "Somewhere");

        assert!(MapMarker::collect(None, None, &[]).is_empty());
    }
}
