use serde::{Deserialize, Serialize};
use super::serde_ext::id_from_any;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub safety_score: u32,
    #[serde(default)]
    pub safety_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub distance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyTier {
    High,
    Medium,
    Low,
}

impl SafetyTier {
    pub fn css_class(&self) -> &'static str {
        match self {
            SafetyTier::High => "safety-high",
            SafetyTier::Medium => "safety-medium",
            SafetyTier::Low => "safety-low",
        }
    }
}

impl Accommodation {
    pub fn safety_tier(&self) -> SafetyTier {
        match self.safety_score {
            90..=u32::MAX => SafetyTier::High,
            70..=89 => SafetyTier::Medium,
            _ => SafetyTier::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        let mut stay: Accommodation = serde_json::from_str(
            r#"{"id":3,"name":"Hostel","type":"Hostel","safety_score":90}"#,
        )
        .unwrap();
        assert_eq!(stay.id, "3");
        assert_eq!(stay.kind, "Hostel");
        assert_eq!(stay.safety_tier(), SafetyTier::High);
        stay.safety_score = 70;
        assert_eq!(stay.safety_tier(), SafetyTier::Medium);
        stay.safety_score = 69;
        assert_eq!(stay.safety_tier(), SafetyTier::Low);
        assert_eq!(stay.safety_tier().css_class(), "safety-low");
    }
}
