//! Demo data, shown when the backend is unreachable or the user has no token.
//! Views label anything built from here as sample data.

use chrono::{DateTime, Duration, Utc};
use super::{Accommodation, LocationRecord, NotifiedContact};

pub const ASSISTANT_GREETING: &str = "Hello! I'm your SafeTravel AI assistant. I can help you with travel safety tips, location recommendations, and emergency guidance. How can I assist you today?";

pub const ASSISTANT_CANNED_REPLIES: [&str; 3] = [
    "That's a great question! Based on current safety data, I recommend staying in well-lit areas and using verified transportation services.",
    "I can help you with that! For travel safety, always share your location with trusted contacts and keep emergency numbers handy.",
    "Safety first! Make sure to research your destination beforehand and register with your embassy if traveling internationally.",
];

pub const ASSISTANT_SUGGESTIONS: [&str; 4] = [
    "Is this area safe?",
    "Find nearby hospitals",
    "Travel safety tips",
    "Emergency contacts",
];

pub const DEMO_EMAIL: &str = "demo@safetravel.ai";
pub const DEMO_TOKEN: &str = "demo-token-123";

pub fn emergency_services() -> NotifiedContact {
    NotifiedContact {
        name: "Emergency Services".to_string(),
        phone: "911".to_string(),
    }
}

pub fn location_history(now: DateTime<Utc>) -> Vec<LocationRecord> {
    let entry = |id: &str, latitude: f64, longitude: f64, age_hours: i64, address: &str| LocationRecord {
        id: id.to_string(),
        latitude,
        longitude,
        accuracy: None,
        timestamp: (now - Duration::hours(age_hours)).to_rfc3339(),
        address: Some(address.to_string()),
    };

    vec![
        entry("1", 40.7128, -74.0060, 0, "New York, NY"),
        entry("2", 40.7614, -73.9776, 1, "Midtown Manhattan"),
        entry("3", 40.7484, -73.9857, 2, "Empire State Building"),
    ]
}

pub fn accommodations() -> Vec<Accommodation> {
    let stay = |id: &str, name: &str, kind: &str, price: &str, rating: f64, score: u32, notes: &str, distance: &str| {
        Accommodation {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            price_range: price.to_string(),
            rating,
            safety_score: score,
            safety_notes: notes.to_string(),
            image_url: None,
            distance: distance.to_string(),
        }
    };

    vec![
        stay("1", "The Grand Hotel", "Hotel", "$$$", 4.8, 95, "Well-lit area, 24/7 security, verified reviews", "0.5 km"),
        stay("2", "City View Apartments", "Apartment", "$$", 4.5, 88, "Gated community, security cameras", "1.2 km"),
        stay("3", "Backpackers Haven", "Hostel", "$", 4.2, 82, "Popular with travelers, good reviews", "2.0 km"),
        stay("4", "Luxury Suites", "Hotel", "$$$$", 4.9, 98, "Premium security, concierge service", "0.8 km"),
    ]
}
