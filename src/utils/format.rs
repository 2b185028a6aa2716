use chrono::{DateTime, Utc};

/// "Just now", "5m ago", "3h ago", otherwise the calendar date.
pub fn format_relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*timestamp);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

/// `lat, lng` with six decimals, the precision shown everywhere in the UI
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{:.6}, {:.6}", latitude, longitude)
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", (confidence * 100.0).clamp(0.0, 100.0))
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Keeps digits and `+`, drops everything else typed into a phone field
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect()
}

/// Name shown in headers: the part of the email before `@`
pub fn display_name(email: &str) -> &str {
    email.split('@').next().filter(|s| !s.is_empty()).unwrap_or("Traveler")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time(&(now - Duration::seconds(20)), &now), "Just now");
        assert_eq!(format_relative_time(&(now - Duration::minutes(5)), &now), "5m ago");
        assert_eq!(format_relative_time(&(now - Duration::minutes(59)), &now), "59m ago");
        assert_eq!(format_relative_time(&(now - Duration::hours(3)), &now), "3h ago");
        assert_eq!(format_relative_time(&(now - Duration::days(2)), &now), "2025-03-08");
    }

    #[test]
    fn greeting_changes_at_noon_and_six() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
    }

    #[test]
    fn phone_sanitizing_keeps_plus_and_digits() {
        assert_eq!(sanitize_phone("+1 (234) 567-8900"), "+12345678900");
        assert_eq!(sanitize_phone("call me"), "");
    }

    #[test]
    fn coordinates_and_confidence() {
        assert_eq!(format_coordinates(40.7128, -74.006), "40.712800, -74.006000");
        assert_eq!(format_confidence(0.873), "87%");
        assert_eq!(format_confidence(1.4), "100%");
        assert_eq!(display_name("ana@example.com"), "ana");
        assert_eq!(display_name("@nobody"), "Traveler");
    }
}
