//! User-facing response lines.

use std::time::Duration;

/// Human-readable duration, rounded down to whole minutes
///
/// ```
/// use std::time::Duration;
/// use warden_interpreter::responses::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(30)), "less than a minute");
/// assert_eq!(format_duration(Duration::from_secs(60)), "1 minute");
/// assert_eq!(format_duration(Duration::from_secs(3 * 3600 + 120)), "3 hours 2 minutes");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.as_secs() / 60;
    if minutes == 0 {
        return "less than a minute".to_string();
    }

    let (hours, minutes) = (minutes / 60, minutes % 60);
    match (hours, minutes) {
        (0, m) => plural(m, "minute"),
        (h, 0) => plural(h, "hour"),
        (h, m) => format!("{} {}", plural(h, "hour"), plural(m, "minute")),
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// "just now" under a minute, otherwise "N minutes ago"
pub fn format_ago(age: Duration) -> String {
    if age < Duration::from_secs(60) {
        "just now".to_string()
    } else {
        format!("{} ago", format_duration(age))
    }
}

/// Successful claim
pub fn claimed(player: &str, poi: &str) -> String {
    format!("{} claimed {}.", player, poi)
}

/// Claim rejected because someone holds the POI
pub fn already_claimed(poi: &str, owner: &str, age: Duration) -> String {
    format!(
        "{} is already claimed by {} (claimed {}).",
        poi,
        owner,
        format_ago(age)
    )
}

/// Successful release
pub fn unclaimed(player: &str, poi: &str) -> String {
    format!("{} unclaimed {}.", player, poi)
}

/// Release of a POI nobody holds
pub fn not_claimed(poi: &str) -> String {
    format!("{} is not claimed.", poi)
}

/// Release attempted by someone other than the owner
pub fn not_owner(poi: &str, owner: &str) -> String {
    format!("{} is claimed by {}. Only {} can unclaim it.", poi, owner, owner)
}

/// Status of a claimed POI
pub fn status_claimed(poi: &str, owner: &str, age: Duration, remaining: Duration) -> String {
    let expiry = if remaining.is_zero() {
        "expiry pending".to_string()
    } else {
        format!("expires in {}", format_duration(remaining))
    };
    format!(
        "{} is claimed by {} (claimed {}, {}).",
        poi,
        owner,
        format_ago(age),
        expiry
    )
}

/// Status of an unclaimed POI
pub fn status_available(poi: &str) -> String {
    format!("{} is available.", poi)
}

/// Phrase that did not resolve to any POI
pub fn unknown_poi(phrase: &str) -> String {
    format!(
        "Unknown POI \"{}\". Type \"check claims\" to see available POIs.",
        phrase
    )
}

/// Availability list; `names` are primary display aliases in catalog order
pub fn available(names: &[&str]) -> String {
    if names.is_empty() {
        "All POIs are currently claimed.".to_string()
    } else {
        format!("Available POIs: {}", names.join(", "))
    }
}

/// Claim refused by the proximity check
pub fn too_far(player: &str, poi: &str) -> String {
    format!("{} is not near {}. Move closer to claim it.", player, poi)
}

/// Proximity oracle could not answer
pub fn position_unknown(player: &str) -> String {
    format!("Could not verify {}'s position. Try again shortly.", player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "less than a minute");
        assert_eq!(format_duration(Duration::from_secs(119)), "1 minute");
        assert_eq!(format_duration(Duration::from_secs(45 * 60)), "45 minutes");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1 hour");
        assert_eq!(format_duration(Duration::from_secs(7200 + 60)), "2 hours 1 minute");
    }

    #[test]
    fn test_format_ago() {
        assert_eq!(format_ago(Duration::from_secs(59)), "just now");
        assert_eq!(format_ago(Duration::from_secs(600)), "10 minutes ago");
    }

    #[test]
    fn test_available() {
        assert_eq!(available(&[]), "All POIs are currently claimed.");
        assert_eq!(
            available(&["Tisy Power Plant T4", "Northwest Airfield"]),
            "Available POIs: Tisy Power Plant T4, Northwest Airfield"
        );
    }

    #[test]
    fn test_status_claimed() {
        assert_eq!(
            status_claimed("Tisy", "Alice", Duration::from_secs(600), Duration::from_secs(3000)),
            "Tisy is claimed by Alice (claimed 10 minutes ago, expires in 50 minutes)."
        );
        assert_eq!(
            status_claimed("Tisy", "Alice", Duration::from_secs(4000), Duration::ZERO),
            "Tisy is claimed by Alice (claimed 1 hour 6 minutes ago, expiry pending)."
        );
    }
}
