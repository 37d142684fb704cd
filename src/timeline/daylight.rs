//! Day/night classification from the provider's sunrise and sunset strings

use super::LocalTime;

/// Parses an `HH:MM:SS` clock string into seconds since midnight.
///
/// Returns `None` for anything that is not three colon-separated numbers
/// within clock range.
pub fn parse_clock_seconds(clock: &str) -> Option<u32> {
    let mut parts = clock.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Returns true when `local` falls strictly between sunrise and sunset.
///
/// Both bounds are exclusive. A sunset earlier than sunrise is not treated
/// specially, so such a day is always night. Unparseable strings also
/// classify as night.
pub fn is_daytime(local: &LocalTime, sunrise: &str, sunset: &str) -> bool {
    let (Some(rise), Some(set)) = (parse_clock_seconds(sunrise), parse_clock_seconds(sunset))
    else {
        return false;
    };
    let now = local.seconds_from_midnight();
    now > rise && now < set
}
