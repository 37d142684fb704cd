//! Condition and icon-code mapping to display variants
//!
//! The provider describes weather two ways: a coarse free-text `conditions`
//! string that says nothing about day or night, and a fine-grained icon code
//! that already does. Both reduce to the same [`IconVariant`] set.

use std::fmt;

/// Display variants the dashboard can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    ClearDay,
    ClearNight,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Rain,
    Snow,
    Thunder,
}

impl IconVariant {
    /// All variants in display order
    pub const ALL: [IconVariant; 8] = [
        IconVariant::ClearDay,
        IconVariant::ClearNight,
        IconVariant::Cloudy,
        IconVariant::PartlyCloudyDay,
        IconVariant::PartlyCloudyNight,
        IconVariant::Rain,
        IconVariant::Snow,
        IconVariant::Thunder,
    ];

    /// Stable kebab-case name
    pub fn name(&self) -> &'static str {
        match self {
            IconVariant::ClearDay => "clear-day",
            IconVariant::ClearNight => "clear-night",
            IconVariant::Cloudy => "cloudy",
            IconVariant::PartlyCloudyDay => "partly-cloudy-day",
            IconVariant::PartlyCloudyNight => "partly-cloudy-night",
            IconVariant::Rain => "rain",
            IconVariant::Snow => "snow",
            IconVariant::Thunder => "thunder",
        }
    }

    /// Terminal glyph for the variant
    pub fn glyph(&self) -> &'static str {
        match self {
            IconVariant::ClearDay => "\u{2600}",           // ☀
            IconVariant::ClearNight => "\u{263E}",         // ☾
            IconVariant::Cloudy => "\u{2601}",             // ☁
            IconVariant::PartlyCloudyDay => "\u{26C5}",    // ⛅
            IconVariant::PartlyCloudyNight => "\u{2601}\u{263E}",
            IconVariant::Rain => "\u{1F327}",              // 🌧
            IconVariant::Snow => "\u{2744}",               // ❄
            IconVariant::Thunder => "\u{26C8}",            // ⛈
        }
    }

    /// Whether the variant is one of the night forms
    pub fn is_night(&self) -> bool {
        matches!(self, IconVariant::ClearNight | IconVariant::PartlyCloudyNight)
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to resolve an icon from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconQuery<'a> {
    /// Coarse conditions text plus a separately computed day flag
    ByCondition(&'a str, bool),
    /// Provider icon code, which already encodes day or night
    ByIconCode(&'a str),
}

impl<'a> IconQuery<'a> {
    /// Resolves the query, returning `None` for inputs with no icon
    pub fn resolve(&self) -> Option<IconVariant> {
        match *self {
            IconQuery::ByCondition(text, is_day) => from_condition(text, is_day),
            IconQuery::ByIconCode(code) => from_icon_code(code),
        }
    }
}

/// Shorthand for `query.resolve()`
pub fn resolve_icon(query: IconQuery<'_>) -> Option<IconVariant> {
    query.resolve()
}

/// Maps the leading phrase of a conditions string.
///
/// The provider lists the most significant phrase first, e.g.
/// "Rain, Partially cloudy", so only that phrase decides the icon.
fn from_condition(text: &str, is_day: bool) -> Option<IconVariant> {
    let lead = text.split(',').next()?.trim().to_ascii_lowercase();
    let variant = match lead.as_str() {
        "clear" => {
            if is_day {
                IconVariant::ClearDay
            } else {
                IconVariant::ClearNight
            }
        }
        "partially cloudy" | "partly cloudy" => {
            if is_day {
                IconVariant::PartlyCloudyDay
            } else {
                IconVariant::PartlyCloudyNight
            }
        }
        "overcast" | "cloudy" => IconVariant::Cloudy,
        "rain" | "drizzle" | "showers" | "freezing rain" | "freezing drizzle" => IconVariant::Rain,
        "snow" | "snow and rain showers" | "snow showers" | "ice" => IconVariant::Snow,
        "thunderstorm" | "thunder" => IconVariant::Thunder,
        _ => return None,
    };
    Some(variant)
}

fn from_icon_code(code: &str) -> Option<IconVariant> {
    let variant = match code.trim() {
        "clear-day" => IconVariant::ClearDay,
        "clear-night" => IconVariant::ClearNight,
        "partly-cloudy-day" => IconVariant::PartlyCloudyDay,
        "partly-cloudy-night" => IconVariant::PartlyCloudyNight,
        "cloudy" => IconVariant::Cloudy,
        "rain" | "showers-day" | "showers-night" => IconVariant::Rain,
        "snow" | "snow-showers-day" | "snow-showers-night" => IconVariant::Snow,
        "thunder-rain" | "thunder-showers-day" | "thunder-showers-night" => IconVariant::Thunder,
        _ => return None,
    };
    Some(variant)
}
