//! Forecast document model for wxdash
//!
//! Mirrors the subset of the Visual Crossing timeline response that the
//! dashboard reads. Field names follow the provider's JSON keys.

pub mod forecast;

pub use forecast::{ForecastClient, ForecastError, DEFAULT_BASE_URL};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The provider's response for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDocument {
    /// Full resolved address, e.g. "Minsk, Belarus"
    pub resolved_address: String,
    /// The location query as echoed back by the provider
    #[serde(default)]
    pub address: Option<String>,
    /// IANA time zone name, informational only
    #[serde(default)]
    pub timezone: Option<String>,
    /// Signed offset from UTC in hours, possibly fractional
    #[serde(rename = "tzoffset")]
    pub tz_offset: f64,
    /// Conditions at request time
    pub current_conditions: CurrentConditions,
    /// Daily records, index 0 is today
    #[serde(default)]
    pub days: Vec<DayRecord>,
}

impl ForecastDocument {
    /// City part of the resolved address (text before the first comma)
    pub fn city(&self) -> &str {
        self.resolved_address
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// Today's record, if the provider returned any days
    pub fn today(&self) -> Option<&DayRecord> {
        self.days.first()
    }

    /// Tomorrow's record, if present
    pub fn tomorrow(&self) -> Option<&DayRecord> {
        self.days.get(1)
    }
}

/// Current conditions block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Coarse free-text conditions, e.g. "Rain, Partially cloudy"
    #[serde(default)]
    pub conditions: String,
    /// Fine-grained icon code, e.g. "partly-cloudy-night"
    #[serde(default)]
    pub icon: String,
    /// Temperature in Celsius
    pub temp: f64,
    /// Feels-like temperature in Celsius
    #[serde(default)]
    pub feelslike: Option<f64>,
    /// Relative humidity percentage
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Chance of precipitation percentage
    #[serde(default)]
    pub precipprob: Option<f64>,
    /// Wind speed in km/h
    #[serde(default)]
    pub windspeed: Option<f64>,
    /// Sunrise as `HH:MM:SS` local time
    #[serde(default)]
    pub sunrise: String,
    /// Sunset as `HH:MM:SS` local time
    #[serde(default)]
    pub sunset: String,
}

/// Forecast for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar date at the location
    pub datetime: NaiveDate,
    /// Maximum temperature in Celsius
    pub tempmax: f64,
    /// Minimum temperature in Celsius
    pub tempmin: f64,
    /// Coarse free-text conditions
    #[serde(default)]
    pub conditions: String,
    /// Fine-grained icon code
    #[serde(default)]
    pub icon: String,
    /// Hourly records, index = hour of day
    #[serde(default)]
    pub hours: Vec<HourRecord>,
}

/// Forecast for one hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    /// Hour as `HH:MM:SS`
    #[serde(default)]
    pub datetime: Option<String>,
    /// Temperature in Celsius
    pub temp: f64,
    /// Fine-grained icon code
    #[serde(default)]
    pub icon: String,
    /// Coarse free-text conditions
    #[serde(default)]
    pub conditions: Option<String>,
}
