//! Display-ready projection of a forecast document
//!
//! [`DashboardView::build`] combines the time engine and the icon resolver for
//! one render: every string the UI draws is computed here, from the document
//! and a single host clock reading, so the renderer stays free of logic.

use chrono::{DateTime, TimeZone};

use crate::data::{DayRecord, ForecastDocument};
use crate::icons::{IconQuery, IconVariant};
use crate::timeline::{
    build_hourly_window, format_date, format_time, is_daytime, to_local_time, LocalTime, TimeError,
};

/// Maximum number of daily cards shown
pub const MAX_DAILY_CARDS: usize = 10;

/// Placeholder for readings the provider left out
pub const MISSING: &str = "--";

/// Everything the dashboard draws for one forecast
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub city: String,
    pub conditions: String,
    /// Wall-clock time at the location
    pub local_time: LocalTime,
    pub date_text: String,
    pub time_text: String,
    pub is_day: bool,
    pub icon: Option<IconVariant>,
    pub temperature: String,
    /// Raw temperature, for coloring
    pub temp_value: f64,
    pub feels_like: String,
    pub humidity: String,
    pub rain_chance: String,
    pub wind_speed: String,
    pub daily: Vec<DailyCard>,
    pub hourly: Vec<HourlyCard>,
}

/// One day in the daily outlook
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCard {
    /// Short label such as "Fri 21"
    pub label: String,
    /// Day-form icon from the day's conditions
    pub icon: Option<IconVariant>,
    pub max: String,
    pub min: String,
}

/// One hour of the rolling window
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyCard {
    /// Bare 24-hour label such as "22:00"
    pub label: String,
    pub icon: Option<IconVariant>,
    pub temperature: String,
    /// Raw temperature for charting
    pub temp_value: f64,
    pub is_tomorrow: bool,
}

impl DashboardView {
    /// Builds the view from a document and a host clock reading
    ///
    /// # Arguments
    /// * `forecast` - The accepted forecast document
    /// * `now` - Host clock reading, in any time zone
    ///
    /// # Returns
    /// * `Ok(DashboardView)` - Display-ready values
    /// * `Err(TimeError)` - If the document's UTC offset is unusable
    pub fn build<Tz: TimeZone>(
        forecast: &ForecastDocument,
        now: &DateTime<Tz>,
    ) -> Result<Self, TimeError> {
        let local_time = to_local_time(now, forecast.tz_offset)?;
        let current = &forecast.current_conditions;
        let is_day = is_daytime(&local_time, &current.sunrise, &current.sunset);

        let daily = forecast
            .days
            .iter()
            .take(MAX_DAILY_CARDS)
            .map(daily_card)
            .collect();

        let empty = Vec::new();
        let today = forecast.today().map(|d| &d.hours).unwrap_or(&empty);
        let tomorrow = forecast.tomorrow().map(|d| &d.hours).unwrap_or(&empty);
        let hourly = build_hourly_window(today, tomorrow, local_time.hour())
            .into_iter()
            .map(|slot| HourlyCard {
                label: slot.label,
                icon: IconQuery::ByIconCode(&slot.record.icon).resolve(),
                temperature: format!("{}°", format_reading(slot.record.temp)),
                temp_value: slot.record.temp,
                is_tomorrow: slot.is_tomorrow,
            })
            .collect();

        Ok(Self {
            city: forecast.city().to_string(),
            conditions: current.conditions.clone(),
            local_time,
            date_text: format_date(&local_time),
            time_text: format_time(&local_time),
            is_day,
            icon: IconQuery::ByCondition(&current.conditions, is_day).resolve(),
            temperature: format!("{} °C", format_reading(current.temp)),
            temp_value: current.temp,
            feels_like: current
                .feelslike
                .map(|v| format!("{} °C", format_reading(v)))
                .unwrap_or_else(|| MISSING.to_string()),
            humidity: current
                .humidity
                .map(|v| format!("{} %", format_reading(v)))
                .unwrap_or_else(|| MISSING.to_string()),
            rain_chance: current
                .precipprob
                .map(|v| format!("{} %", v))
                .unwrap_or_else(|| MISSING.to_string()),
            wind_speed: current
                .windspeed
                .map(|v| format!("{} km/h", v))
                .unwrap_or_else(|| MISSING.to_string()),
            daily,
            hourly,
        })
    }
}

/// Forecast cards always use the day form of the icon
fn daily_card(day: &DayRecord) -> DailyCard {
    DailyCard {
        label: day.datetime.format("%a %-d").to_string(),
        icon: IconQuery::ByCondition(&day.conditions, true).resolve(),
        max: format!("{}°", format_reading(day.tempmax)),
        min: format!("{}°", format_reading(day.tempmin)),
    }
}

/// Rounds a reading to a whole number for display, without a "-0"
pub fn format_reading(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{:.0}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use chrono::Utc;

    fn build_at(doc: &ForecastDocument, h: u32, m: u32) -> DashboardView {
        let now = Utc.with_ymd_and_hms(2025, 3, 21, h, m, 0).unwrap();
        DashboardView::build(doc, &now).expect("Failed to build view")
    }

    #[test]
    fn test_current_panel_strings() {
        let doc = fixtures::document(3.0, 2);
        // 09:05 UTC is 12:05 in Minsk
        let view = build_at(&doc, 9, 5);

        assert_eq!(view.city, "Minsk");
        assert_eq!(view.conditions, "Clear");
        assert_eq!(view.date_text, "Friday, 21st Mar '25");
        assert_eq!(view.time_text, "12:05 pm");
        assert!(view.is_day);
        assert_eq!(view.icon, Some(IconVariant::ClearDay));
        assert_eq!(view.temperature, "7 °C");
        assert_eq!(view.feels_like, "5 °C");
        assert_eq!(view.humidity, "61 %");
        assert_eq!(view.rain_chance, "0 %");
        assert_eq!(view.wind_speed, "14.4 km/h");
    }

    #[test]
    fn test_night_icon_after_sunset() {
        let doc = fixtures::document(3.0, 2);
        // 17:30 UTC is 20:30 local, after the 18:00:00 sunset
        let view = build_at(&doc, 17, 30);

        assert!(!view.is_day);
        assert_eq!(view.icon, Some(IconVariant::ClearNight));
        assert_eq!(view.time_text, "8:30 pm");
    }

    #[test]
    fn test_missing_readings_render_placeholder() {
        let mut doc = fixtures::document(0.0, 1);
        doc.current_conditions.feelslike = None;
        doc.current_conditions.humidity = None;
        doc.current_conditions.precipprob = None;
        doc.current_conditions.windspeed = None;
        let view = build_at(&doc, 12, 0);

        assert_eq!(view.feels_like, MISSING);
        assert_eq!(view.humidity, MISSING);
        assert_eq!(view.rain_chance, MISSING);
        assert_eq!(view.wind_speed, MISSING);
    }

    #[test]
    fn test_daily_cards_capped_at_ten() {
        let doc = fixtures::document(0.0, 15);
        let view = build_at(&doc, 12, 0);

        assert_eq!(view.daily.len(), MAX_DAILY_CARDS);
        assert_eq!(view.daily[0].label, "Fri 21");
        assert_eq!(view.daily[0].max, "10°");
        assert_eq!(view.daily[0].min, "1°");
        assert_eq!(view.daily[9].label, "Sun 30");
    }

    #[test]
    fn test_daily_cards_force_day_icons() {
        let doc = fixtures::document(3.0, 3);
        // Night at the location, yet the cards keep the day form
        let view = build_at(&doc, 22, 0);

        assert!(!view.is_day);
        assert!(view
            .daily
            .iter()
            .all(|card| card.icon == Some(IconVariant::PartlyCloudyDay)));
    }

    #[test]
    fn test_hourly_window_starts_at_local_hour() {
        let doc = fixtures::document(3.0, 2);
        // 19:10 UTC is 22:10 local
        let view = build_at(&doc, 19, 10);

        assert_eq!(view.hourly.len(), 24);
        assert_eq!(view.hourly[0].label, "22:00");
        assert_eq!(view.hourly[0].temperature, "22°");
        assert_eq!(view.hourly[0].icon, Some(IconVariant::ClearDay));
        assert_eq!(view.hourly[2].label, "0:00");
        assert!(view.hourly[2].is_tomorrow);
        assert_eq!(view.hourly[2].temperature, "100°");
        assert_eq!(view.hourly[2].icon, Some(IconVariant::Rain));
        assert_eq!(view.hourly[23].label, "21:00");
    }

    #[test]
    fn test_hourly_window_without_tomorrow() {
        let doc = fixtures::document(0.0, 1);
        let view = build_at(&doc, 20, 0);
        assert_eq!(view.hourly.len(), 4);
    }

    #[test]
    fn test_no_days_still_builds() {
        let doc = fixtures::document(0.0, 0);
        let view = build_at(&doc, 12, 0);
        assert!(view.daily.is_empty());
        assert!(view.hourly.is_empty());
    }

    #[test]
    fn test_format_reading() {
        assert_eq!(format_reading(7.4), "7");
        assert_eq!(format_reading(7.5), "8");
        assert_eq!(format_reading(-0.3), "0");
        assert_eq!(format_reading(-2.6), "-3");
    }
}
