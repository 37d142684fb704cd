//! Local-time and forecast-windowing engine
//!
//! Pure functions that turn a host clock reading plus the provider's numeric
//! UTC offset into the location's wall-clock time, classify day and night,
//! format dates and clock strings, and build the rolling 24-hour window.

pub mod convert;
pub mod daylight;
pub mod format;
pub mod hourly;

pub use convert::{to_local_time, LocalTime, TimeError};
pub use daylight::{is_daytime, parse_clock_seconds};
pub use format::{format_date, format_time, ordinal_suffix};
pub use hourly::{build_hourly_window, HourSlot};
