//! Rolling 24-hour forecast window
//!
//! The provider groups hourly records by calendar day, so a window that starts
//! at the current local hour has to splice the tail of today's records onto
//! the head of tomorrow's.

use crate::data::HourRecord;

/// Number of slots in a full window
pub const WINDOW_HOURS: usize = 24;

/// One hour of the rolling window
#[derive(Debug, Clone, PartialEq)]
pub struct HourSlot<'a, T = HourRecord> {
    /// Bare 24-hour label such as `"0:00"` or `"22:00"`
    pub label: String,
    /// Hour of day the label stands for (0-23)
    pub hour: u32,
    /// Whether the record was taken from tomorrow's hours
    pub is_tomorrow: bool,
    /// The forecast record for this hour
    pub record: &'a T,
}

/// Builds the rolling window starting at `start_hour`.
///
/// Takes `today[start_hour..]` followed by `tomorrow[..start_hour]`. Labels are
/// derived from the slot position, `(start_hour + index) % 24`. With 24
/// records on both days the window always has 24 slots; shorter inputs give a
/// shorter window rather than an error. Values of `start_hour` above 23 are
/// reduced modulo 24.
///
/// # Arguments
/// * `today` - Today's hourly records, index = hour of day
/// * `tomorrow` - Tomorrow's hourly records, index = hour of day
/// * `start_hour` - Current local hour at the forecast location
pub fn build_hourly_window<'a, T>(
    today: &'a [T],
    tomorrow: &'a [T],
    start_hour: u32,
) -> Vec<HourSlot<'a, T>> {
    let start = (start_hour % WINDOW_HOURS as u32) as usize;

    let today_tail = today.get(start..).unwrap_or(&[]);
    let tomorrow_head = &tomorrow[..start.min(tomorrow.len())];

    let from_today = today_tail.iter().map(|record| (false, record));
    let from_tomorrow = tomorrow_head.iter().map(|record| (true, record));

    from_today
        .chain(from_tomorrow)
        .enumerate()
        .map(|(index, (is_tomorrow, record))| {
            let hour = ((start + index) % WINDOW_HOURS) as u32;
            HourSlot {
                label: format!("{}:00", hour),
                hour,
                is_tomorrow,
                record,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records tagged by day (0 = today, 1 = tomorrow) and hour
    fn day(tag: u32, len: u32) -> Vec<(u32, u32)> {
        (0..len).map(|h| (tag, h)).collect()
    }

    #[test]
    fn test_window_from_midnight_is_today() {
        let today = day(0, 24);
        let tomorrow = day(1, 24);
        let window = build_hourly_window(&today, &tomorrow, 0);

        assert_eq!(window.len(), 24);
        for (i, slot) in window.iter().enumerate() {
            assert_eq!(*slot.record, today[i]);
            assert_eq!(slot.label, format!("{}:00", i));
            assert!(!slot.is_tomorrow);
        }
        assert_eq!(window[0].label, "0:00");
        assert_eq!(window[23].label, "23:00");
    }

    #[test]
    fn test_window_wraps_through_midnight() {
        let today = day(0, 24);
        let tomorrow = day(1, 24);
        let window = build_hourly_window(&today, &tomorrow, 22);

        assert_eq!(window.len(), 24);
        assert_eq!(window[0].label, "22:00");
        assert_eq!(window[1].label, "23:00");
        assert_eq!(window[2].label, "0:00");
        assert_eq!(window[23].label, "21:00");

        assert_eq!(*window[0].record, (0, 22));
        assert_eq!(*window[1].record, (0, 23));
        assert_eq!(*window[2].record, tomorrow[0]);
        assert!(window[2].is_tomorrow);
        assert_eq!(*window[23].record, (1, 21));
    }

    #[test]
    fn test_labels_match_record_hours_for_full_days() {
        let today = day(0, 24);
        let tomorrow = day(1, 24);

        for start in 0..24 {
            let window = build_hourly_window(&today, &tomorrow, start);
            assert_eq!(window.len(), 24, "start hour {}", start);
            for slot in &window {
                assert_eq!(slot.record.1, slot.hour);
                assert_eq!(slot.is_tomorrow, slot.record.0 == 1);
            }
        }
    }

    #[test]
    fn test_missing_tomorrow_gives_short_window() {
        let today = day(0, 24);
        let window = build_hourly_window(&today, &[], 20);

        assert_eq!(window.len(), 4);
        assert_eq!(window[3].label, "23:00");
    }

    #[test]
    fn test_short_tomorrow_is_used_as_far_as_it_goes() {
        let today = day(0, 24);
        let tomorrow = day(1, 5);
        let window = build_hourly_window(&today, &tomorrow, 10);

        // 14 from today, then all 5 of tomorrow
        assert_eq!(window.len(), 19);
        assert_eq!(*window[14].record, (1, 0));
        assert_eq!(*window[18].record, (1, 4));
    }

    #[test]
    fn test_short_today_past_start_contributes_nothing() {
        let today = day(0, 6);
        let tomorrow = day(1, 24);
        let window = build_hourly_window(&today, &tomorrow, 10);

        assert_eq!(window.len(), 10);
        assert!(window.iter().all(|slot| slot.is_tomorrow));
        // Labels follow position, not the record
        assert_eq!(window[0].label, "10:00");
    }

    #[test]
    fn test_start_hour_is_reduced_modulo_day() {
        let today = day(0, 24);
        let tomorrow = day(1, 24);
        let window = build_hourly_window(&today, &tomorrow, 26);

        assert_eq!(window.len(), 24);
        assert_eq!(window[0].label, "2:00");
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<(u32, u32)> = Vec::new();
        assert!(build_hourly_window(&empty, &empty, 5).is_empty());
    }
}
