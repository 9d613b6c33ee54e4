//! Contribution heatmap construction.
//!
//! The primary source is the raw public-event feed, aggregated locally over a
//! trailing 364-day window (52 whole weeks ending today). The alternate
//! source is a mirror serving the provider's own per-day counts and levels
//! for the last year. The two assign intensity differently and are never
//! mixed: local aggregation quantizes against the window maximum, the mirror
//! ships levels verbatim.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::models::{ContributionDay, PublicEvent};

/// Days covered by the trailing window.
pub const WINDOW_DAYS: i64 = 364;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One calendar day of activity with its intensity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub count: u32,
    /// Intensity level 0-4.
    pub level: u8,
}

impl DayActivity {
    /// Hover text for the day's cell.
    pub fn tooltip(&self) -> String {
        match self.count {
            0 => format!("No contributions on {}", self.date),
            1 => format!("1 contribution on {}", self.date),
            n => format!("{n} contributions on {}", self.date),
        }
    }
}

/// Month label anchored to a week column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel {
    pub column: usize,
    pub label: &'static str,
}

/// Week-aligned calendar grid handed to the renderer.
///
/// Cells run oldest to newest; the renderer fills columns top to bottom,
/// seven rows per column, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapGrid {
    /// Invisible cells emitted before the first day so its weekday lands on
    /// the right row.
    pub leading_blanks: usize,
    pub days: Vec<DayActivity>,
    /// Total week columns including the padded first one.
    pub columns: usize,
    /// One label per month transition, at most one per column.
    pub month_labels: Vec<MonthLabel>,
}

/// Buckets events into per-day counts over the trailing window ending at
/// `today`, zero-filled and oldest first.
///
/// Event timestamps are truncated to UTC calendar days. Events outside the
/// window, and events whose timestamp does not parse, are skipped.
pub fn daily_counts(events: &[PublicEvent], today: NaiveDate) -> BTreeMap<NaiveDate, u32> {
    let start = today - Duration::days(WINDOW_DAYS - 1);
    let mut counts: BTreeMap<NaiveDate, u32> = (0..WINDOW_DAYS)
        .map(|offset| (start + Duration::days(offset), 0))
        .collect();

    for event in events {
        let Ok(instant) = DateTime::parse_from_rfc3339(&event.created_at) else {
            continue;
        };
        let day = instant.with_timezone(&Utc).date_naive();
        if let Some(count) = counts.get_mut(&day) {
            *count += 1;
        }
    }

    counts
}

/// Quantizes a day's count against the window maximum into levels 0-4.
///
/// Zero is always level 0; positive counts bucket by their ratio of the
/// maximum in 25% steps, the top level reserved for ratios above 75%.
pub fn quantize(count: u32, max: u32) -> u8 {
    if count == 0 {
        return 0;
    }
    // Integer form of count/max <= 0.25 etc., exact at the boundaries.
    let (count, max) = (u64::from(count), u64::from(max));
    if 4 * count <= max {
        1
    } else if 2 * count <= max {
        2
    } else if 4 * count <= 3 * max {
        3
    } else {
        4
    }
}

/// Builds the grid from raw public events, the primary source.
pub fn from_events(events: &[PublicEvent], today: NaiveDate) -> Option<HeatmapGrid> {
    let counts = daily_counts(events, today);
    // Floor of 1 so an entirely quiet window quantizes without dividing by zero.
    let max = counts.values().copied().max().unwrap_or(0).max(1);
    let days = counts
        .into_iter()
        .map(|(date, count)| DayActivity {
            date,
            count,
            level: quantize(count, max),
        })
        .collect();
    layout(days)
}

/// Builds the grid from the alternate provider's pre-aggregated days.
///
/// Levels are used as supplied (clamped to the 0-4 range). An empty list
/// yields `None` and the widget stays absent.
pub fn from_provider_days(mut provider_days: Vec<ContributionDay>) -> Option<HeatmapGrid> {
    provider_days.sort_by_key(|day| day.date);
    let days = provider_days
        .into_iter()
        .map(|day| DayActivity {
            date: day.date,
            count: day.count,
            level: day.level.min(4),
        })
        .collect();
    layout(days)
}

/// Aligns cells to calendar weeks and derives the month label row.
fn layout(days: Vec<DayActivity>) -> Option<HeatmapGrid> {
    let first = days.first()?;
    let leading_blanks = first.date.weekday().num_days_from_sunday() as usize;
    let columns = (leading_blanks + days.len()).div_ceil(7);

    let mut month_labels: Vec<MonthLabel> = Vec::new();
    let mut last_month = None;
    for (index, day) in days.iter().enumerate() {
        let month = day.date.month();
        if last_month == Some(month) {
            continue;
        }
        last_month = Some(month);
        let column = (leading_blanks + index) / 7;
        // A short tail of the previous month can share the transition's
        // column; the earlier label keeps the slot.
        if month_labels.last().map(|label| label.column) == Some(column) {
            continue;
        }
        month_labels.push(MonthLabel {
            column,
            label: MONTHS[(month - 1) as usize],
        });
    }

    Some(HeatmapGrid {
        leading_blanks,
        days,
        columns,
        month_labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(created_at: &str) -> PublicEvent {
        PublicEvent {
            created_at: created_at.to_string(),
        }
    }

    // 2025-01-01 was a Wednesday; a window ending 2025-12-30 starts there.
    fn wednesday_window_end() -> NaiveDate {
        date(2025, 12, 30)
    }

    #[test]
    fn window_has_one_entry_per_day_with_no_gaps() {
        let counts = daily_counts(&[], wednesday_window_end());
        assert_eq!(counts.len(), WINDOW_DAYS as usize);

        let days: Vec<NaiveDate> = counts.keys().copied().collect();
        assert_eq!(days[0], date(2025, 1, 1));
        assert_eq!(*days.last().unwrap(), wednesday_window_end());
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn events_accumulate_on_their_utc_day() {
        let today = wednesday_window_end();
        let events = vec![
            event("2025-12-28T09:00:00Z"),
            event("2025-12-28T17:30:00Z"),
            // 05:00+09:00 is 20:00 UTC the previous day.
            event("2025-12-29T05:00:00+09:00"),
        ];
        let counts = daily_counts(&events, today);
        assert_eq!(counts[&date(2025, 12, 28)], 3);
        assert_eq!(counts[&date(2025, 12, 29)], 0);
    }

    #[test]
    fn out_of_window_and_unparsable_events_are_skipped() {
        let today = wednesday_window_end();
        let events = vec![
            event("2024-12-31T12:00:00Z"),
            event("2026-01-01T00:00:00Z"),
            event("not a timestamp"),
            event(""),
        ];
        let counts = daily_counts(&events, today);
        assert!(counts.values().all(|&count| count == 0));
    }

    #[test]
    fn quantization_follows_quarter_ratios() {
        // counts [0,0,5,0,10] with max 10 -> levels [0,0,2,0,4]
        let max = 10;
        let levels: Vec<u8> = [0, 0, 5, 0, 10]
            .iter()
            .map(|&count| quantize(count, max))
            .collect();
        assert_eq!(levels, vec![0, 0, 2, 0, 4]);

        assert_eq!(quantize(1, 4), 1);
        assert_eq!(quantize(2, 4), 2);
        assert_eq!(quantize(3, 4), 3);
        assert_eq!(quantize(4, 4), 4);
        assert_eq!(quantize(1, 3), 2);
    }

    #[test]
    fn quantization_is_monotonic_and_zero_maps_to_zero() {
        let max = 20;
        let mut previous = 0;
        for count in 0..=max {
            let level = quantize(count, max);
            assert!(level >= previous, "level dropped at count {count}");
            previous = level;
        }
        assert_eq!(quantize(0, max), 0);
    }

    #[test]
    fn quiet_window_stays_at_level_zero() {
        let grid = from_events(&[], wednesday_window_end()).unwrap();
        assert!(grid.days.iter().all(|day| day.count == 0 && day.level == 0));
    }

    #[test]
    fn grid_pads_to_the_first_weekday() {
        // Window starts on a Wednesday: three placeholder cells, Sun-Tue.
        let grid = from_events(&[], wednesday_window_end()).unwrap();
        assert_eq!(grid.leading_blanks, 3);
        assert_eq!(grid.days.len(), WINDOW_DAYS as usize);
        assert_eq!(grid.columns, 53);
    }

    #[test]
    fn event_counts_flow_through_to_levels() {
        let today = wednesday_window_end();
        let mut events = Vec::new();
        for _ in 0..5 {
            events.push(event("2025-12-28T10:00:00Z"));
        }
        for _ in 0..10 {
            events.push(event("2025-12-30T10:00:00Z"));
        }

        let grid = from_events(&events, today).unwrap();
        let tail: Vec<(u32, u8)> = grid.days[grid.days.len() - 5..]
            .iter()
            .map(|day| (day.count, day.level))
            .collect();
        assert_eq!(tail, vec![(0, 0), (0, 0), (5, 2), (0, 0), (10, 4)]);
    }

    #[test]
    fn month_labels_mark_each_transition_once() {
        let grid = from_events(&[], wednesday_window_end()).unwrap();
        assert_eq!(grid.month_labels.len(), 12);
        assert_eq!(
            grid.month_labels[0],
            MonthLabel {
                column: 0,
                label: "Jan"
            }
        );
        for pair in grid.month_labels.windows(2) {
            assert!(pair[0].column < pair[1].column);
        }
    }

    #[test]
    fn a_transition_sharing_a_column_keeps_the_earlier_label() {
        // 2025-01-30 is a Thursday, so Feb 1 lands in the same first column.
        let days: Vec<ContributionDay> = (0..35)
            .map(|offset| ContributionDay {
                date: date(2025, 1, 30) + Duration::days(offset),
                count: 0,
                level: 0,
            })
            .collect();

        let grid = from_provider_days(days).unwrap();
        assert_eq!(grid.leading_blanks, 4);
        let labels: Vec<&str> = grid.month_labels.iter().map(|label| label.label).collect();
        assert_eq!(labels, vec!["Jan", "Mar"]);
    }

    #[test]
    fn provider_days_are_sorted_and_levels_kept_verbatim() {
        let days = vec![
            ContributionDay {
                date: date(2025, 6, 2),
                count: 1,
                level: 3,
            },
            ContributionDay {
                date: date(2025, 6, 1),
                count: 9,
                level: 7,
            },
        ];

        let grid = from_provider_days(days).unwrap();
        assert_eq!(grid.days[0].date, date(2025, 6, 1));
        // Out-of-range provider level clamps to the top bucket.
        assert_eq!(grid.days[0].level, 4);
        // A low count keeps whatever level the provider assigned.
        assert_eq!(grid.days[1].level, 3);
    }

    #[test]
    fn empty_provider_list_renders_nothing() {
        assert_eq!(from_provider_days(Vec::new()), None);
    }

    #[test]
    fn tooltips_pluralize() {
        let day = |count| DayActivity {
            date: date(2025, 6, 1),
            count,
            level: 0,
        };
        assert_eq!(day(0).tooltip(), "No contributions on 2025-06-01");
        assert_eq!(day(1).tooltip(), "1 contribution on 2025-06-01");
        assert_eq!(day(4).tooltip(), "4 contributions on 2025-06-01");
    }
}
