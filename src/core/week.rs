use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// First day of the display week. The host's locales only ever resolve to
/// these two; CLDR Saturday-first territories collapse to Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStart {
    Monday,
    Sunday,
}

static REGION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // language[-script]-REGION, with either - or _ separators
    Regex::new(r"(?i)^[a-z]{2,3}(?:[-_][a-z]{4})?[-_]([a-z]{2})(?:[-_]|$)").unwrap()
});

/// CLDR territories whose week starts on Sunday. Sorted for binary search.
const SUNDAY_FIRST_REGIONS: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT",
    "GU", "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO",
    "MT", "MX", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PY", "SA", "SG", "SV", "TH", "TT",
    "TW", "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

/// Language tags treated as Sunday-first when no region subtag is available.
const SUNDAY_FIRST_TAGS: &[&str] = &["en-US", "en_US"];

/// Resolve the first day of the week for a host language tag.
///
/// The CLDR territory table is consulted first, keyed by the region subtag;
/// tags without a region subtag fall back to the static exception list.
/// Total: unknown or malformed tags resolve to Monday.
pub fn week_start_for(language: &str) -> WeekStart {
    let region = REGION_RE
        .captures(language.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_ascii_uppercase());

    match region {
        Some(ref r) if SUNDAY_FIRST_REGIONS.binary_search(&r.as_str()).is_ok() => {
            WeekStart::Sunday
        }
        Some(_) => WeekStart::Monday,
        None if SUNDAY_FIRST_TAGS.contains(&language) => WeekStart::Sunday,
        None => WeekStart::Monday,
    }
}

/// A 7-day inclusive date interval containing "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The calendar week containing `today`, anchored to `week_start`.
    pub fn containing(today: NaiveDate, week_start: WeekStart) -> Self {
        let days_to_start = match week_start {
            WeekStart::Monday => today.weekday().num_days_from_monday(),
            WeekStart::Sunday => today.weekday().num_days_from_sunday(),
        } as i64;

        Self {
            start: today - Duration::days(days_to_start),
            end: today + Duration::days(6 - days_to_start),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn region_table_is_sorted() {
        let mut sorted = SUNDAY_FIRST_REGIONS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, SUNDAY_FIRST_REGIONS);
    }

    #[test]
    fn week_start_resolution() {
        assert_eq!(week_start_for("en"), WeekStart::Monday);
        assert_eq!(week_start_for("en-US"), WeekStart::Sunday);
        assert_eq!(week_start_for("en_US"), WeekStart::Sunday);
        assert_eq!(week_start_for("en-GB"), WeekStart::Monday);
        assert_eq!(week_start_for("es"), WeekStart::Monday);
        assert_eq!(week_start_for("es-MX"), WeekStart::Sunday);
        assert_eq!(week_start_for("pt-BR"), WeekStart::Sunday);
        // Saturday-first in CLDR, collapses to Monday
        assert_eq!(week_start_for("ar-EG"), WeekStart::Monday);
        assert_eq!(week_start_for("zh-Hant-TW"), WeekStart::Sunday);
        assert_eq!(week_start_for(""), WeekStart::Monday);
        assert_eq!(week_start_for("not a tag"), WeekStart::Monday);
    }

    #[test]
    fn monday_window_mid_week() {
        // Thursday 2024-06-13
        let window = WeekWindow::containing(date(2024, 6, 13), WeekStart::Monday);
        assert_eq!(window.start, date(2024, 6, 10));
        assert_eq!(window.end, date(2024, 6, 16));
    }

    #[test]
    fn sunday_window_mid_week() {
        let window = WeekWindow::containing(date(2024, 6, 13), WeekStart::Sunday);
        assert_eq!(window.start, date(2024, 6, 9));
        assert_eq!(window.end, date(2024, 6, 15));
    }

    #[test]
    fn monday_window_on_sunday() {
        // Sunday is the last day of a Monday-start week
        let window = WeekWindow::containing(date(2024, 6, 16), WeekStart::Monday);
        assert_eq!(window.start, date(2024, 6, 10));
        assert_eq!(window.end, date(2024, 6, 16));
    }

    #[test]
    fn window_spans_seven_days_and_contains_today() {
        let anchor = date(2024, 6, 9);
        for offset in 0..7 {
            let today = anchor + Duration::days(offset);
            for week_start in [WeekStart::Monday, WeekStart::Sunday] {
                let window = WeekWindow::containing(today, week_start);
                assert_eq!((window.end - window.start).num_days(), 6);
                assert!(window.contains(today));
                assert!(!window.contains(window.start - Duration::days(1)));
                assert!(!window.contains(window.end + Duration::days(1)));
            }
        }
    }
}
