//! Date presentation and list truncation

use crate::labels::Labels;
use chrono::{Datelike, NaiveDate};

/// Separator between the two ends of a date range (en dash)
pub const RANGE_SEPARATOR: &str = " – ";

/// A JSON Resume date: `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
///
/// The day is dropped; presentation never shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartialDate {
    pub year: i32,
    pub month: Option<u32>,
}

/// Parse an ISO 8601 calendar date with optional month and day
///
/// A trailing time component (`2020-01-01T09:00:00Z`) is ignored.
pub fn parse_date(input: &str) -> Option<PartialDate> {
    let input = input.trim();
    let date_part = input.split('T').next().unwrap_or(input);

    match date_part.len() {
        10 => NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .ok()
            .map(|d| PartialDate {
                year: d.year(),
                month: Some(d.month()),
            }),
        7 => NaiveDate::parse_from_str(&format!("{date_part}-01"), "%Y-%m-%d")
            .ok()
            .map(|d| PartialDate {
                year: d.year(),
                month: Some(d.month()),
            }),
        4 if date_part.bytes().all(|b| b.is_ascii_digit()) => {
            date_part.parse().ok().map(|year| PartialDate { year, month: None })
        }
        _ => None,
    }
}

fn present_date(date: PartialDate, labels: &Labels) -> String {
    match date.month {
        Some(month) => format!("{} {}", labels.month(month), date.year),
        None => date.year.to_string(),
    }
}

/// Render a single date as "Mon YYYY" (or "YYYY" for year-only dates)
///
/// Returns an empty string when the date cannot be parsed.
pub fn format_date(input: Option<&str>, labels: &Labels) -> String {
    match input.and_then(parse_date) {
        Some(date) => present_date(date, labels),
        None => {
            if let Some(raw) = input.filter(|s| !s.trim().is_empty()) {
                log::warn!("unrecognised date '{}', omitting it", raw);
            }
            String::new()
        }
    }
}

/// Render "Mon YYYY – Mon YYYY", or "Mon YYYY – Present" when `end` is absent
///
/// Returns an empty string when `start` is absent or unparseable: a dateless
/// entry has no range. An unparseable `end` renders the start date alone.
pub fn format_date_range(start: Option<&str>, end: Option<&str>, labels: &Labels) -> String {
    let Some(start_date) = start.and_then(parse_date) else {
        if let Some(raw) = start.filter(|s| !s.trim().is_empty()) {
            log::warn!("unrecognised start date '{}', omitting the range", raw);
        }
        return String::new();
    };

    let start_text = present_date(start_date, labels);
    let end = end.map(str::trim).filter(|s| !s.is_empty());

    match end {
        None => format!("{start_text}{RANGE_SEPARATOR}{}", labels.present()),
        Some(raw) => match parse_date(raw) {
            Some(end_date) => {
                if end_date < start_date {
                    log::warn!(
                        "end date '{}' precedes start date '{}'",
                        raw,
                        start.unwrap_or_default()
                    );
                }
                format!(
                    "{start_text}{RANGE_SEPARATOR}{}",
                    present_date(end_date, labels)
                )
            }
            None => {
                log::warn!("unrecognised end date '{}', showing start date only", raw);
                start_text
            }
        },
    }
}

/// First `max` items, or all of them when `max` is 0
pub fn truncate_list<T>(items: &[T], max: usize) -> &[T] {
    if max == 0 {
        items
    } else {
        &items[..items.len().min(max)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::LabelTable;

    fn english() -> Labels {
        LabelTable::builtin().for_language("en").clone()
    }

    fn italian() -> Labels {
        LabelTable::builtin().for_language("it").clone()
    }

    #[test]
    fn test_parse_date_forms() {
        assert_eq!(
            parse_date("2020-03-15"),
            Some(PartialDate { year: 2020, month: Some(3) })
        );
        assert_eq!(
            parse_date("2020-03"),
            Some(PartialDate { year: 2020, month: Some(3) })
        );
        assert_eq!(parse_date("2020"), Some(PartialDate { year: 2020, month: None }));
        assert_eq!(
            parse_date("2020-03-15T10:00:00Z"),
            Some(PartialDate { year: 2020, month: Some(3) })
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2020-13"), None);
        assert_eq!(parse_date("2020-02-30"), None);
        assert_eq!(parse_date("20x0"), None);
    }

    #[test]
    fn test_range_open_end_renders_present() {
        let labels = english();
        assert_eq!(
            format_date_range(Some("2020-01-01"), None, &labels),
            "Jan 2020 – Present"
        );
        assert_eq!(
            format_date_range(Some("2020-01-01"), Some("  "), &labels),
            "Jan 2020 – Present"
        );
    }

    #[test]
    fn test_range_localised() {
        let labels = italian();
        assert_eq!(
            format_date_range(Some("2019-05"), None, &labels),
            "Mag 2019 – Presente"
        );
        assert_eq!(
            format_date_range(Some("2018-12-01"), Some("2019-06-30"), &labels),
            "Dic 2018 – Giu 2019"
        );
    }

    #[test]
    fn test_range_concrete_dates() {
        let labels = english();
        assert_eq!(
            format_date_range(Some("2015-09"), Some("2019-07"), &labels),
            "Sep 2015 – Jul 2019"
        );
        assert_eq!(
            format_date_range(Some("2015"), Some("2019"), &labels),
            "2015 – 2019"
        );
    }

    #[test]
    fn test_range_missing_start_is_empty() {
        let labels = english();
        assert_eq!(format_date_range(None, None, &labels), "");
        assert_eq!(format_date_range(None, Some("2020-01"), &labels), "");
        assert_eq!(format_date_range(Some("someday"), None, &labels), "");
    }

    #[test]
    fn test_range_unparseable_end_shows_start() {
        let labels = english();
        assert_eq!(
            format_date_range(Some("2020-02"), Some("whenever"), &labels),
            "Feb 2020"
        );
    }

    #[test]
    fn test_range_reversed_dates_still_render() {
        let labels = english();
        assert_eq!(
            format_date_range(Some("2021-01"), Some("2020-01"), &labels),
            "Jan 2021 – Jan 2020"
        );
    }

    #[test]
    fn test_format_single_date() {
        let labels = english();
        assert_eq!(format_date(Some("2021-11-02"), &labels), "Nov 2021");
        assert_eq!(format_date(Some("2021"), &labels), "2021");
        assert_eq!(format_date(Some("n/a"), &labels), "");
        assert_eq!(format_date(None, &labels), "");
    }

    #[test]
    fn test_truncate_zero_means_unlimited() {
        let items = vec!["a", "b", "c"];
        assert_eq!(truncate_list(&items, 0), &["a", "b", "c"]);
    }

    #[test]
    fn test_truncate_keeps_prefix_in_order() {
        let items = vec!["a", "b", "c"];
        assert_eq!(truncate_list(&items, 2), &["a", "b"]);
        assert_eq!(truncate_list(&items, 3), &["a", "b", "c"]);
        assert_eq!(truncate_list(&items, 10), &["a", "b", "c"]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_truncate_empty() {
        let items: Vec<String> = Vec::new();
        assert!(truncate_list(&items, 2).is_empty());
    }
}
