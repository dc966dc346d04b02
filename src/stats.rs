use crate::models::{ChartGroup, ChartPoint, ProgressEntry};
use chrono::{Local, Months, NaiveDate};

pub const RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    AllTime,
    LastMonth,
    LastThreeMonths,
    LastSixMonths,
}

impl TimeRange {
    /// Unknown values fall back to all-time.
    pub fn parse(value: &str) -> Self {
        match value {
            "last-month" => Self::LastMonth,
            "last-3-months" => Self::LastThreeMonths,
            "last-6-months" => Self::LastSixMonths,
            _ => Self::AllTime,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllTime => "all-time",
            Self::LastMonth => "last-month",
            Self::LastThreeMonths => "last-3-months",
            Self::LastSixMonths => "last-6-months",
        }
    }

    fn months(self) -> Option<u32> {
        match self {
            Self::AllTime => None,
            Self::LastMonth => Some(1),
            Self::LastThreeMonths => Some(3),
            Self::LastSixMonths => Some(6),
        }
    }

    pub fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        let months = self.months()?;
        today.checked_sub_months(Months::new(months))
    }
}

/// The first entries as received. Callers pass lists already ordered newest first.
pub fn recent_progress(entries: &[ProgressEntry]) -> &[ProgressEntry] {
    &entries[..entries.len().min(RECENT_LIMIT)]
}

pub fn filter_by_time_range(entries: Vec<ProgressEntry>, range: TimeRange) -> Vec<ProgressEntry> {
    filter_by_time_range_at(Local::now().date_naive(), entries, range)
}

pub fn filter_by_time_range_at(
    today: NaiveDate,
    entries: Vec<ProgressEntry>,
    range: TimeRange,
) -> Vec<ProgressEntry> {
    let Some(cutoff) = range.cutoff(today) else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|entry| parse_date(&entry.date).is_some_and(|date| date >= cutoff))
        .collect()
}

/// Groups by "<exercise> (<muscle group>)" in first-seen order, keeping each
/// group's points in the order received.
pub fn group_by_exercise(entries: &[ProgressEntry]) -> Vec<ChartGroup> {
    let mut groups: Vec<ChartGroup> = Vec::new();
    for entry in entries {
        let label = entry.label();
        let point = ChartPoint {
            date: entry.date.clone(),
            weight: entry.weight,
        };
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.points.push(point),
            None => groups.push(ChartGroup {
                label,
                points: vec![point],
            }),
        }
    }
    groups
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str, group: &str, weight: f64, date: &str) -> ProgressEntry {
        ProgressEntry {
            id,
            exercise_id: id,
            exercise_name: name.to_string(),
            muscle_group: group.to_string(),
            weight,
            date: date.to_string(),
        }
    }

    fn dates(entries: &[ProgressEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.date.as_str()).collect()
    }

    #[test]
    fn last_three_months_keeps_cutoff_day() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let entries = vec![
            entry(1, "Squat", "Legs", 200.0, "2024-01-01"),
            entry(2, "Squat", "Legs", 210.0, "2024-03-01"),
            entry(3, "Squat", "Legs", 220.0, "2024-05-01"),
        ];

        assert_eq!(
            TimeRange::LastThreeMonths.cutoff(today),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        let kept = filter_by_time_range_at(today, entries, TimeRange::LastThreeMonths);
        assert_eq!(dates(&kept), vec!["2024-03-01", "2024-05-01"]);
    }

    #[test]
    fn all_time_keeps_everything_including_odd_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let entries = vec![
            entry(1, "Squat", "Legs", 200.0, "2019-01-01"),
            entry(2, "Squat", "Legs", 210.0, "someday"),
        ];
        let kept = filter_by_time_range_at(today, entries, TimeRange::AllTime);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn bounded_range_drops_unparsable_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let entries = vec![
            entry(1, "Squat", "Legs", 200.0, "someday"),
            entry(2, "Squat", "Legs", 210.0, "2024-05-20"),
        ];
        let kept = filter_by_time_range_at(today, entries, TimeRange::LastMonth);
        assert_eq!(dates(&kept), vec!["2024-05-20"]);
    }

    #[test]
    fn month_end_cutoff_is_clamped() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        assert_eq!(
            TimeRange::LastThreeMonths.cutoff(today),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            TimeRange::LastSixMonths.cutoff(today),
            NaiveDate::from_ymd_opt(2023, 11, 30)
        );
    }

    #[test]
    fn range_names_parse_with_fallback() {
        assert_eq!(TimeRange::parse("last-6-months"), TimeRange::LastSixMonths);
        assert_eq!(TimeRange::parse("last-month").as_str(), "last-month");
        assert_eq!(TimeRange::parse("forever"), TimeRange::AllTime);
    }

    #[test]
    fn recent_is_a_prefix_of_ten() {
        let entries: Vec<_> = (0..14)
            .map(|i| entry(i, "Curl", "Biceps", 30.0, &format!("2024-01-{:02}", 28 - i)))
            .collect();
        let recent = recent_progress(&entries);
        assert_eq!(recent.len(), RECENT_LIMIT);
        assert_eq!(recent[0].date, "2024-01-28");
        assert_eq!(recent[9].date, "2024-01-19");

        assert_eq!(recent_progress(&entries[..3]).len(), 3);
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let entries = vec![
            entry(1, "Squat", "Legs", 200.0, "2024-01-01"),
            entry(2, "Curl", "Biceps", 30.0, "2024-01-02"),
            entry(3, "Squat", "Legs", 205.0, "2024-01-03"),
        ];
        let groups = group_by_exercise(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Squat (Legs)");
        assert_eq!(
            groups[0].points,
            vec![
                ChartPoint {
                    date: "2024-01-01".into(),
                    weight: 200.0
                },
                ChartPoint {
                    date: "2024-01-03".into(),
                    weight: 205.0
                },
            ]
        );
        assert_eq!(groups[1].label, "Curl (Biceps)");
    }

    #[test]
    fn same_name_in_different_groups_stays_apart() {
        let entries = vec![
            entry(1, "Press", "Chest", 100.0, "2024-01-01"),
            entry(2, "Press", "Shoulders", 60.0, "2024-01-01"),
        ];
        assert_eq!(group_by_exercise(&entries).len(), 2);
    }
}
