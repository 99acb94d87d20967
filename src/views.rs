//! Derived views over the raw collections: grade filtering and averaging for
//! the student dashboard, classification bands for badges, and the weekly
//! schedule grouping. All functions are pure; callers load the collections
//! through a [`crate::store::RecordStore`] and pass slices in.

use crate::models::{Grade, ScheduleEntry, Session, Weekday};

/// Which key joins a grade to a student. The two dashboards historically
/// disagree — one matches on `studentId`, the other on the display name — so
/// the choice is a parameter at this boundary rather than two copies of the
/// filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeMatch {
    StudentId,
    Name,
}

/// Grades belonging to the session's student, joined by `match_by`. A session
/// without a `studentId` matches nothing under [`GradeMatch::StudentId`];
/// dangling references simply yield an empty result.
pub fn grades_for_student(
    grades: &[Grade],
    session: &Session,
    match_by: GradeMatch,
) -> Vec<Grade> {
    grades
        .iter()
        .filter(|g| match match_by {
            GradeMatch::StudentId => session
                .student_id
                .as_deref()
                .is_some_and(|sid| g.student_id == sid),
            GradeMatch::Name => g.student_name == session.name,
        })
        .cloned()
        .collect()
}

/// Arithmetic mean of the grade values; an empty set averages to exactly 0.
pub fn average(grades: &[Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let sum: u32 = grades.iter().map(|g| g.grade as u32).sum();
    sum as f64 / grades.len() as f64
}

/// The average as the dashboard renders it: two decimal places, or a bare "0"
/// for an empty set.
pub fn formatted_average(grades: &[Grade]) -> String {
    if grades.is_empty() {
        "0".to_string()
    } else {
        format!("{:.2}", average(grades))
    }
}

/// Four-tier classification used wherever a grade is spelled out in words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    Satisfactory,
    Unsatisfactory,
}

impl GradeBand {
    pub fn of(value: f64) -> Self {
        if value >= 4.5 {
            GradeBand::Excellent
        } else if value >= 3.5 {
            GradeBand::Good
        } else if value >= 2.5 {
            GradeBand::Satisfactory
        } else {
            GradeBand::Unsatisfactory
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeBand::Excellent => "Excellent",
            GradeBand::Good => "Good",
            GradeBand::Satisfactory => "Satisfactory",
            GradeBand::Unsatisfactory => "Unsatisfactory",
        }
    }
}

/// Coarser three-tier severity used only for badge coloring on the dashboard
/// tables. Kept separate from [`GradeBand`]: the two serve different views
/// and use different thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    pub fn of(value: u8) -> Self {
        if value >= 4 {
            Tone::Positive
        } else if value >= 3 {
            Tone::Neutral
        } else {
            Tone::Negative
        }
    }
}

/// Schedule entries whose `studentGroups` list contains the session's student
/// id. A session without a student id sees an empty schedule.
pub fn schedule_for_student(entries: &[ScheduleEntry], session: &Session) -> Vec<ScheduleEntry> {
    let sid = session.student_id.clone().unwrap_or_default();
    entries
        .iter()
        .filter(|e| e.student_groups.contains(&sid))
        .cloned()
        .collect()
}

/// Entries for one day, sorted by time. Lexical comparison is correct here
/// because times are zero-padded "HH:MM" strings.
pub fn entries_for_day(entries: &[ScheduleEntry], day: Weekday) -> Vec<ScheduleEntry> {
    let mut day_entries: Vec<ScheduleEntry> =
        entries.iter().filter(|e| e.day == day).cloned().collect();
    day_entries.sort_by(|a, b| a.time.cmp(&b.time));
    day_entries
}

/// The full week in [`Weekday::ALL`] order. Days with no entries appear with
/// an empty list, never as an error.
pub fn week_view(entries: &[ScheduleEntry]) -> Vec<(Weekday, Vec<ScheduleEntry>)> {
    Weekday::ALL
        .iter()
        .map(|&day| (day, entries_for_day(entries, day)))
        .collect()
}
