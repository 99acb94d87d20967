use serde::{Deserialize, Serialize};

/// Teaching days, Monday through Saturday. The ordering of [`Weekday::ALL`]
/// is the ordering of every week view.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{}", s)
    }
}

/// One lesson in the weekly schedule. `time` is a zero-padded "HH:MM" string;
/// no format validation beyond that convention and no room/time conflict
/// detection — overlapping entries are allowed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub subject: String,
    pub day: Weekday,
    pub time: String,
    pub room: String,
    pub teacher: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub student_groups: Vec<String>,
}
