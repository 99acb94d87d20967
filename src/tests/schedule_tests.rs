use crate::dashboard::Dashboard;
use crate::error::PortalError;
use crate::models::{ScheduleEntry, Session, Weekday};
use crate::store::{self, SCHEDULE};
use crate::tests::{create_test_store, register_pair};
use crate::views::{entries_for_day, schedule_for_student, week_view};

fn lesson(id: &str, day: Weekday, time: &str, groups: &[&str]) -> ScheduleEntry {
    ScheduleEntry {
        id: id.to_string(),
        subject: "Math".to_string(),
        day,
        time: time.to_string(),
        room: "101".to_string(),
        teacher: "Maria Ivanova".to_string(),
        student_groups: groups.iter().map(|g| g.to_string()).collect(),
    }
}

#[test]
fn test_add_schedule_entry_stamps_teacher() {
    let mut store = create_test_store();
    let (teacher, _) = register_pair(&mut store);

    let entry = Dashboard::new(&mut store)
        .add_schedule_entry(&teacher, "Physics", Some(Weekday::Tuesday), "09:00", "202")
        .unwrap();

    assert_eq!(entry.teacher, teacher.name);
    assert_eq!(entry.day, Weekday::Tuesday);
    assert!(entry.student_groups.is_empty());

    let schedule: Vec<ScheduleEntry> = store::load_collection(&store, SCHEDULE);
    assert_eq!(schedule.len(), 1);
}

#[test]
fn test_add_schedule_entry_reports_missing_fields() {
    let mut store = create_test_store();
    let (teacher, _) = register_pair(&mut store);

    let result = Dashboard::new(&mut store).add_schedule_entry(&teacher, "", None, "", "");
    match result {
        Err(PortalError::ValidationFailed(fields)) => {
            assert_eq!(fields, vec!["subject", "day", "time", "room"]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }

    let schedule: Vec<ScheduleEntry> = store::load_collection(&store, SCHEDULE);
    assert!(schedule.is_empty());
}

#[test]
fn test_teacher_listing_is_not_scoped_to_author() {
    let mut store = create_test_store();
    let (teacher, _) = register_pair(&mut store);

    Dashboard::new(&mut store)
        .add_schedule_entry(&teacher, "Physics", Some(Weekday::Monday), "09:00", "202")
        .unwrap();
    // An entry authored by someone else entirely.
    let mut schedule: Vec<ScheduleEntry> = store::load_collection(&store, SCHEDULE);
    schedule.push(lesson("other", Weekday::Monday, "11:00", &[]));
    store::save_collection(&mut store, SCHEDULE, &schedule).unwrap();

    // The management view shows everything, regardless of who created it.
    assert_eq!(Dashboard::new(&mut store).all_schedule().len(), 2);
}

#[test]
fn test_delete_schedule_entry() {
    let mut store = create_test_store();
    let (teacher, _) = register_pair(&mut store);

    let entry = Dashboard::new(&mut store)
        .add_schedule_entry(&teacher, "Physics", Some(Weekday::Monday), "09:00", "202")
        .unwrap();

    Dashboard::new(&mut store).delete_schedule_entry(&entry.id).unwrap();
    assert!(Dashboard::new(&mut store).all_schedule().is_empty());
}

#[test]
fn test_delete_absent_id_is_a_noop() {
    let mut store = create_test_store();
    let (teacher, _) = register_pair(&mut store);

    Dashboard::new(&mut store)
        .add_schedule_entry(&teacher, "Physics", Some(Weekday::Monday), "09:00", "202")
        .unwrap();

    Dashboard::new(&mut store).delete_schedule_entry("no-such-id").unwrap();
    assert_eq!(Dashboard::new(&mut store).all_schedule().len(), 1);
}

#[test]
fn test_day_entries_sort_by_time_lexically() {
    let entries = vec![
        lesson("a", Weekday::Monday, "11:00", &[]),
        lesson("b", Weekday::Monday, "09:00", &[]),
        lesson("c", Weekday::Tuesday, "08:00", &[]),
        lesson("d", Weekday::Monday, "09:30", &[]),
    ];

    let monday = entries_for_day(&entries, Weekday::Monday);
    let times: Vec<&str> = monday.iter().map(|e| e.time.as_str()).collect();
    assert_eq!(times, vec!["09:00", "09:30", "11:00"]);
}

#[test]
fn test_week_view_keeps_fixed_day_order_and_empty_days() {
    let entries = vec![lesson("a", Weekday::Friday, "10:00", &[])];
    let week = week_view(&entries);

    assert_eq!(week.len(), 6);
    let days: Vec<Weekday> = week.iter().map(|(d, _)| *d).collect();
    assert_eq!(days, Weekday::ALL.to_vec());

    // A day with zero entries is an empty list, never an error.
    assert!(week[0].1.is_empty());
    assert_eq!(week[4].1.len(), 1);
}

#[test]
fn test_student_schedule_filters_by_group_membership() {
    let entries = vec![
        lesson("a", Weekday::Monday, "09:00", &["STU1", "STU2"]),
        lesson("b", Weekday::Monday, "11:00", &["STU2"]),
        lesson("c", Weekday::Tuesday, "09:00", &[]),
    ];
    let session = Session {
        id: "1".to_string(),
        email: "ivan@x.com".to_string(),
        name: "Ivan".to_string(),
        role: crate::models::Role::Student,
        student_id: Some("STU1".to_string()),
        teacher_id: None,
    };

    let mine = schedule_for_student(&entries, &session);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, "a");

    let no_id = Session {
        student_id: None,
        ..session
    };
    assert!(schedule_for_student(&entries, &no_id).is_empty());
}
