use log::info;

use crate::error::PortalError;
use crate::models::{Grade, Role, ScheduleEntry, User, Weekday};
use crate::store::{self, GRADES, RecordStore, SCHEDULE, USERS};

/// Populates demo accounts, grades and schedule when the store has no users
/// yet. A non-empty `users` collection is left untouched, so seeding is safe
/// to call on every startup.
pub fn seed_demo_data(store: &mut dyn RecordStore) -> Result<(), PortalError> {
    let users: Vec<User> = store::load_collection(&*store, USERS);
    if !users.is_empty() {
        return Ok(());
    }
    info!("Empty store, seeding demo data");

    let users = vec![
        demo_user("1000", "student@university.edu", "Ivan Petrov", Role::Student),
        demo_user("1001", "teacher@university.edu", "Maria Ivanova", Role::Teacher),
        demo_user("1002", "student2@university.edu", "Anna Sidorova", Role::Student),
    ];
    store::save_collection(store, USERS, &users)?;

    let grades = vec![
        demo_grade(&users[0], &users[1], "Mathematics", 5),
        demo_grade(&users[0], &users[1], "Physics", 4),
        demo_grade(&users[0], &users[1], "Chemistry", 5),
        demo_grade(&users[2], &users[1], "Mathematics", 4),
        demo_grade(&users[2], &users[1], "Physics", 3),
    ];
    store::save_collection(store, GRADES, &grades)?;

    let group: Vec<String> = users
        .iter()
        .filter_map(|u| u.student_id.clone())
        .collect();
    let schedule = vec![
        demo_lesson(&users[1], "Mathematics", Weekday::Monday, "09:00", "101", &group),
        demo_lesson(&users[1], "Physics", Weekday::Monday, "11:00", "102", &group),
        demo_lesson(&users[1], "Chemistry", Weekday::Tuesday, "09:00", "103", &group),
        demo_lesson(&users[1], "Mathematics", Weekday::Wednesday, "10:00", "101", &group),
        demo_lesson(&users[1], "Physics", Weekday::Thursday, "14:00", "102", &group),
    ];
    store::save_collection(store, SCHEDULE, &schedule)
}

fn demo_user(id: &str, email: &str, name: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        password: "password".to_string(),
        name: name.to_string(),
        role,
        student_id: (role == Role::Student).then(|| format!("STU{}", id)),
        teacher_id: (role == Role::Teacher).then(|| format!("TEA{}", id)),
    }
}

fn demo_grade(student: &User, teacher: &User, subject: &str, value: u8) -> Grade {
    Grade {
        id: uuid::Uuid::new_v4().to_string(),
        student_id: student.student_id.clone().unwrap_or_default(),
        student_name: student.name.clone(),
        subject: subject.to_string(),
        grade: value,
        date: chrono::Local::now().format("%d.%m.%Y").to_string(),
        teacher_name: teacher.name.clone(),
    }
}

fn demo_lesson(
    teacher: &User,
    subject: &str,
    day: Weekday,
    time: &str,
    room: &str,
    groups: &[String],
) -> ScheduleEntry {
    ScheduleEntry {
        id: uuid::Uuid::new_v4().to_string(),
        subject: subject.to_string(),
        day,
        time: time.to_string(),
        room: room.to_string(),
        teacher: teacher.name.clone(),
        student_groups: groups.to_vec(),
    }
}
