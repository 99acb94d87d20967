use chrono::Local;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::error::PortalError;
use crate::models::{Grade, Role, ScheduleEntry, Session, User, Weekday};
use crate::store::{self, GRADES, RecordStore, SCHEDULE, USERS};

/// Teacher-side management: grade entry and schedule upkeep, plus the
/// listings the management views render. Every teacher session sees and
/// mutates the whole schedule; entries are not scoped to their author.
pub struct Dashboard<'a> {
    pub store: &'a mut dyn RecordStore,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a mut dyn RecordStore) -> Self {
        Self { store }
    }

    // LISTINGS

    /// All student accounts, for the grade-entry picker.
    pub fn students(&self) -> Vec<User> {
        let users: Vec<User> = store::load_collection(&*self.store, USERS);
        users
            .into_iter()
            .filter(|u| u.role == Role::Student)
            .collect()
    }

    pub fn all_grades(&self) -> Vec<Grade> {
        store::load_collection(&*self.store, GRADES)
    }

    pub fn all_schedule(&self) -> Vec<ScheduleEntry> {
        store::load_collection(&*self.store, SCHEDULE)
    }

    // GRADE ENTRY

    /// Appends a grade for the student picked by `student_ref` (a user id),
    /// stamped with today's date and the acting teacher's name. Any empty or
    /// unselected field fails validation and persists nothing; a
    /// `student_ref` matching no student counts as an unselected student.
    pub fn add_grade(
        &mut self,
        session: &Session,
        student_ref: &str,
        subject: &str,
        grade: Option<u8>,
    ) -> Result<Grade, PortalError> {
        info!("Adding grade in subject '{}' by {}", subject, session.name);

        let mut missing = Vec::new();
        if student_ref.is_empty() {
            missing.push("student".to_string());
        }
        if subject.is_empty() {
            missing.push("subject".to_string());
        }
        if grade.is_none() {
            missing.push("grade".to_string());
        }
        if !missing.is_empty() {
            warn!("Grade entry rejected, missing fields: {:?}", missing);
            return Err(PortalError::ValidationFailed(missing));
        }

        let student = match self.students().into_iter().find(|s| s.id == student_ref) {
            Some(student) => student,
            None => {
                warn!("Grade entry rejected, unknown student ref: {}", student_ref);
                return Err(PortalError::ValidationFailed(vec!["student".to_string()]));
            }
        };

        let entry = Grade {
            id: Uuid::new_v4().to_string(),
            student_id: student.student_id.unwrap_or_default(),
            student_name: student.name,
            subject: subject.to_string(),
            grade: grade.unwrap_or_default(),
            date: Local::now().format("%d.%m.%Y").to_string(),
            teacher_name: session.name.clone(),
        };

        let mut grades = self.all_grades();
        grades.push(entry.clone());
        store::save_collection(self.store, GRADES, &grades)?;
        debug!("Grade {} recorded", entry.id);

        Ok(entry)
    }

    // SCHEDULE MANAGEMENT

    /// Appends a schedule entry, teacher name stamped from the session. The
    /// same validation pattern as grade entry; student groups start empty.
    pub fn add_schedule_entry(
        &mut self,
        session: &Session,
        subject: &str,
        day: Option<Weekday>,
        time: &str,
        room: &str,
    ) -> Result<ScheduleEntry, PortalError> {
        info!("Adding schedule entry '{}' by {}", subject, session.name);

        let mut missing = Vec::new();
        if subject.is_empty() {
            missing.push("subject".to_string());
        }
        if day.is_none() {
            missing.push("day".to_string());
        }
        if time.is_empty() {
            missing.push("time".to_string());
        }
        if room.is_empty() {
            missing.push("room".to_string());
        }
        if !missing.is_empty() {
            warn!("Schedule entry rejected, missing fields: {:?}", missing);
            return Err(PortalError::ValidationFailed(missing));
        }

        let entry = ScheduleEntry {
            id: Uuid::new_v4().to_string(),
            subject: subject.to_string(),
            day: day.unwrap_or(Weekday::Monday),
            time: time.to_string(),
            room: room.to_string(),
            teacher: session.name.clone(),
            student_groups: Vec::new(),
        };

        let mut schedule = self.all_schedule();
        schedule.push(entry.clone());
        store::save_collection(self.store, SCHEDULE, &schedule)?;
        debug!("Schedule entry {} recorded", entry.id);

        Ok(entry)
    }

    /// Removes the entry with the exact id. An absent id is a no-op.
    pub fn delete_schedule_entry(&mut self, id: &str) -> Result<(), PortalError> {
        info!("Deleting schedule entry {}", id);
        let mut schedule = self.all_schedule();
        let before = schedule.len();
        schedule.retain(|e| e.id != id);
        if schedule.len() == before {
            debug!("Schedule entry {} not found, nothing to delete", id);
        }
        store::save_collection(self.store, SCHEDULE, &schedule)
    }
}
