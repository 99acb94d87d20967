pub mod grade;
pub mod schedule;
pub mod user;

pub use grade::Grade;
pub use schedule::{ScheduleEntry, Weekday};
pub use user::{Role, Session, User};
