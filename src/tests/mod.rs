mod schedule_tests;

use crate::auth::AuthService;
use crate::models::{Role, Session};
use crate::store::in_memory::MemoryStore;

pub fn create_test_store() -> MemoryStore {
    let _ = env_logger::try_init();
    MemoryStore::new()
}

/// Registers a teacher and a student and returns their sessions. Ids derive
/// from the registration timestamp, so the two registrations are spaced a
/// couple of milliseconds apart to keep them distinct.
pub fn register_pair(store: &mut MemoryStore) -> (Session, Session) {
    let teacher = AuthService::new(store)
        .register("teacher@uni.edu", "pw", "Maria Ivanova", Role::Teacher)
        .unwrap();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let student = AuthService::new(store)
        .register("student@uni.edu", "pw", "Ivan Petrov", Role::Student)
        .unwrap();
    (teacher, student)
}
