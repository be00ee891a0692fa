use uuid::Uuid;

pub mod auth;
pub mod password;
pub mod validation;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}
