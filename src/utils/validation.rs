//! Field validation for request bodies.
//!
//! Each `validate_*` function checks every field and collects one message per
//! failing field, so a client sees all problems in a single 400 response.

use std::fmt;

use validator::ValidateEmail;

use crate::types::course::{CoursePatch, NewCourse, RCourseCreate, RCourseUpdate};
use crate::types::user::{NewUser, RUserCreate};

pub const MAX_ESTIMATED_TIME_LEN: usize = 3;

/// Messages for every field that failed validation, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }

    fn required(&mut self, value: Option<String>, missing: &str, blank: &str) -> Option<String> {
        match value {
            None => {
                self.push(missing);
                None
            }
            Some(v) if v.trim().is_empty() => {
                self.push(blank);
                None
            }
            Some(v) => Some(v),
        }
    }

    fn optional(&mut self, value: Option<String>, blank: &str) -> Option<String> {
        match value {
            Some(v) if v.trim().is_empty() => {
                self.push(blank);
                None
            }
            other => other,
        }
    }

    fn email_format(&mut self, value: Option<String>) -> Option<String> {
        let email = value?;
        if email.validate_email() {
            Some(email)
        } else {
            self.push("The email you entered is not in valid name@name.com format.");
            None
        }
    }

    fn estimated_time_len(&mut self, value: Option<String>) -> Option<String> {
        let time = value?;
        if time.chars().count() > MAX_ESTIMATED_TIME_LEN {
            self.push("The estimated time should be between 1 and 3 characters in length");
            None
        } else {
            Some(time)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_user_create(body: RUserCreate) -> Result<NewUser, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let first_name = errors.required(body.first_name, "A first name is required", "Please provide a first name");
    let last_name = errors.required(body.last_name, "A last name is required", "Please provide a last name");
    let email = errors.required(body.email_address, "An email address is required", "Please provide an email address");
    let email_address = errors.email_format(email);
    let password = errors.required(body.password, "A password is required", "Please provide a password");

    match (first_name, last_name, email_address, password) {
        (Some(first_name), Some(last_name), Some(email_address), Some(password)) => {
            errors.finish(|| NewUser { first_name, last_name, email_address, password })
        }
        _ => Err(errors),
    }
}

pub fn validate_course_create(body: RCourseCreate) -> Result<NewCourse, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = errors.required(body.title, "A title is required", "Please provide a title");
    let description = errors.required(body.description, "A description is required", "Please provide a description");
    let time = errors.required(
        body.estimated_time,
        "An estimated time is required",
        "Please provide an estimated time.",
    );
    let estimated_time = errors.estimated_time_len(time);
    // may be empty, but must be present
    let materials_needed = match body.materials_needed {
        Some(m) => Some(m),
        None => {
            errors.push("Materials needed is required");
            None
        }
    };

    match (title, description, estimated_time, materials_needed) {
        (Some(title), Some(description), Some(estimated_time), Some(materials_needed)) => {
            errors.finish(|| NewCourse { title, description, estimated_time, materials_needed })
        }
        _ => Err(errors),
    }
}

pub fn validate_course_update(body: RCourseUpdate) -> Result<CoursePatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = errors.optional(body.title, "Please provide a title");
    let description = errors.optional(body.description, "Please provide a description");
    let time = errors.optional(body.estimated_time, "Please provide an estimated time.");
    let estimated_time = errors.estimated_time_len(time);

    errors.finish(|| CoursePatch {
        title,
        description,
        estimated_time,
        materials_needed: body.materials_needed,
    })
}
