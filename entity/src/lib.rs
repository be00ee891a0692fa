pub mod course;
pub mod user;

/*
 A user can exist without courses. Every course belongs to exactly one user,
 and only that user may change or remove it. Deleting a user removes their courses.
 */
