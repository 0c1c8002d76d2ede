pub mod instructor;
pub mod instructor_detail;

pub mod prelude {
    pub use super::instructor::Entity as Instructor;
    pub use super::instructor_detail::Entity as InstructorDetail;
}
