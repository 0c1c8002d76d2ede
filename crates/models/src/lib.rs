pub mod instructor;
pub mod instructor_detail;

pub use instructor::Instructor;
pub use instructor_detail::InstructorDetail;

/// Identity assigned by the persistence layer on first save
pub type EntityId = i32;
