use crate::{EntityId, InstructorDetail};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An instructor and the profile detail it owns.
///
/// Saving or deleting an instructor applies to its attached detail as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    id: Option<EntityId>,
    first_name: String,
    last_name: String,
    email: String,
    instructor_detail: Option<InstructorDetail>,
}

impl Instructor {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            instructor_detail: None,
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// Assigns the persisted id, keeping the detail's back reference in sync
    pub fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
        if let Some(detail) = self.instructor_detail.as_mut() {
            detail.set_instructor_id(id);
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn instructor_detail(&self) -> Option<&InstructorDetail> {
        self.instructor_detail.as_ref()
    }

    pub fn instructor_detail_mut(&mut self) -> Option<&mut InstructorDetail> {
        self.instructor_detail.as_mut()
    }

    /// Attaches `detail`, replacing any detail that was attached before
    pub fn set_instructor_detail(&mut self, mut detail: InstructorDetail) {
        if let Some(id) = self.id {
            detail.set_instructor_id(id);
        }
        self.instructor_detail = Some(detail);
    }

    pub fn take_instructor_detail(&mut self) -> Option<InstructorDetail> {
        self.instructor_detail.take()
    }
}

impl Display for Instructor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.id {
            Some(id) => write!(f, "Instructor #{id}")?,
            None => write!(f, "Instructor (unsaved)")?,
        }
        write!(
            f,
            ": {} {} <{}>",
            self.first_name, self.last_name, self.email
        )?;

        match &self.instructor_detail {
            Some(detail) => write!(f, " [{detail}]"),
            None => write!(f, " [no detail]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Instructor {
        Instructor::new("John", "Doe", "johndoe@luv2code.com")
    }

    #[test]
    fn display_includes_detail() {
        let mut instructor = john();
        assert_eq!(
            instructor.to_string(),
            "Instructor (unsaved): John Doe <johndoe@luv2code.com> [no detail]"
        );

        instructor.set_instructor_detail(InstructorDetail::new(
            "http://johndoe.com/youtube",
            "Searching",
        ));
        assert_eq!(
            instructor.to_string(),
            "Instructor (unsaved): John Doe <johndoe@luv2code.com> \
             [InstructorDetail (unsaved): youtube_channel=http://johndoe.com/youtube, hobby=Searching]"
        );
    }

    #[test]
    fn set_id_updates_back_reference() {
        let mut instructor = john();
        instructor.set_instructor_detail(InstructorDetail::new("link", "hobby"));
        instructor.set_id(3);

        assert_eq!(instructor.id(), Some(3));
        assert_eq!(
            instructor.instructor_detail().and_then(InstructorDetail::instructor_id),
            Some(3)
        );
    }

    #[test]
    fn attaching_to_saved_instructor_links_detail() {
        let mut instructor = john();
        instructor.set_id(5);
        instructor.set_instructor_detail(InstructorDetail::new("link", "hobby"));

        let detail = instructor.take_instructor_detail();
        assert_eq!(detail.and_then(|d| d.instructor_id()), Some(5));
        assert!(instructor.instructor_detail().is_none());
    }

    #[test]
    fn serializes_with_nested_detail() {
        let mut instructor = john();
        instructor.set_instructor_detail(InstructorDetail::new("link", "hobby"));

        let json = serde_json::to_value(&instructor).unwrap();
        assert_eq!(json["first_name"], "John");
        assert_eq!(json["instructor_detail"]["hobby"], "hobby");
        assert!(json["id"].is_null());
    }
}
