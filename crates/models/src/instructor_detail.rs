use crate::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Profile information owned by exactly one [`crate::Instructor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorDetail {
    id: Option<EntityId>,
    youtube_channel: String,
    hobby: String,
    /// Back reference to the owning instructor, for navigation only
    instructor_id: Option<EntityId>,
}

impl InstructorDetail {
    pub fn new(youtube_channel: impl Into<String>, hobby: impl Into<String>) -> Self {
        Self {
            id: None,
            youtube_channel: youtube_channel.into(),
            hobby: hobby.into(),
            instructor_id: None,
        }
    }

    /// Rebuilds a detail that has already been persisted
    pub fn persisted(
        id: EntityId,
        youtube_channel: impl Into<String>,
        hobby: impl Into<String>,
        instructor_id: EntityId,
    ) -> Self {
        Self {
            id: Some(id),
            youtube_channel: youtube_channel.into(),
            hobby: hobby.into(),
            instructor_id: Some(instructor_id),
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    pub fn youtube_channel(&self) -> &str {
        &self.youtube_channel
    }

    pub fn set_youtube_channel(&mut self, youtube_channel: impl Into<String>) {
        self.youtube_channel = youtube_channel.into();
    }

    pub fn hobby(&self) -> &str {
        &self.hobby
    }

    pub fn set_hobby(&mut self, hobby: impl Into<String>) {
        self.hobby = hobby.into();
    }

    pub fn instructor_id(&self) -> Option<EntityId> {
        self.instructor_id
    }

    pub fn set_instructor_id(&mut self, instructor_id: EntityId) {
        self.instructor_id = Some(instructor_id);
    }
}

impl Display for InstructorDetail {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.id {
            Some(id) => write!(f, "InstructorDetail #{id}")?,
            None => write!(f, "InstructorDetail (unsaved)")?,
        }
        write!(
            f,
            ": youtube_channel={}, hobby={}",
            self.youtube_channel, self.hobby
        )
    }
}
