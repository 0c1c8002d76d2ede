use crate::{
    entities::{instructor, instructor_detail},
    error::{DaoError, DaoResult},
};
use async_trait::async_trait;
use log::{debug, info};
use models::{EntityId, Instructor, InstructorDetail};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, TransactionTrait,
};

/// Storage operations for instructors and the details they own
#[async_trait]
pub trait AppDao {
    /// Looks up an instructor and its detail by primary key
    async fn find_instructor_by_id(&self, id: EntityId) -> DaoResult<Option<Instructor>>;

    /// Looks up a detail by primary key; the result carries its owner's id
    async fn find_instructor_detail_by_id(
        &self,
        id: EntityId,
    ) -> DaoResult<Option<InstructorDetail>>;

    /// Inserts a transient instructor together with its attached detail.
    ///
    /// Returns the instructor with the assigned ids filled in.
    async fn save_instructor(&self, instructor: Instructor) -> DaoResult<Instructor>;

    /// Removes an instructor and the detail it owns.
    ///
    /// Fails with [`DaoError::NotFound`] when no instructor has this id.
    async fn delete_instructor_by_id(&self, id: EntityId) -> DaoResult<()>;
}

/// [`AppDao`] backed by a sea-orm connection
#[derive(Clone, Debug)]
pub struct InstructorDao {
    db: DatabaseConnection,
}

impl InstructorDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl AppDao for InstructorDao {
    async fn find_instructor_by_id(&self, id: EntityId) -> DaoResult<Option<Instructor>> {
        debug!("Finding instructor {id}");

        let found = instructor::Entity::find_by_id(id)
            .find_also_related(instructor_detail::Entity)
            .one(&self.db)
            .await?;

        Ok(found.map(|(model, detail)| to_instructor(model, detail)))
    }

    async fn find_instructor_detail_by_id(
        &self,
        id: EntityId,
    ) -> DaoResult<Option<InstructorDetail>> {
        debug!("Finding instructor detail {id}");

        let found = instructor_detail::Entity::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(found.map(InstructorDetail::from))
    }

    async fn save_instructor(&self, mut instructor: Instructor) -> DaoResult<Instructor> {
        if let Some(id) = instructor.id() {
            return Err(DaoError::Validation(format!(
                "instructor is already persisted with id {id}"
            )));
        }

        // Both rows land in one transaction; dropping it uncommitted rolls back
        let txn = self.db.begin().await?;

        let saved = instructor::ActiveModel {
            id: NotSet,
            first_name: Set(instructor.first_name().to_owned()),
            last_name: Set(instructor.last_name().to_owned()),
            email: Set(instructor.email().to_owned()),
        }
        .insert(&txn)
        .await?;
        instructor.set_id(saved.id);

        if let Some(detail) = instructor.instructor_detail_mut() {
            let saved_detail = instructor_detail::ActiveModel {
                id: NotSet,
                youtube_channel: Set(detail.youtube_channel().to_owned()),
                hobby: Set(detail.hobby().to_owned()),
                instructor_id: Set(saved.id),
            }
            .insert(&txn)
            .await?;
            detail.set_id(saved_detail.id);
        }

        txn.commit().await?;
        info!(
            "Saved instructor {} (detail: {:?})",
            saved.id,
            instructor.instructor_detail().and_then(InstructorDetail::id)
        );

        Ok(instructor)
    }

    async fn delete_instructor_by_id(&self, id: EntityId) -> DaoResult<()> {
        let txn = self.db.begin().await?;

        let Some(found) = instructor::Entity::find_by_id(id).one(&txn).await? else {
            return Err(DaoError::NotFound {
                entity: "instructor",
                id,
            });
        };

        // Remove the owned detail first so no orphan row survives the instructor
        let removed_details = instructor_detail::Entity::delete_many()
            .filter(instructor_detail::Column::InstructorId.eq(found.id))
            .exec(&txn)
            .await?
            .rows_affected;

        found.delete(&txn).await?;
        txn.commit().await?;

        info!("Deleted instructor {id} and {removed_details} detail row(s)");
        Ok(())
    }
}

impl From<instructor_detail::Model> for InstructorDetail {
    fn from(model: instructor_detail::Model) -> Self {
        InstructorDetail::persisted(
            model.id,
            model.youtube_channel,
            model.hobby,
            model.instructor_id,
        )
    }
}

fn to_instructor(
    model: instructor::Model,
    detail: Option<instructor_detail::Model>,
) -> Instructor {
    let mut instructor = Instructor::new(model.first_name, model.last_name, model.email);
    instructor.set_id(model.id);

    if let Some(detail) = detail {
        instructor.set_instructor_detail(detail.into());
    }

    instructor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_instructor_links_detail_to_owner() {
        let instructor = to_instructor(
            instructor::Model {
                id: 4,
                first_name: "Angel".to_string(),
                last_name: "Roa".to_string(),
                email: "angel@luv2code.com".to_string(),
            },
            Some(instructor_detail::Model {
                id: 9,
                youtube_channel: "http://angelroa.com/youtube".to_string(),
                hobby: "Reading".to_string(),
                instructor_id: 4,
            }),
        );

        assert_eq!(instructor.id(), Some(4));
        let detail = instructor.instructor_detail().unwrap();
        assert_eq!(detail.id(), Some(9));
        assert_eq!(detail.instructor_id(), Some(4));
        assert_eq!(detail.hobby(), "Reading");
    }

    #[test]
    fn to_instructor_without_detail() {
        let instructor = to_instructor(
            instructor::Model {
                id: 1,
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "johndoe@luv2code.com".to_string(),
            },
            None,
        );

        assert!(instructor.instructor_detail().is_none());
    }
}
