use crate::cli::Sample;
use database::{AppDao, DaoResult};
use models::EntityId;

pub async fn create_instructor(dao: &impl AppDao, sample: Sample) -> DaoResult<()> {
    let instructor = sample.instructor();

    println!("Saving instructor: {instructor}");
    // Saving the instructor also saves its detail
    let saved = dao.save_instructor(instructor).await?;

    if let Some(id) = saved.id() {
        println!("Saved instructor with id: {id}");
    }
    println!("Done!");
    Ok(())
}

pub async fn find_instructor(dao: &impl AppDao, id: EntityId) -> DaoResult<()> {
    println!("Finding instructor with id: {id}");

    match dao.find_instructor_by_id(id).await? {
        Some(instructor) => {
            println!("{instructor}");
            match instructor.instructor_detail() {
                Some(detail) => println!("{detail}"),
                None => println!("No instructor detail"),
            }
        }
        None => println!("No instructor found with id: {id}"),
    }

    Ok(())
}

pub async fn find_instructor_detail(dao: &impl AppDao, id: EntityId) -> DaoResult<()> {
    println!("Finding instructor detail with id: {id}");

    match dao.find_instructor_detail_by_id(id).await? {
        Some(detail) => {
            println!("{detail}");
            if let Some(owner) = detail.instructor_id() {
                println!("Owned by instructor with id: {owner}");
            }
        }
        None => println!("No instructor detail found with id: {id}"),
    }

    Ok(())
}

pub async fn delete_instructor(dao: &impl AppDao, id: EntityId) -> DaoResult<()> {
    println!("Deleting instructor with id: {id}");
    dao.delete_instructor_by_id(id).await?;
    println!("Done!");
    Ok(())
}
