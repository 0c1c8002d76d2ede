use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create instructor table
        manager
            .create_table(
                Table::create()
                    .table(Instructor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructor::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Instructor::FirstName).string().not_null())
                    .col(ColumnDef::new(Instructor::LastName).string().not_null())
                    .col(ColumnDef::new(Instructor::Email).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create instructor_detail table, at most one row per instructor
        manager
            .create_table(
                Table::create()
                    .table(InstructorDetail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InstructorDetail::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InstructorDetail::YoutubeChannel)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InstructorDetail::Hobby).string().not_null())
                    .col(
                        ColumnDef::new(InstructorDetail::InstructorId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-instructor_detail-instructor_id")
                            .from(InstructorDetail::Table, InstructorDetail::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(InstructorDetail::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Instructor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Instructor {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
}

#[derive(Iden)]
enum InstructorDetail {
    Table,
    Id,
    YoutubeChannel,
    Hobby,
    InstructorId,
}
