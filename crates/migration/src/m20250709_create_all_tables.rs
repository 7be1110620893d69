use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Subject).string().not_null())
                    .col(ColumnDef::new(Courses::Number).string().not_null())
                    .col(ColumnDef::new(Courses::Section).string().not_null())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Credits).small_integer().not_null())
                    .col(
                        ColumnDef::new(Courses::FacultyRefs)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::State)
                            .string()
                            .not_null()
                            .default("UNMODIFIED"),
                    )
                    .col(ColumnDef::new(Courses::Semester).string_len(1).not_null())
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create meetings table
        manager
            .create_table(
                Table::create()
                    .table(Meetings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Meetings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Meetings::CourseId).uuid().not_null())
                    // Bit set, Monday = 1
                    .col(ColumnDef::new(Meetings::Days).small_integer().not_null())
                    .col(ColumnDef::new(Meetings::StartTime).small_integer())
                    .col(ColumnDef::new(Meetings::EndTime).small_integer())
                    .col(
                        ColumnDef::new(Meetings::IsOnline)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Meetings::RoomRefs)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Meetings::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Meetings::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-meetings-course_id")
                            .from(Meetings::Table, Meetings::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .check(Expr::cust(
                        "is_online OR start_time IS NULL OR end_time IS NULL OR end_time > start_time",
                    ))
                    .to_owned(),
            )
            .await?;

        // Create guidelines table
        manager
            .create_table(
                Table::create()
                    .table(Guidelines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guidelines::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Guidelines::Credits).small_integer().not_null())
                    .col(
                        ColumnDef::new(Guidelines::MeetingAmount)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Guidelines::Days).small_integer().not_null())
                    // Bit set, Fall = 1
                    .col(ColumnDef::new(Guidelines::Semesters).small_integer().not_null())
                    .col(ColumnDef::new(Guidelines::WindowStart).small_integer())
                    .col(ColumnDef::new(Guidelines::WindowEnd).small_integer())
                    .col(
                        ColumnDef::new(Guidelines::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Guidelines::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guidelines::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Meetings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Courses {
    Table,
    Id,
    Subject,
    Number,
    Section,
    Title,
    Credits,
    FacultyRefs,
    State,
    Semester,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(crate) enum Meetings {
    Table,
    Id,
    CourseId,
    Days,
    StartTime,
    EndTime,
    IsOnline,
    RoomRefs,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(crate) enum Guidelines {
    Table,
    Id,
    Credits,
    MeetingAmount,
    Days,
    Semesters,
    WindowStart,
    WindowEnd,
    CreatedAt,
    UpdatedAt,
}
