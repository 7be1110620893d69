use crate::m20250709_create_all_tables::{Courses, Guidelines, Meetings};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Courses are always listed per semester
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_semester")
                    .table(Courses::Table)
                    .col(Courses::Semester)
                    .col(Courses::Subject)
                    .col(Courses::Number)
                    .to_owned(),
            )
            .await?;

        // Index on meetings.course_id for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_meetings_course_id")
                    .table(Meetings::Table)
                    .col(Meetings::CourseId)
                    .to_owned(),
            )
            .await?;

        // Guideline lookups filter on the exact credit/meeting profile first
        manager
            .create_index(
                Index::create()
                    .name("idx_guidelines_profile")
                    .table(Guidelines::Table)
                    .col(Guidelines::Credits)
                    .col(Guidelines::MeetingAmount)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_guidelines_profile").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_meetings_course_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_semester").to_owned())
            .await?;

        Ok(())
    }
}
