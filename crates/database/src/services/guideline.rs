use crate::entities::guideline;
use calendar::{ScheduleError, matcher::GuidelineLookup};
use log::debug;
use models::{
    guideline::{Guideline, GuidelineQuery, TimeWindow},
    semester::SemesterSet,
};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, prelude::Expr,
};

pub struct GuidelineService;

impl GuidelineService {
    /// Builds the select for guidelines accepting a course profile.
    ///
    /// Returns `None` when the meeting amount does not fit the column, since
    /// no stored guideline can match it.
    pub fn matching_query(query: &GuidelineQuery) -> Option<Select<guideline::Entity>> {
        let meeting_amount = i16::try_from(query.meeting_amount).ok()?;
        let semester_bit = i16::from(SemesterSet::from(query.semester).bits());
        let required_days = i16::from(query.required_days.bits());

        let mut condition = Condition::all()
            .add(guideline::Column::Credits.eq(i16::from(query.credits)))
            .add(guideline::Column::MeetingAmount.eq(meeting_amount))
            .add(Expr::cust_with_values(
                "(guidelines.semesters & $1) <> 0",
                [semester_bit],
            ))
            // Every required day must be allowed; the guideline may allow more
            .add(Expr::cust_with_values(
                "(guidelines.days & $1) = $2",
                [required_days, required_days],
            ));

        if let Some((start, end)) = query.span {
            condition = condition.add(
                Condition::any()
                    .add(guideline::Column::WindowStart.is_null())
                    .add(guideline::Column::WindowEnd.is_null())
                    .add(
                        Condition::all()
                            .add(guideline::Column::WindowStart.lte(start.value() as i16))
                            .add(guideline::Column::WindowEnd.gte(end.value() as i16)),
                    ),
            );
        }

        Some(guideline::Entity::find().filter(condition))
    }

    /// Counts the guidelines accepting a course profile
    pub async fn count_matching(
        db: &DatabaseConnection,
        query: &GuidelineQuery,
    ) -> Result<u64, DbErr> {
        let Some(select) = Self::matching_query(query) else {
            debug!("No guideline can hold {} meetings", query.meeting_amount);
            return Ok(0);
        };

        let count = select.count(db).await?;
        debug!(
            "{count} guidelines match {} credits, {} meetings on {}",
            query.credits, query.meeting_amount, query.required_days
        );

        Ok(count)
    }

    /// Get every guideline, most credits first
    pub async fn get_guidelines(db: &DatabaseConnection) -> Result<Vec<Guideline>, DbErr> {
        guideline::Entity::find()
            .order_by_desc(guideline::Column::Credits)
            .order_by_asc(guideline::Column::MeetingAmount)
            .all(db)
            .await?
            .into_iter()
            .map(to_guideline)
            .collect()
    }
}

fn to_guideline(model: guideline::Model) -> Result<Guideline, DbErr> {
    let credits = u8::try_from(model.credits)
        .map_err(|_| DbErr::Type(format!("Invalid credits: {}", model.credits)))?;
    let meeting_amount = u32::try_from(model.meeting_amount)
        .map_err(|_| DbErr::Type(format!("Invalid meeting amount: {}", model.meeting_amount)))?;

    let time_window = model
        .window_start
        .zip(model.window_end)
        .map(|(start, end)| TimeWindow {
            start: i32::from(start),
            end: i32::from(end),
        });

    Ok(Guideline {
        credits,
        meeting_amount,
        days: model.days,
        allowed_semesters: model.semesters,
        time_window,
    })
}

/// Answers guideline lookups from the `guidelines` table
#[derive(Debug)]
#[cfg_attr(not(test), derive(Clone))]
pub struct DatabaseGuidelines {
    db: DatabaseConnection,
}

impl DatabaseGuidelines {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl GuidelineLookup for DatabaseGuidelines {
    async fn count_matching(&self, query: &GuidelineQuery) -> Result<u64, ScheduleError> {
        GuidelineService::count_matching(&self.db, query)
            .await
            .map_err(|e| ScheduleError::GuidelineLookupFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use models::{days::DaySet, military_time::MilitaryTime, semester::Semester};
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait, Value};
    use std::{collections::BTreeMap, str::FromStr};

    fn query() -> GuidelineQuery {
        GuidelineQuery {
            credits: 3,
            meeting_amount: 3,
            required_days: DaySet::from_str("MWF").unwrap(),
            semester: Semester::Spring,
            span: None,
        }
    }

    #[test]
    fn test_matching_query_filters_profile() {
        let sql = GuidelineService::matching_query(&query())
            .unwrap()
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""guidelines"."credits" = 3"#));
        assert!(sql.contains(r#""guidelines"."meeting_amount" = 3"#));
        // Spring is the third semester bit
        assert!(sql.contains("(guidelines.semesters & 4) <> 0"));
        // MWF = 0b10101
        assert!(sql.contains("(guidelines.days & 21) = 21"));
        assert!(!sql.contains("IS NULL"));
    }

    #[test]
    fn test_matching_query_with_time_window() {
        let query = GuidelineQuery {
            span: Some((
                MilitaryTime::new(830).unwrap(),
                MilitaryTime::new(1320).unwrap(),
            )),
            ..query()
        };
        let sql = GuidelineService::matching_query(&query)
            .unwrap()
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""guidelines"."window_start" IS NULL"#));
        assert!(sql.contains(r#""guidelines"."window_start" <= 830"#));
        assert!(sql.contains(r#""guidelines"."window_end" >= 1320"#));
    }

    fn tr_model() -> guideline::Model {
        guideline::Model {
            id: uuid::Uuid::nil(),
            credits: 4,
            meeting_amount: 2,
            days: DaySet::from_str("TR").unwrap(),
            semesters: SemesterSet::ALL,
            window_start: Some(800),
            window_end: Some(1200),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_to_guideline() {
        let guideline = to_guideline(tr_model()).unwrap();
        assert_eq!(guideline.credits, 4);
        assert_eq!(guideline.meeting_amount, 2);
        assert_eq!(
            guideline.time_window,
            Some(TimeWindow {
                start: 800,
                end: 1200
            })
        );
    }

    #[test]
    fn test_meeting_amount_beyond_column_matches_nothing() {
        let query = GuidelineQuery {
            meeting_amount: u32::from(u16::MAX),
            ..query()
        };
        assert!(GuidelineService::matching_query(&query).is_none());
    }

    #[tokio::test]
    async fn test_lookup_returns_count() {
        let row = BTreeMap::from([("num_items", Value::BigInt(Some(2)))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[row]])
            .into_connection();

        let count = DatabaseGuidelines::new(db)
            .count_matching(&query())
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let err = DatabaseGuidelines::new(db)
            .count_matching(&query())
            .await
            .unwrap_err();
        let ScheduleError::GuidelineLookupFailed(message) = err else {
            panic!("unexpected error: {err}");
        };
        assert!(message.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_oversized_profile_skips_the_database() {
        // No results are queued, so any query would fail
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let query = GuidelineQuery {
            meeting_amount: 40_000,
            ..query()
        };

        let count = DatabaseGuidelines::new(db)
            .count_matching(&query)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_get_guidelines_reads_bit_sets() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[tr_model()]])
            .into_connection();

        let guidelines = GuidelineService::get_guidelines(&db).await.unwrap();
        assert_eq!(guidelines.len(), 1);
        assert_eq!(guidelines[0].days.to_string(), "TR");
        assert_eq!(guidelines[0].allowed_semesters, SemesterSet::ALL);
    }
}
