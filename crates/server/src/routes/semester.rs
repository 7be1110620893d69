use crate::{
    dtos::{course::parse_semester, guideline::GuidelineReportResponse, layout::DayLayoutResponse},
    routes::{db_status, schedule_status},
    state::AppState,
};
use axum::{Json, extract::Path, extract::State, http::StatusCode};
use calendar::report::GuidelineReport;
use database::services::course::CourseService;
use models::{days::Weekday, semester::Semester};
use std::str::FromStr;

fn semester_from_path(value: &str) -> Result<Semester, StatusCode> {
    parse_semester(value).map_err(|_| StatusCode::NOT_FOUND)
}

/// Lay out the stored courses of one semester day
#[utoipa::path(
    get,
    path = "/semesters/{semester}/days/{day}/layout",
    params(
        ("semester" = String, Path, description = "Semester name or code"),
        ("day" = String, Path, description = "Weekday name or letter")
    ),
    responses(
        (status = 200, description = "Blocks sorted by start time", body = DayLayoutResponse),
        (status = 404, description = "Unknown semester or day"),
        (status = 422, description = "Stored meeting times are invalid"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Semesters"
)]
pub async fn get_day_layout(
    State(state): State<AppState>,
    Path((semester, day)): Path<(String, String)>,
) -> Result<Json<DayLayoutResponse>, StatusCode> {
    let semester = semester_from_path(&semester)?;
    let day = Weekday::from_str(&day).map_err(|_| StatusCode::NOT_FOUND)?;

    let courses = CourseService::get_courses_for_day(&state.db, semester, day)
        .await
        .map_err(db_status)?;

    let blocks = state
        .layout_engine()
        .layout_day(&courses)
        .map_err(schedule_status)?;

    Ok(Json(DayLayoutResponse::new(Some(day.to_string()), &blocks)))
}

/// Guideline compliance of every stored course in a semester
#[utoipa::path(
    get,
    path = "/semesters/{semester}/report",
    params(
        ("semester" = String, Path, description = "Semester name or code")
    ),
    responses(
        (status = 200, description = "Compliance summary", body = GuidelineReportResponse),
        (status = 404, description = "Unknown semester"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Semesters"
)]
pub async fn get_report(
    State(state): State<AppState>,
    Path(semester): Path<String>,
) -> Result<Json<GuidelineReportResponse>, StatusCode> {
    let semester = semester_from_path(&semester)?;

    let courses = CourseService::get_courses_for_semester(&state.db, semester)
        .await
        .map_err(db_status)?;

    let annotated = state
        .matcher()
        .annotate(courses, semester)
        .await
        .map_err(schedule_status)?;

    let report = GuidelineReport::from_annotated(semester, &annotated);
    Ok(Json(GuidelineReportResponse::from(report)))
}
