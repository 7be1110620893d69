use crate::{
    dtos::{
        course::parse_semester,
        guideline::{
            AnnotateRequest, AnnotateResponse, AnnotatedCourseResponse, GuidelineReportResponse,
            GuidelineResponse,
        },
    },
    routes::{db_status, schedule_status, to_occurrences},
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};
use calendar::report::GuidelineReport;
use database::services::guideline::GuidelineService;
use log::warn;

/// Mark each course as within or outside the institutional guidelines
#[utoipa::path(
    post,
    path = "/guidelines/annotate",
    request_body = AnnotateRequest,
    responses(
        (status = 200, description = "Courses in request order with their verdicts", body = AnnotateResponse),
        (status = 422, description = "Invalid semester or course data"),
        (status = 500, description = "Guideline lookup failed")
    ),
    tag = "Guidelines"
)]
pub async fn annotate_courses(
    State(state): State<AppState>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, StatusCode> {
    let semester = parse_semester(&request.semester).map_err(|e| {
        warn!("{e}");
        StatusCode::UNPROCESSABLE_ENTITY
    })?;
    let courses = to_occurrences(request.courses)?;

    let annotated = state
        .matcher()
        .annotate(courses, semester)
        .await
        .map_err(schedule_status)?;

    let report = GuidelineReport::from_annotated(semester, &annotated);

    Ok(Json(AnnotateResponse {
        courses: annotated.iter().map(AnnotatedCourseResponse::from).collect(),
        report: GuidelineReportResponse::from(report),
    }))
}

/// List every stored guideline
#[utoipa::path(
    get,
    path = "/guidelines",
    responses(
        (status = 200, description = "Guidelines, most credits first", body = Vec<GuidelineResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Guidelines"
)]
pub async fn get_guidelines(
    State(state): State<AppState>,
) -> Result<Json<Vec<GuidelineResponse>>, StatusCode> {
    let guidelines = GuidelineService::get_guidelines(&state.db)
        .await
        .map_err(db_status)?;

    Ok(Json(guidelines.into_iter().map(GuidelineResponse::from).collect()))
}
