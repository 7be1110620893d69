use crate::{
    dtos::layout::{DayLayoutRequest, DayLayoutResponse, WeekLayoutRequest, WeekLayoutResponse},
    routes::{schedule_status, to_occurrences},
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};
use calendar::week::{WeekLayout, meetings_on};
use log::{error, warn};
use models::days::Weekday;
use std::str::FromStr;

/// Lay out one day of courses
#[utoipa::path(
    post,
    path = "/layout/day",
    request_body = DayLayoutRequest,
    responses(
        (status = 200, description = "Blocks sorted by start time", body = DayLayoutResponse),
        (status = 422, description = "Invalid course or meeting data")
    ),
    tag = "Layout"
)]
pub async fn layout_day(
    State(state): State<AppState>,
    Json(request): Json<DayLayoutRequest>,
) -> Result<Json<DayLayoutResponse>, StatusCode> {
    let day = request
        .day
        .as_deref()
        .map(Weekday::from_str)
        .transpose()
        .map_err(|_| {
            warn!("Rejected day {:?}", request.day);
            StatusCode::UNPROCESSABLE_ENTITY
        })?;
    let courses = to_occurrences(request.courses)?;

    let engine = state.layout_engine();
    let blocks = match day {
        Some(day) => engine.layout_meetings(meetings_on(&courses, day)),
        None => engine.layout_day(&courses),
    }
    .map_err(schedule_status)?;

    let day = day.map(|day| day.to_string());
    Ok(Json(DayLayoutResponse::new(day, &blocks)))
}

/// Lay out a full week of courses
#[utoipa::path(
    post,
    path = "/layout/week",
    request_body = WeekLayoutRequest,
    responses(
        (status = 200, description = "One column per weekday, Monday first", body = WeekLayoutResponse),
        (status = 422, description = "Invalid course or meeting data")
    ),
    tag = "Layout"
)]
pub async fn layout_week(
    State(state): State<AppState>,
    Json(request): Json<WeekLayoutRequest>,
) -> Result<Json<WeekLayoutResponse>, StatusCode> {
    let courses = to_occurrences(request.courses)?;
    let engine = state.layout_engine();

    // The week is laid out on the rayon pool, off the async workers
    let response = tokio::task::spawn_blocking(move || {
        WeekLayout::build(&engine, &courses).map(|week| WeekLayoutResponse::from(&week))
    })
    .await
    .map_err(|e| {
        error!("Week layout task failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?
    .map_err(schedule_status)?;

    Ok(Json(response))
}
