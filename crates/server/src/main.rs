use crate::{
    config::Config,
    doc::ApiDoc,
    routes::{guideline, health, layout, semester},
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use axum::Router;
use database::db::create_connection;
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod doc;
mod dtos;
mod routes;
mod state;
mod utils;

fn app(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(layout::layout_day))
        .routes(routes!(layout::layout_week))
        .routes(routes!(guideline::get_guidelines))
        .routes(routes!(guideline::annotate_courses))
        .routes(routes!(semester::get_day_layout))
        .routes(routes!(semester::get_report))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::from_env()?;
    let db = create_connection(&config.database_url).await?;

    let state = AppState {
        db,
        grid: config.grid,
        match_options: config.match_options,
    };
    info!(
        "Grid starts at {}:00, {} px/min, time windows {}",
        config.grid.start_hour,
        config.grid.pixels_per_minute,
        if config.match_options.enforce_time_window {
            "enforced"
        } else {
            "ignored"
        }
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
