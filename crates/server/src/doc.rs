use utoipa::OpenApi;

/// API Documentation
///
/// Paths are registered by the router as routes are added.
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Health", description = "Service health"),
        (name = "Layout", description = "Week-view layout of submitted courses"),
        (name = "Guidelines", description = "Institutional scheduling guidelines"),
        (name = "Semesters", description = "Views over stored semester schedules"),
    ),
    info(
        title = "Course Schedule API",
        version = "1.0.0",
        description = "Calendar layout and guideline checks for course schedules",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
