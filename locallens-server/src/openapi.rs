//! OpenAPI documentation configuration
//!
//! Generates the OpenAPI 3 document served at `/openapi.json`.

use utoipa::OpenApi;

use crate::handlers::{AnalyzeResponse, HealthResponse, ReadyResponse};

/// LocalLens API - OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LocalLens API",
        version = "0.1.0",
        description = r#"
## Photo insights from file names

Upload a photo with `POST /analyze` (multipart field `photo`). LocalLens
stores it, derives a short insight from the file name and logs the result.
`GET /history-view` renders every upload, newest first, with the stored image
served from `/uploads/<fileStoredAs>`.
"#,
        license(name = "MIT OR Apache-2.0")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Analysis", description = "Upload and classify photos"),
        (name = "History", description = "Browse past uploads"),
        (name = "Health", description = "Service health and readiness endpoints")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::health::ready,
        crate::handlers::analyze::analyze_handler,
        crate::handlers::history::history_view_handler,
    ),
    components(schemas(AnalyzeResponse, HealthResponse, ReadyResponse))
)]
pub struct ApiDoc;
