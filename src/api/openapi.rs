//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "In-memory book collection REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::BookPayload,
            crate::models::BookSummary,
            books::BookCreatedResponse,
            books::BookCreatedData,
            books::BookListResponse,
            books::BookListData,
            books::BookResponse,
            books::BookData,
            books::MessageResponse,
            health::HealthResponse,
            crate::error::FailResponse,
        )
    ),
    tags(
        (name = "books", description = "Book collection management"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Create the router serving the OpenAPI document and Swagger UI
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
