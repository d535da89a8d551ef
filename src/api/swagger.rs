use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Service API",
        version = "1.0.0",
        description = "Minimal sample REST API exposing a users resource backed by a single-table SQLite database.\n\n**Resources:**\n- Users: query-by-field lookup and row insertion\n- Reviews: unimplemented stub\n- Health monitoring"
    ),
    paths(
        // Users
        crate::api::users::get_users,
        crate::api::users::create_user,

        // Reviews (stub)
        crate::api::reviews::get_reviews,
        crate::api::reviews::post_reviews,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User lookup and creation. Lookups are exact-match on email and/or name; creation rejects duplicate emails."),
        (name = "Reviews", description = "Stub resource, always responds 501."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
