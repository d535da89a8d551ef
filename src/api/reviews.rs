use actix_web::HttpResponse;

// Stub resource kept for API-surface completeness. No state, no storage.

#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Reviews",
    responses(
        (status = 501, description = "Not implemented")
    )
)]
pub async fn get_reviews() -> HttpResponse {
    log::info!("📝 GET /reviews - not implemented");
    not_implemented()
}

#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    responses(
        (status = 501, description = "Not implemented")
    )
)]
pub async fn post_reviews() -> HttpResponse {
    log::info!("📝 POST /reviews - not implemented");
    not_implemented()
}

fn not_implemented() -> HttpResponse {
    HttpResponse::NotImplemented().json(serde_json::json!({
        "message": "Not implemented"
    }))
}
