use crate::{
    database::{SqliteStore, UserRow},
    models::User,
    services::user_service::{self, CreateOutcome},
};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UsersLookupQuery {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateUserQuery {
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("email" = Option<String>, Query, description = "Exact email to look up"),
        ("name" = Option<String>, Query, description = "Exact name to look up")
    ),
    responses(
        (status = 200, description = "Matching rows as [name, email, profile_picture] tuples"),
        (status = 404, description = "No matching user"),
        (status = 409, description = "No query parameters supplied"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn get_users(
    store: web::Data<SqliteStore>,
    query: web::Query<UsersLookupQuery>,
) -> HttpResponse {
    log::info!(
        "👤 GET /users - email: {:?}, name: {:?}",
        query.email,
        query.name
    );

    if query.email.is_none() && query.name.is_none() {
        log::warn!("⚠️ Error 409 in GET request: An email is required");
        return HttpResponse::Conflict().json(serde_json::json!({
            "message": "An email is required"
        }));
    }

    match user_service::lookup_users(&store, query.email.as_deref(), query.name.as_deref()).await {
        Ok(users) if !users.is_empty() => {
            let data: Vec<UserRow> = users.into_iter().map(User::into_row).collect();
            log::info!("✅ Succesful 200 in GET request: {:?}", data);
            HttpResponse::Ok().json(serde_json::json!({ "data": data }))
        }
        Ok(_) => {
            // The not-found message names the email parameter literally, even
            // when the lookup was keyed by name only.
            let requested = query.email.as_deref().unwrap_or("None");
            log::warn!("⚠️ Error 404 in GET request: {} does not exist", requested);
            HttpResponse::NotFound().json(serde_json::json!({
                "message": format!("{} does not exist", requested)
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to query users: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    params(
        ("name" = String, Query, description = "User name"),
        ("email" = String, Query, description = "User email, unique by convention"),
        ("profile_picture" = Option<String>, Query, description = "Optional profile picture URL")
    ),
    responses(
        (status = 200, description = "New user created"),
        (status = 400, description = "Missing required query parameters"),
        (status = 409, description = "Email already exists"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn create_user(
    store: web::Data<SqliteStore>,
    query: web::Query<CreateUserQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    log::info!("👤 POST /users - email: {}", query.email);

    let email = query.email.clone();
    let user = User {
        name: query.name,
        email: query.email,
        profile_picture: query.profile_picture,
    };

    match user_service::create_user(&store, user).await {
        Ok(CreateOutcome::Created) => {
            log::info!("✅ Succesful 200 in POST request: New user created");
            HttpResponse::Ok().json(serde_json::json!({
                "message": "New user created"
            }))
        }
        Ok(CreateOutcome::DuplicateEmail) => {
            log::warn!("⚠️ Error 409 in POST request: {} already exists", email);
            HttpResponse::Conflict().json(serde_json::json!({
                "message": format!("{} already exists", email)
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to create user: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> SqliteStore {
        let store = SqliteStore::new(dir.path().join("users.db"));
        store.ensure_table().unwrap();
        store
    }

    macro_rules! users_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($store.clone()))
                    .route("/users", web::get().to(get_users))
                    .route("/users", web::post().to(create_user)),
            )
            .await
        };
    }

    #[actix_rt::test]
    async fn post_then_get_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let app = users_app!(store);

        let req = test::TestRequest::post()
            .uri("/users?name=Ann&email=ann@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "New user created");

        let req = test::TestRequest::get()
            .uri("/users?email=ann@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], serde_json::json!([["Ann", "ann@x.com", null]]));
    }

    #[actix_rt::test]
    async fn duplicate_post_yields_409_with_email() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let app = users_app!(store);

        let req = test::TestRequest::post()
            .uri("/users?name=Ann&email=ann@x.com")
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/users?name=Other&email=ann@x.com&profile_picture=p.png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "ann@x.com already exists");
    }

    #[actix_rt::test]
    async fn get_without_params_yields_409() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let app = users_app!(store);

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "An email is required");
    }

    #[actix_rt::test]
    async fn get_unknown_email_yields_404_naming_it() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let app = users_app!(store);

        let req = test::TestRequest::get()
            .uri("/users?email=bob@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "bob@x.com does not exist");
    }

    #[actix_rt::test]
    async fn get_by_name_only_finds_user() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let app = users_app!(store);

        let req = test::TestRequest::post()
            .uri("/users?name=Ann&email=ann@x.com")
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/users?name=Ann").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0][1], "ann@x.com");
    }

    #[actix_rt::test]
    async fn name_only_miss_falls_back_to_literal_none_in_404() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let app = users_app!(store);

        // Lookup keyed by name only: the not-found message still names the
        // (absent) email parameter literally.
        let req = test::TestRequest::get().uri("/users?name=Bob").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "None does not exist");
    }

    #[actix_rt::test]
    async fn post_missing_required_param_is_rejected_before_handler() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let app = users_app!(store);

        // No email: web::Query deserialization fails with 400.
        let req = test::TestRequest::post().uri("/users?name=Ann").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // Nothing was written.
        let req = test::TestRequest::get().uri("/users?name=Ann").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn repeated_gets_return_identical_results() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let app = users_app!(store);

        let req = test::TestRequest::post()
            .uri("/users?name=Ann&email=ann@x.com&profile_picture=a.png")
            .to_request();
        test::call_service(&app, req).await;

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::get()
                .uri("/users?email=ann@x.com")
                .to_request();
            let resp = test::call_service(&app, req).await;
            bodies.push(test::read_body_json::<serde_json::Value, _>(resp).await);
        }
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(
            bodies[0]["data"],
            serde_json::json!([["Ann", "ann@x.com", "a.png"]])
        );
    }
}
