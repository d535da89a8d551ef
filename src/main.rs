mod api;
mod database;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let database_path =
        env::var("DATABASE_PATH").unwrap_or_else(|_| "./data/users.db".to_string());

    log::info!("🚀 Starting Users Service...");
    log::info!("📊 Database: {}", database_path);

    if let Some(parent) = std::path::Path::new(&database_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Construct the store explicitly and wire it into the app as shared data
    let store = database::SqliteStore::new(&database_path);
    store
        .ensure_table()
        .expect("Failed to initialize users table");
    let store_data = web::Data::new(store);

    log::info!("✅ SQLite store ready");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Users resource
            .route("/users", web::get().to(api::users::get_users))
            .route("/users", web::post().to(api::users::create_user))
            // Reviews resource (stub)
            .route("/reviews", web::get().to(api::reviews::get_reviews))
            .route("/reviews", web::post().to(api::reviews::post_reviews))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
