mod handlers;
mod state;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::config::ProjectorConfig;
use state::AppState;

pub use handlers::ProjectionResponse;

pub async fn start_server(port: u16, config: ProjectorConfig) -> std::io::Result<()> {
    let data = web::Data::new(AppState::new(config));

    info!("Starting Investment Projector web server on http://localhost:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(data.clone())
            .app_data(handlers::json_config())
            // Static page
            .route("/", web::get().to(handlers::index_html))
            .route("/app.js", web::get().to(handlers::app_js))
            .route("/style.css", web::get().to(handlers::style_css))
            // API routes
            .route("/api/defaults", web::get().to(handlers::defaults))
            .route("/api/projection", web::post().to(handlers::projection))
            .route("/api/projection/export", web::post().to(handlers::export))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
