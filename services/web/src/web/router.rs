//! services/web/src/web/router.rs
//!
//! Assembles every route of the site into one `Router`.

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::web::{admin, auth, middleware::require_admin, rest, site, state::AppState};
use crate::web::rest::ApiDoc;

pub fn router(app_state: Arc<AppState>) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/", get(site::index))
        .route("/libros", get(site::books))
        .route("/nosotros", get(site::about))
        .route("/chat", get(site::chat))
        .route("/obtener_mensajes", get(rest::list_messages_handler))
        .route("/enviar_mensaje", post(rest::send_message_handler))
        .route("/admin/login", get(auth::login_page).post(auth::login_handler))
        .route("/admin/logout", get(auth::logout_handler))
        .route("/admin/cerrar", get(auth::logout_handler));

    // Admin routes (session flag required)
    let admin_routes = Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/", get(admin::index))
        .route("/admin/libros", get(admin::books))
        .route("/admin/libros/guardar", post(admin::save_book))
        .route("/admin/libros/eliminar/{id}", post(admin::delete_book))
        .route("/admin/chat", get(admin::chat))
        .route("/admin/trabajos", get(admin::jobs))
        .route("/admin/videos", get(admin::videos))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_admin,
        ));

    let site_router = Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .nest_service("/static", ServeDir::new(&app_state.config.static_dir))
        .layer(DefaultBodyLimit::max(app_state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Merge the site with the Swagger UI router for the chat API docs.
    Router::new()
        .merge(site_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
