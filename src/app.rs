use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/today", get(handlers::get_today))
        .route("/api/checkin", post(handlers::check_in))
        .route("/api/checkin/queue", get(handlers::get_queue))
        .route("/api/questions", get(handlers::list_questions).post(handlers::create_question))
        .route(
            "/api/questions/:id",
            put(handlers::update_question).delete(handlers::delete_question),
        )
        .route("/api/questions/:id/series", get(handlers::get_series))
        .route(
            "/api/my-questions",
            get(handlers::list_my_questions).post(handlers::add_my_question),
        )
        .route("/api/my-questions/reorder", post(handlers::reorder_my_questions))
        .route("/api/my-questions/:id", delete(handlers::remove_my_question))
        .route("/api/my-questions/:id/chart", post(handlers::set_chart_type))
        .route("/api/templates", get(handlers::list_templates))
        .route("/api/templates/:id/apply", post(handlers::apply_template))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/heatmap", get(handlers::get_heatmap))
        .route("/api/days/:date", get(handlers::get_day))
        .route("/api/settings", get(handlers::get_settings).put(handlers::put_settings))
        .route("/api/export", get(handlers::export_data))
        .route("/api/import", post(handlers::import_data))
        .with_state(state)
}
