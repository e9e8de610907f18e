use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/login", get(handlers::login_page).post(handlers::login_submit))
        .route("/dashboard", get(handlers::dashboard_page))
        .route("/dashboard/month/prev", post(handlers::month_prev))
        .route("/dashboard/month/next", post(handlers::month_next))
        .route("/dashboard/tab/:tab", post(handlers::select_tab))
        .route("/dashboard/dialogs/:dialog/open", post(handlers::open_dialog))
        .route("/dashboard/dialogs/:dialog/close", post(handlers::close_dialog))
        .route("/dashboard/days/:day", post(handlers::select_day))
        .route("/dashboard/habits", post(handlers::add_habit))
        .route("/dashboard/habits/:id/complete", post(handlers::mark_complete))
        .route("/dashboard/reminders", post(handlers::save_reminder))
        .route("/dashboard/share", post(handlers::confirm_share))
        .route("/api/login", post(handlers::api_login))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/month", post(handlers::post_month))
        .route("/api/dialogs", post(handlers::post_dialog))
        .route("/api/day", get(handlers::get_day))
        .route("/api/days/:day", post(handlers::post_day))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/:id/days/:day", get(handlers::get_completion))
        .route("/api/habits/:id/complete", post(handlers::post_complete))
        .with_state(state)
}
