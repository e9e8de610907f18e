use crate::calendar::{ViewDate, build_calendar};
use crate::dashboard::Tab;
use crate::dialogs::{Dialog, DialogState};
use crate::errors::{AppError, DashboardError};
use crate::login::{self, FieldErrors, LOGIN_REDIRECT, LoginForm, LoginResponse};
use crate::models::{
    AddHabitForm, CalendarQuery, CalendarResponse, CompletionResponse, DashboardSnapshot,
    DayDetail, DialogRequest, Habit, HabitId, HabitSummary, MonthRequest, NewHabit, ReminderForm,
    ShareForm,
};
use crate::state::AppState;
use crate::ui::{render_dashboard, render_login};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Datelike;
use tracing::{debug, info, warn};

const DASHBOARD: &str = "/dashboard";

pub async fn root() -> Redirect {
    Redirect::to("/login")
}

pub async fn login_page() -> Html<String> {
    Html(render_login(&LoginForm::default(), &FieldErrors::default()))
}

pub async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let errors = login::validate(&form);
    if !errors.is_empty() {
        debug!(?errors, "login form rejected");
        return Html(render_login(&form, &errors)).into_response();
    }

    login::simulate_sign_in(&form, state.login_delay).await;
    info!("login accepted");
    Redirect::to(LOGIN_REDIRECT).into_response()
}

pub async fn api_login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Json<LoginResponse> {
    let errors = login::validate(&form);
    if !errors.is_empty() {
        return Json(LoginResponse {
            ok: false,
            redirect: None,
            errors,
        });
    }

    login::simulate_sign_in(&form, state.login_delay).await;
    info!("login accepted");
    Json(LoginResponse {
        ok: true,
        redirect: Some(LOGIN_REDIRECT.to_string()),
        errors,
    })
}

pub async fn dashboard_page(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    Html(render_dashboard(&dashboard))
}

pub async fn month_prev(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_month(&state, "prev").await?;
    Ok(Redirect::to(DASHBOARD))
}

pub async fn month_next(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_month(&state, "next").await?;
    Ok(Redirect::to(DASHBOARD))
}

pub async fn select_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<Redirect, AppError> {
    let tab = Tab::parse(&tab).ok_or_else(|| AppError::not_found(format!("unknown tab '{tab}'")))?;
    state.dashboard.lock().await.set_tab(tab);
    Ok(Redirect::to(DASHBOARD))
}

pub async fn open_dialog(
    State(state): State<AppState>,
    Path(dialog): Path<String>,
) -> Result<Redirect, AppError> {
    apply_dialog(&state, &dialog, true).await?;
    Ok(Redirect::to(DASHBOARD))
}

pub async fn close_dialog(
    State(state): State<AppState>,
    Path(dialog): Path<String>,
) -> Result<Redirect, AppError> {
    apply_dialog(&state, &dialog, false).await?;
    Ok(Redirect::to(DASHBOARD))
}

pub async fn select_day(
    State(state): State<AppState>,
    Path(day): Path<u32>,
) -> Result<Redirect, AppError> {
    apply_day(&state, day).await?;
    Ok(Redirect::to(DASHBOARD))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Form(form): Form<AddHabitForm>,
) -> Result<Redirect, AppError> {
    apply_add_habit(&state, form).await?;
    Ok(Redirect::to(DASHBOARD))
}

pub async fn mark_complete(
    State(state): State<AppState>,
    Path(habit_id): Path<HabitId>,
) -> Result<Redirect, AppError> {
    apply_mark_complete(&state, habit_id).await?;
    Ok(Redirect::to(DASHBOARD))
}

pub async fn save_reminder(
    State(state): State<AppState>,
    Form(form): Form<ReminderForm>,
) -> Result<Redirect, AppError> {
    let plan = state.dashboard.lock().await.save_reminder(&form)?;
    info!(
        habit_id = ?plan.habit_id,
        time = %plan.time.format("%H:%M"),
        repeat = ?plan.repeat,
        "reminder accepted; delivery is not wired"
    );
    Ok(Redirect::to(DASHBOARD))
}

pub async fn confirm_share(
    State(state): State<AppState>,
    Form(form): Form<ShareForm>,
) -> Result<Redirect, AppError> {
    let privacy = state.dashboard.lock().await.confirm_share(&form.privacy)?;
    info!(privacy = privacy.as_str(), "share settings confirmed");
    Ok(Redirect::to(DASHBOARD))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.snapshot())
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let current = state.dashboard.lock().await.view();
    let month = query.month.unwrap_or(current.month);
    if month > 11 {
        return Err(DashboardError::InvalidMonth(month).into());
    }
    let view = ViewDate::new(query.year.unwrap_or(current.year), month);
    if view.first_day().is_none() {
        return Err(DashboardError::YearOutOfRange(view.year).into());
    }

    Ok(Json(CalendarResponse {
        year: view.year,
        month: view.month,
        label: view.label(),
        days_in_month: view.days_in_month(),
        weekday_offset: view.weekday_offset(),
        cells: build_calendar(view.year, view.month),
    }))
}

pub async fn post_month(
    State(state): State<AppState>,
    Json(payload): Json<MonthRequest>,
) -> Result<Json<ViewDate>, AppError> {
    let view = apply_month(&state, payload.direction.trim()).await?;
    Ok(Json(view))
}

pub async fn post_dialog(
    State(state): State<AppState>,
    Json(payload): Json<DialogRequest>,
) -> Result<Json<DialogState>, AppError> {
    let dialogs = apply_dialog(&state, &payload.dialog, payload.open).await?;
    Ok(Json(dialogs))
}

pub async fn post_day(
    State(state): State<AppState>,
    Path(day): Path<u32>,
) -> Result<Json<DayDetail>, AppError> {
    let detail = apply_day(&state, day).await?;
    Ok(Json(detail))
}

pub async fn get_day(State(state): State<AppState>) -> Result<Json<DayDetail>, AppError> {
    let dashboard = state.dashboard.lock().await;
    let detail = dashboard
        .day_detail()
        .ok_or_else(|| AppError::not_found("no day selected"))?;
    Ok(Json(detail))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<HabitSummary>> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.habit_summaries())
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(form): Json<AddHabitForm>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let habit = apply_add_habit(&state, form).await?;
    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn get_completion(
    State(state): State<AppState>,
    Path((habit_id, day)): Path<(HabitId, u32)>,
) -> Result<Json<CompletionResponse>, AppError> {
    let completed = state.dashboard.lock().await.is_completed(habit_id, day)?;
    Ok(Json(CompletionResponse {
        habit_id,
        day,
        completed,
    }))
}

pub async fn post_complete(
    State(state): State<AppState>,
    Path(habit_id): Path<HabitId>,
) -> Result<StatusCode, AppError> {
    apply_mark_complete(&state, habit_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn apply_month(state: &AppState, direction: &str) -> Result<ViewDate, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    let view = match direction {
        "next" => dashboard.next_month(),
        "prev" => dashboard.previous_month(),
        _ => return Err(AppError::bad_request("direction must be 'next' or 'prev'")),
    };
    debug!(year = view.year, month = view.month, "view month changed");
    Ok(view)
}

async fn apply_dialog(state: &AppState, name: &str, open: bool) -> Result<DialogState, AppError> {
    let dialog = Dialog::parse(name)
        .ok_or_else(|| AppError::bad_request(format!("unknown dialog '{name}'")))?;
    let mut dashboard = state.dashboard.lock().await;
    if open {
        dashboard.open_dialog(dialog);
    } else {
        dashboard.close_dialog(dialog);
    }
    debug!(dialog = dialog.as_str(), open, "dialog toggled");
    Ok(dashboard.dialogs().clone())
}

async fn apply_day(state: &AppState, day: u32) -> Result<DayDetail, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    let date = dashboard.select_day(day)?;
    debug!(%date, "day selected");
    dashboard
        .day_detail()
        .ok_or_else(|| AppError::not_found("no day selected"))
}

async fn apply_add_habit(state: &AppState, form: AddHabitForm) -> Result<Habit, AppError> {
    let new = NewHabit::try_from(form)?;
    let mut dashboard = state.dashboard.lock().await;
    let habit = dashboard.add_habit(new);
    info!(id = habit.id, name = %habit.name, "habit added");
    Ok(habit)
}

async fn apply_mark_complete(state: &AppState, habit_id: HabitId) -> Result<(), AppError> {
    let dashboard = state.dashboard.lock().await;
    let day = dashboard.dialogs().selected_day.map(|date| date.day());
    dashboard.mark_complete(habit_id, day).inspect_err(|err| {
        warn!(habit_id, "{err}");
    })?;
    Ok(())
}
