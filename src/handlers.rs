use crate::catalog::CategoryKind;
use crate::errors::{AppError, ValidationError};
use crate::models::{
    ActivityDraft, ActivityForm, AwardResponse, Notification, OpenCategoryForm, PortfolioSnapshot,
    RecordActivityRequest,
};
use crate::state::AppState;
use crate::summary::build_snapshot;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use tracing::{debug, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut portfolio = state.portfolio.lock().await;
    let toasts = portfolio.toasts.drain();
    let snapshot = build_snapshot(&portfolio.store);
    Html(render_index(&snapshot, &toasts))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn get_portfolio(State(state): State<AppState>) -> Json<PortfolioSnapshot> {
    let portfolio = state.portfolio.lock().await;
    Json(build_snapshot(&portfolio.store))
}

pub async fn open_category(
    State(state): State<AppState>,
    Form(form): Form<OpenCategoryForm>,
) -> Result<Redirect, AppError> {
    let kind = CategoryKind::from_id(&form.category)
        .ok_or_else(|| AppError::bad_request(format!("unknown category '{}'", form.category)))?;
    state.portfolio.lock().await.store.select_category(kind);
    Ok(Redirect::to("/"))
}

pub async fn close_category(State(state): State<AppState>) -> Redirect {
    state.portfolio.lock().await.store.close_category();
    Redirect::to("/")
}

/// Form submission from the category dialog. Both outcomes land back on the
/// page, which shows the queued toasts and, on error, the still-open dialog.
pub async fn submit_activity(
    State(state): State<AppState>,
    Form(form): Form<ActivityForm>,
) -> Redirect {
    let mut guard = state.portfolio.lock().await;
    let portfolio = &mut *guard;
    portfolio
        .store
        .update_form(form.title, form.points, form.description);
    // The store already queued the toast for either outcome.
    match portfolio.store.submit_form(&mut portfolio.toasts) {
        Ok(award) => debug!(id = award.activity.id, "form award applied"),
        Err(err) => debug!(error = %err, "form kept open for correction"),
    }
    Redirect::to("/")
}

pub async fn record_activity(
    State(state): State<AppState>,
    Json(payload): Json<RecordActivityRequest>,
) -> Result<Json<AwardResponse>, AppError> {
    let draft = to_draft(payload).inspect_err(|err| {
        warn!(error = %err, "rejected activity submission");
    })?;

    let mut notifications: Vec<Notification> = Vec::new();
    let mut portfolio = state.portfolio.lock().await;
    let award = portfolio.store.record_activity(&draft, &mut notifications)?;

    Ok(Json(AwardResponse {
        leveled_up: award.leveled_up_to.is_some(),
        level: award.progress.level,
        progress_to_next_level: award.progress.progress_to_next_level,
        category_total: award.category_total,
        total_points: award.total_points,
        activity: award.activity,
        notifications,
    }))
}

fn to_draft(payload: RecordActivityRequest) -> Result<ActivityDraft, ValidationError> {
    let category = match payload.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(id) => Some(
            CategoryKind::from_id(id)
                .ok_or_else(|| ValidationError::UnknownCategory(id.to_string()))?,
        ),
    };

    Ok(ActivityDraft {
        category,
        title: payload.title,
        points: payload.points.map(|points| points.into_text()).unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
    })
}
