use crate::errors::AppError;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ReportContext, SubmissionForm, WeeklyResponse, WEEKDAYS,
};
use crate::scoring::score;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::Html,
    Form, Json,
};
use chrono::Weekday;
use tracing::debug;

pub async fn index() -> Html<String> {
    Html(render_index(None))
}

/// Form submission: score the metrics, store the rounded sleep score under
/// the submitted weekday, render the populated page. A missing or
/// unrecognized day still scores but leaves the weekly store untouched.
pub async fn analyze(
    State(state): State<AppState>,
    Form(form): Form<SubmissionForm>,
) -> Html<String> {
    let report = score(&form.metrics());
    let day = form.day.as_deref().and_then(parse_weekday);

    let mut weekly = state.weekly.lock().await;
    if let Some(day) = day {
        weekly.set(day, report.sleep_score);
        debug!(
            day = WEEKDAYS[day.num_days_from_monday() as usize],
            score = report.sleep_score,
            "weekly score updated"
        );
    }
    let context = ReportContext {
        weekly: weekly.snapshot(),
        report,
    };
    drop(weekly);

    Html(render_index(Some(&context)))
}

pub async fn get_weekly(State(state): State<AppState>) -> Json<WeeklyResponse> {
    let weekly = state.weekly.lock().await;
    Json(WeeklyResponse {
        days: WEEKDAYS,
        scores: weekly.snapshot(),
    })
}

/// JSON twin of the form endpoint. Stricter about the day field: a present
/// non-empty day that is not a weekday name is rejected instead of being
/// silently dropped.
pub async fn analyze_json(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let day = match request.day.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<Weekday>().map_err(|_| {
            AppError::bad_request("day must be a weekday name such as 'Monday'")
        })?),
    };

    let report = score(&request.metrics());

    let mut weekly = state.weekly.lock().await;
    if let Some(day) = day {
        weekly.set(day, report.sleep_score);
    }
    let snapshot = weekly.snapshot();
    drop(weekly);

    Ok(Json(AnalyzeResponse {
        report,
        weekly: snapshot,
    }))
}

// Empty selects and junk labels both mean "no day"; the form path never
// surfaces an error for them.
fn parse_weekday(raw: &str) -> Option<Weekday> {
    raw.trim().parse::<Weekday>().ok()
}
