use crate::chat::{self, THINKING_DELAY};
use crate::errors::AppError;
use crate::insights::{DEFAULT_HISTORY, build_insights};
use crate::models::{
    ChatAccepted, ChatRequest, IndexQuery, InsightsQuery, InsightsResponse, MoodRequest,
    MoodSubmitResponse, ShellResponse, TabRequest, TranscriptResponse,
};
use crate::resources::{ResourcesResponse, directory};
use crate::shell::Tab;
use crate::state::AppState;
use crate::tracker::MoodTracker;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use chrono::Utc;
use tracing::{debug, info};

/// `?tab=` switches the session's active tab before rendering, so following a
/// tab link without JavaScript lands on that view and stays there.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let mut shell = state.shell.lock().await;
    if let Some(tab) = query.tab.as_deref() {
        shell.switch_tab(parse_tab(tab)?);
    }
    let insights = build_insights(shell.entries(), shell.streak(), DEFAULT_HISTORY);
    Ok(Html(render_index(shell.active_tab(), &insights)))
}

pub async fn switch_tab(
    State(state): State<AppState>,
    Json(payload): Json<TabRequest>,
) -> Result<Json<ShellResponse>, AppError> {
    let tab = parse_tab(&payload.tab)?;
    let mut shell = state.shell.lock().await;
    shell.switch_tab(tab);
    debug!(tab = tab.as_str(), "tab switched");
    Ok(Json(ShellResponse {
        active_tab: shell.active_tab(),
    }))
}

pub async fn submit_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<MoodSubmitResponse>, AppError> {
    Ok(Json(apply_mood(&state, payload).await?))
}

pub async fn submit_mood_form(
    State(state): State<AppState>,
    Form(payload): Form<MoodRequest>,
) -> Result<Redirect, AppError> {
    apply_mood(&state, payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_insights(
    State(state): State<AppState>,
    Query(query): Query<InsightsQuery>,
) -> Json<InsightsResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY);
    let shell = state.shell.lock().await;
    Json(build_insights(shell.entries(), shell.streak(), limit))
}

pub async fn get_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let shell = state.shell.lock().await;
    let transcript = shell.transcript();
    Json(TranscriptResponse {
        messages: transcript.messages().to_vec(),
        pending: transcript.pending(),
    })
}

pub async fn send_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> (StatusCode, Json<ChatAccepted>) {
    let message = chat::send(&state, &payload.text)
        .await
        .map(|(message, _reply)| message);
    let status = if message.is_some() {
        StatusCode::ACCEPTED
    } else {
        StatusCode::OK
    };

    (
        status,
        Json(ChatAccepted {
            message,
            reply_after_ms: THINKING_DELAY.as_millis() as u64,
        }),
    )
}

pub async fn get_resources() -> Json<ResourcesResponse> {
    Json(directory())
}

async fn apply_mood(state: &AppState, payload: MoodRequest) -> Result<MoodSubmitResponse, AppError> {
    let mut tracker = MoodTracker::new();
    if let Some(level) = payload.level().map_err(AppError::bad_request)? {
        tracker.select(level);
    }
    if let Some(note) = payload.note {
        tracker.set_note(note);
    }

    let mut shell = state.shell.lock().await;
    let recorded = tracker.submit(Utc::now());
    if let Some(entry) = &recorded {
        shell.record_mood(entry.clone());
        info!(
            mood = entry.mood.value(),
            has_note = entry.note.is_some(),
            streak = shell.streak(),
            "mood recorded"
        );
    }

    Ok(MoodSubmitResponse {
        recorded,
        entry_count: shell.entries().len(),
        streak: shell.streak(),
    })
}

fn parse_tab(value: &str) -> Result<Tab, AppError> {
    value.parse::<Tab>().map_err(AppError::bad_request)
}
