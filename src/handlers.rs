use crate::catalog;
use crate::errors::AppError;
use crate::heatmap;
use crate::insights;
use crate::models::{
    ActiveQuestion, AddUserQuestionRequest, AppData, ChartTypeRequest, CreateQuestionRequest,
    DayDetail, HeatmapResponse, InsightsResponse, Question, QuestionSeries, QuestionType,
    ReorderRequest, RoutineTemplate, SaveAnswerRequest, SeriesPoint, Settings, StatsResponse,
    TodayResponse, UpdateQuestionRequest,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::store;
use crate::streaks;
use crate::transfer;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let today = today_date();
    let data = state.data.lock().await;
    Ok(Json(today_summary(today, &data)))
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<SaveAnswerRequest>,
) -> Result<Json<TodayResponse>, AppError> {
    let today = today_date();
    let mut data = state.data.lock().await;
    store::save_answer(&mut data, today, &payload.question_id, payload.value)?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(today_summary(today, &data)))
}

pub async fn get_queue(State(state): State<AppState>) -> Result<Json<Vec<Question>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(store::unanswered_questions(&data, today_date())))
}

pub async fn list_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    let data = state.data.lock().await;
    Json(store::all_questions(&data))
}

pub async fn create_question(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<Json<Question>, AppError> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::bad_request("question text must not be empty"));
    }
    let question = Question {
        id: String::new(),
        text: text.to_string(),
        question_type: payload.question_type,
        category: payload.category,
        scale_min: payload.scale_min,
        scale_max: payload.scale_max,
        emoji: payload.emoji,
        is_custom: true,
    };
    if payload.question_type == QuestionType::Scale {
        let (min, max) = question.scale_bounds();
        if min >= max {
            return Err(AppError::bad_request("scaleMin must be below scaleMax"));
        }
    }

    let mut data = state.data.lock().await;
    let question = store::add_custom_question(&mut data, question);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(question))
}

pub async fn update_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<Json<Question>, AppError> {
    let mut data = state.data.lock().await;
    let updated = store::update_custom_question(&mut data, &question_id, |question| {
        if let Some(text) = payload.text {
            question.text = text;
        }
        if let Some(category) = payload.category {
            question.category = category;
        }
        if payload.scale_min.is_some() {
            question.scale_min = payload.scale_min;
        }
        if payload.scale_max.is_some() {
            question.scale_max = payload.scale_max;
        }
        if payload.emoji.is_some() {
            question.emoji = payload.emoji;
        }
    })?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(updated))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    store::remove_custom_question(&mut data, &question_id)?;
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_my_questions(State(state): State<AppState>) -> Json<Vec<ActiveQuestion>> {
    let data = state.data.lock().await;
    Json(active_list(&data))
}

pub async fn add_my_question(
    State(state): State<AppState>,
    Json(payload): Json<AddUserQuestionRequest>,
) -> Result<Json<Vec<ActiveQuestion>>, AppError> {
    let mut data = state.data.lock().await;
    if store::resolve_question(&data, &payload.question_id).is_none() {
        return Err(AppError::bad_request(format!(
            "unknown question '{}'",
            payload.question_id
        )));
    }
    store::add_user_question(&mut data, &payload.question_id);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(active_list(&data)))
}

pub async fn remove_my_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    store::remove_user_question(&mut data, &question_id);
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reorder_my_questions(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<ActiveQuestion>>, AppError> {
    let mut data = state.data.lock().await;
    store::reorder_user_questions(&mut data, payload.from, payload.to)?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(active_list(&data)))
}

pub async fn set_chart_type(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    Json(payload): Json<ChartTypeRequest>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    store::set_chart_type(&mut data, &question_id, payload.chart_type)?;
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_templates() -> Json<&'static [RoutineTemplate]> {
    Json(catalog::templates())
}

pub async fn apply_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> Result<Json<Vec<ActiveQuestion>>, AppError> {
    let mut data = state.data.lock().await;
    store::apply_template(&mut data, &template_id)?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(active_list(&data)))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let today = today_date();
    let data = state.data.lock().await;
    Ok(Json(StatsResponse {
        current_streak: streaks::current_streak_at(today, &data),
        best_streak: streaks::best_streak(&data),
        total_check_ins: store::total_check_ins(&data),
        thirty_day_rate: insights::thirty_day_rate_at(today, &data),
        completion_rate: insights::completion_rate_at(today, &data),
    }))
}

pub async fn get_insights(
    State(state): State<AppState>,
) -> Result<Json<InsightsResponse>, AppError> {
    let today = today_date();
    let data = state.data.lock().await;
    Ok(Json(InsightsResponse {
        weekly: insights::weekly_insight_at(today, &data),
        trends: insights::trend_insights(&data),
    }))
}

pub async fn get_heatmap(
    State(state): State<AppState>,
) -> Result<Json<HeatmapResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(heatmap::heatmap_at(today_date(), &data)))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DayDetail>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(heatmap::day_detail(date, &data)))
}

pub async fn get_series(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<QuestionSeries>, AppError> {
    let data = state.data.lock().await;
    let question = store::resolve_question(&data, &question_id)
        .ok_or_else(|| AppError::not_found(format!("no question '{question_id}'")))?;
    let series = store::answers_for_question(&data, &question_id);

    let top_words = (question.question_type == QuestionType::FreeText).then(|| {
        let values: Vec<_> = series.iter().map(|(_, value)| value.clone()).collect();
        insights::top_words(&values)
    });

    Ok(Json(QuestionSeries {
        question_id,
        points: series
            .into_iter()
            .map(|(date, value)| SeriesPoint { date, value })
            .collect(),
        top_words,
    }))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let data = state.data.lock().await;
    Json(data.settings.clone())
}

pub async fn put_settings(
    State(state): State<AppState>,
    Json(payload): Json<Settings>,
) -> Result<Json<Settings>, AppError> {
    let mut data = state.data.lock().await;
    data.settings = payload;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.settings.clone()))
}

pub async fn export_data(
    State(state): State<AppState>,
) -> Result<([(header::HeaderName, &'static str); 1], String), AppError> {
    let data = state.data.lock().await;
    let payload = transfer::export_snapshot(&data).map_err(AppError::internal)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], payload))
}

pub async fn import_data(
    State(state): State<AppState>,
    payload: String,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    transfer::import_snapshot(&mut data, &payload)?;
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn today_summary(today: NaiveDate, data: &AppData) -> TodayResponse {
    let total = store::active_questions(data).len();
    let answered = store::day_entry(data, today)
        .map(|entry| entry.answers.len())
        .unwrap_or(0);
    TodayResponse {
        date: today,
        answered,
        total,
        checked_in: total > 0 && answered >= total,
        streak: streaks::current_streak_at(today, data),
        week: heatmap::week_strip_at(today, data),
    }
}

fn active_list(data: &AppData) -> Vec<ActiveQuestion> {
    store::active_questions(data)
        .into_iter()
        .map(|(question, config)| ActiveQuestion { question, config })
        .collect()
}

/// The day key is the host's local calendar date, read once per request.
fn today_date() -> NaiveDate {
    Local::now().date_naive()
}
