use crate::aggregate;
use crate::auth;
use crate::errors::AppError;
use crate::models::{
    DashboardSummary, EntriesResponse, FoodEntry, FoodResponse, GoalUpdate,
    HydrationEntryResponse, HydrationLog, NewFood, NewHydration, NewSupplement, Profile,
    ProfileUpdate, Session, SigninRequest, SignupRequest, SignupResponse, SuccessResponse,
    Supplement, SupplementResponse, SupplementUpdate, SupplementsResponse,
};
use crate::state::AppState;
use crate::storage::{KvStore, persist_store};
use crate::store;
use crate::ui::render_dashboard;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Html,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(render_dashboard())
}

// --- auth ---

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    let account = auth::signup(&mut kv, payload, Utc::now())?;
    persist_store(&state.data_path, &kv).await?;

    info!("account created for {}", account.email);
    Ok(Json(SignupResponse {
        user_id: account.id,
        email: account.email,
    }))
}

pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<Session>, AppError> {
    let mut kv = state.kv.lock().await;
    let session = auth::signin(&mut kv, payload)?;
    persist_store(&state.data_path, &kv).await?;
    Ok(Json(session))
}

// --- nutrition ---

pub async fn get_nutrition(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<EntriesResponse>, AppError> {
    let kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let entries = kv
        .get_as(&KvStore::key("nutrition", &user_id))
        .unwrap_or_default();
    Ok(Json(EntriesResponse { entries }))
}

pub async fn add_food(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<NewFood>,
) -> Result<Json<FoodResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    if payload.name.trim().is_empty() {
        return Err(AppError::malformed("food name is required"));
    }

    let key = KvStore::key("nutrition", &user_id);
    let mut entries: Vec<FoodEntry> = kv.get_as(&key).unwrap_or_default();
    let entry = store::add_food(&mut entries, payload, Utc::now());
    kv.set_as(&key, &entries)?;
    persist_store(&state.data_path, &kv).await?;

    info!("logged food {} for {user_id}", entry.name);
    Ok(Json(FoodResponse { entry }))
}

pub async fn remove_food(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let key = KvStore::key("nutrition", &user_id);
    let mut entries: Vec<FoodEntry> = kv.get_as(&key).unwrap_or_default();
    store::remove_by_id(&mut entries, &entry_id, |entry| &entry.id);
    kv.set_as(&key, &entries)?;
    persist_store(&state.data_path, &kv).await?;

    Ok(Json(SuccessResponse { success: true }))
}

// --- supplements ---

pub async fn get_supplements(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<SupplementsResponse>, AppError> {
    let kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let supplements = kv
        .get_as(&KvStore::key("supplements", &user_id))
        .unwrap_or_default();
    Ok(Json(SupplementsResponse { supplements }))
}

pub async fn add_supplement(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<NewSupplement>,
) -> Result<Json<SupplementResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    if payload.name.trim().is_empty() || payload.dosage.trim().is_empty() {
        return Err(AppError::malformed("supplement name and dosage are required"));
    }

    let key = KvStore::key("supplements", &user_id);
    let mut supplements: Vec<Supplement> = kv.get_as(&key).unwrap_or_default();
    let supplement = store::add_supplement(&mut supplements, payload);
    kv.set_as(&key, &supplements)?;
    persist_store(&state.data_path, &kv).await?;

    info!("added supplement {} for {user_id}", supplement.name);
    Ok(Json(SupplementResponse { supplement }))
}

pub async fn update_supplement(
    State(state): State<AppState>,
    Path((user_id, supplement_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(payload): Json<SupplementUpdate>,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let key = KvStore::key("supplements", &user_id);
    let mut supplements: Vec<Supplement> = kv.get_as(&key).unwrap_or_default();
    // Updating an absent id is a successful no-op.
    store::update_supplement(&mut supplements, &supplement_id, payload, Utc::now());
    kv.set_as(&key, &supplements)?;
    persist_store(&state.data_path, &kv).await?;

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn remove_supplement(
    State(state): State<AppState>,
    Path((user_id, supplement_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let key = KvStore::key("supplements", &user_id);
    let mut supplements: Vec<Supplement> = kv.get_as(&key).unwrap_or_default();
    store::remove_by_id(&mut supplements, &supplement_id, |s| &s.id);
    kv.set_as(&key, &supplements)?;
    persist_store(&state.data_path, &kv).await?;

    Ok(Json(SuccessResponse { success: true }))
}

// --- hydration ---

pub async fn get_hydration(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<HydrationLog>, AppError> {
    let kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let log = kv
        .get_as(&KvStore::key("hydration", &user_id))
        .unwrap_or_default();
    Ok(Json(log))
}

pub async fn add_hydration(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<NewHydration>,
) -> Result<Json<HydrationEntryResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    if !payload.amount.is_finite() || payload.amount <= 0.0 {
        return Err(AppError::malformed("amount must be a positive number of liters"));
    }

    let key = KvStore::key("hydration", &user_id);
    let mut log: HydrationLog = kv.get_as(&key).unwrap_or_default();
    let entry = store::add_hydration(&mut log, payload, Utc::now());
    kv.set_as(&key, &log)?;
    persist_store(&state.data_path, &kv).await?;

    Ok(Json(HydrationEntryResponse { entry }))
}

pub async fn update_hydration_goal(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<GoalUpdate>,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    if !payload.goal.is_finite() || payload.goal <= 0.0 {
        return Err(AppError::malformed("goal must be a positive number of liters"));
    }

    let key = KvStore::key("hydration", &user_id);
    let mut log: HydrationLog = kv.get_as(&key).unwrap_or_default();
    log.goal = payload.goal;
    kv.set_as(&key, &log)?;
    persist_store(&state.data_path, &kv).await?;

    info!("hydration goal for {user_id} set to {}", payload.goal);
    Ok(Json(SuccessResponse { success: true }))
}

pub async fn remove_hydration(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let key = KvStore::key("hydration", &user_id);
    let mut log: HydrationLog = kv.get_as(&key).unwrap_or_default();
    store::remove_by_id(&mut log.entries, &entry_id, |entry| &entry.id);
    kv.set_as(&key, &log)?;
    persist_store(&state.data_path, &kv).await?;

    Ok(Json(SuccessResponse { success: true }))
}

// --- profile ---

pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Profile>, AppError> {
    let kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let profile = kv
        .get_as(&KvStore::key("profile", &user_id))
        .unwrap_or_default();
    Ok(Json(profile))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    let goals = payload.nutrition_goals;
    if goals.calories == 0 || goals.protein == 0 || goals.carbs == 0 || goals.fat == 0 {
        return Err(AppError::malformed("nutrition goals must be positive"));
    }

    let key = KvStore::key("profile", &user_id);
    let mut profile: Profile = kv.get_as(&key).unwrap_or_default();
    profile.nutrition_goals = goals;
    kv.set_as(&key, &profile)?;
    persist_store(&state.data_path, &kv).await?;

    Ok(Json(SuccessResponse { success: true }))
}

// --- dashboard ---

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub date: Option<NaiveDate>,
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<SummaryQuery>,
    headers: HeaderMap,
) -> Result<Json<DashboardSummary>, AppError> {
    let kv = state.kv.lock().await;
    auth::verify_bearer(&headers, &kv)?;

    // Entries are stamped in UTC, so "today" defaults to the UTC date.
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let foods: Vec<FoodEntry> = kv
        .get_as(&KvStore::key("nutrition", &user_id))
        .unwrap_or_default();
    let supplements: Vec<Supplement> = kv
        .get_as(&KvStore::key("supplements", &user_id))
        .unwrap_or_default();
    let hydration: HydrationLog = kv
        .get_as(&KvStore::key("hydration", &user_id))
        .unwrap_or_default();
    let profile: Profile = kv
        .get_as(&KvStore::key("profile", &user_id))
        .unwrap_or_default();

    Ok(Json(aggregate::summary(
        date,
        &foods,
        &supplements,
        &hydration.entries,
        &profile.nutrition_goals,
        hydration.goal,
    )))
}
