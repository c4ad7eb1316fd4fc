//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
};

use crate::application::dto::{
    CreateUserDto, RecordTradeDto, RiskRewardCheckDto, RiskRewardCheckRequestDto, TradeDto, UpdateTradeDto,
    UserReportDto, UserStatsSummaryDto,
};
use crate::application::ports::UserDirectoryPort;
use crate::application::use_cases::{
    AdminOverviewUseCase, BuildReportUseCase, CheckRiskRewardUseCase, ManageUsersUseCase,
    QueryTradesUseCase, RecordTradeUseCase, UpdateTradeUseCase,
};
use crate::domain::access::UserProfile;
use crate::domain::shared::{TradeId, UserId};
use crate::domain::trade::{Market, TradeRepository};

use super::error::ApiError;
use super::identity::authenticate;
use super::response::{HealthResponse, MarketResponse, StatsResponse};

/// Application state shared across handlers.
pub struct AppState<R, U>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    /// Use case for journaling trades.
    pub record_trade: Arc<RecordTradeUseCase<R>>,
    /// Use case for editing trades.
    pub update_trade: Arc<UpdateTradeUseCase<R>>,
    /// Use case for reading trades.
    pub query_trades: Arc<QueryTradesUseCase<R>>,
    /// Use case for analytics reports.
    pub build_report: Arc<BuildReportUseCase<R, U>>,
    /// Use case for the admin student list.
    pub admin_overview: Arc<AdminOverviewUseCase<R, U>>,
    /// Use case for adding and removing users.
    pub manage_users: Arc<ManageUsersUseCase<U>>,
    /// Live risk-reward calculator.
    pub check_risk_reward: CheckRiskRewardUseCase,
    /// User directory, for caller identity.
    pub directory: Arc<U>,
    /// Application version.
    pub version: String,
}

impl<R, U> Clone for AppState<R, U>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    fn clone(&self) -> Self {
        Self {
            record_trade: Arc::clone(&self.record_trade),
            update_trade: Arc::clone(&self.update_trade),
            query_trades: Arc::clone(&self.query_trades),
            build_report: Arc::clone(&self.build_report),
            admin_overview: Arc::clone(&self.admin_overview),
            manage_users: Arc::clone(&self.manage_users),
            check_risk_reward: self.check_risk_reward,
            directory: Arc::clone(&self.directory),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R, U>(state: AppState<R, U>) -> Router
where
    R: TradeRepository + 'static,
    U: UserDirectoryPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/markets", get(list_markets))
        .route("/api/v1/risk-reward", post(check_risk_reward))
        .route("/api/v1/trades", post(record_trade).get(list_trades))
        .route("/api/v1/trades/{id}", get(get_trade).put(update_trade))
        .route("/api/v1/stats", get(own_stats))
        .route("/api/v1/admin/users", get(admin_users).post(create_user))
        .route("/api/v1/admin/users/{id}", delete(delete_user))
        .route("/api/v1/admin/users/{id}/stats", get(admin_user_stats))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<R, U>(State(state): State<AppState<R, U>>) -> impl IntoResponse
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Market catalog for the entry form.
async fn list_markets() -> Json<Vec<MarketResponse>> {
    Json(Market::ALL.into_iter().map(MarketResponse::from).collect())
}

/// Live calculator. Open to anonymous callers.
async fn check_risk_reward<R, U>(
    State(state): State<AppState<R, U>>,
    Json(request): Json<RiskRewardCheckRequestDto>,
) -> Json<RiskRewardCheckDto>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    Json(state.check_risk_reward.execute(&request))
}

async fn record_trade<R, U>(
    State(state): State<AppState<R, U>>,
    headers: HeaderMap,
    Json(request): Json<RecordTradeDto>,
) -> Result<(StatusCode, Json<TradeDto>), ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    let trade = state.record_trade.execute(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(trade)))
}

async fn list_trades<R, U>(
    State(state): State<AppState<R, U>>,
    headers: HeaderMap,
) -> Result<Json<Vec<TradeDto>>, ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    Ok(Json(state.query_trades.list_own(&ctx).await?))
}

async fn get_trade<R, U>(
    State(state): State<AppState<R, U>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<TradeDto>, ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    Ok(Json(state.query_trades.get(&ctx, &TradeId::new(id)).await?))
}

async fn update_trade<R, U>(
    State(state): State<AppState<R, U>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<UpdateTradeDto>,
) -> Result<Json<TradeDto>, ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    let trade = state
        .update_trade
        .execute(&ctx, &TradeId::new(id), request)
        .await?;
    Ok(Json(trade))
}

/// Caller's own analytics.
async fn own_stats<R, U>(
    State(state): State<AppState<R, U>>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    let report = state.build_report.for_caller(&ctx).await?;
    Ok(Json(StatsResponse::from(report)))
}

async fn admin_users<R, U>(
    State(state): State<AppState<R, U>>,
    headers: HeaderMap,
) -> Result<Json<Vec<UserStatsSummaryDto>>, ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    Ok(Json(state.admin_overview.execute(&ctx).await?))
}

async fn create_user<R, U>(
    State(state): State<AppState<R, U>>,
    headers: HeaderMap,
    Json(request): Json<CreateUserDto>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    let profile = state.manage_users.create(&ctx, &request).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

async fn delete_user<R, U>(
    State(state): State<AppState<R, U>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    state.manage_users.delete(&ctx, &UserId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_user_stats<R, U>(
    State(state): State<AppState<R, U>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<UserReportDto>, ApiError>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    let ctx = authenticate(state.directory.as_ref(), &headers).await?;
    let view = state.build_report.for_user(&ctx, &UserId::new(id)).await?;
    Ok(Json(view))
}
