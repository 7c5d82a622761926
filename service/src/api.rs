use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use tower_http::cors::{Any, CorsLayer};

use baize_engine::{LedgerEngine, MemoryStore, ResetTarget};
use baize_types::api::{
    ErrorBody, PointsRequest, RegisterPlayer, ResetRequest, ResetResponse, TierResponse,
};
use baize_types::ledger::{
    DailyRanking, GameSettlement, MonthlyLeaderboard, PlayerAccount, PlayerId, PointTransaction,
    ProfitRecord, ReceiptCompletion, ReceiptOutcome, TransactionLog,
};
use baize_types::LedgerError;

type Engine = Arc<LedgerEngine<MemoryStore>>;

/// Staff-facing HTTP surface over the ledger engine.
pub struct Api {
    engine: Engine,
}

impl Api {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn router(self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/players", post(register_player))
            .route("/players/:id", get(get_player))
            .route("/players/:id/transactions", get(get_transactions))
            .route("/players/:id/tier", get(get_tier))
            .route("/players/:id/points/earn", post(earn_points))
            .route("/players/:id/points/use", post(use_points))
            .route("/games/settlements", post(record_settlement))
            .route("/rankings/:date", get(get_ranking))
            .route("/rankings/:date/recompute", post(recompute_ranking))
            .route("/rankings/:date/settle", post(settle_day))
            .route("/months/:year/:month", get(get_month))
            .route("/receipts/settle", post(settle_receipt))
            .route("/membership/reset", post(reset_membership))
            .layer(cors)
            .with_state(self.engine)
    }
}

struct ApiError(LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LedgerError::MissingFinalStack { .. }
            | LedgerError::ZeroAmount
            | LedgerError::InvalidName { .. }
            | LedgerError::InvalidMonth { .. } => StatusCode::BAD_REQUEST,
            LedgerError::PlayerNotFound(_) | LedgerError::RankingNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            LedgerError::AlreadyConfirmed { .. }
            | LedgerError::DuplicateReceipt(_)
            | LedgerError::InsufficientBalance { .. } => StatusCode::CONFLICT,
            LedgerError::Conflict { .. } | LedgerError::Unavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

async fn register_player(
    State(engine): State<Engine>,
    Json(body): Json<RegisterPlayer>,
) -> Result<Json<PlayerAccount>, ApiError> {
    Ok(Json(engine.register_player(&body.name).await?))
}

async fn get_player(
    State(engine): State<Engine>,
    Path(id): Path<PlayerId>,
) -> Result<Json<PlayerAccount>, ApiError> {
    Ok(Json(engine.player(&id).await?))
}

async fn get_transactions(
    State(engine): State<Engine>,
    Path(id): Path<PlayerId>,
) -> Result<Json<TransactionLog>, ApiError> {
    Ok(Json(engine.transactions(&id).await?))
}

async fn get_tier(
    State(engine): State<Engine>,
    Path(id): Path<PlayerId>,
) -> Result<Json<TierResponse>, ApiError> {
    let account = engine.player(&id).await?;
    Ok(Json(TierResponse {
        player_id: account.id,
        tier: account.tier,
        total_cp_earned: account.total_cp_earned,
    }))
}

async fn earn_points(
    State(engine): State<Engine>,
    Path(id): Path<PlayerId>,
    Json(body): Json<PointsRequest>,
) -> Result<Json<PointTransaction>, ApiError> {
    Ok(Json(
        engine
            .earn_points(id, body.amount, &body.reason, body.receipt_id)
            .await?,
    ))
}

async fn use_points(
    State(engine): State<Engine>,
    Path(id): Path<PlayerId>,
    Json(body): Json<PointsRequest>,
) -> Result<Json<PointTransaction>, ApiError> {
    Ok(Json(
        engine
            .use_points(id, body.amount, &body.reason, body.receipt_id)
            .await?,
    ))
}

async fn record_settlement(
    State(engine): State<Engine>,
    Json(body): Json<GameSettlement>,
) -> Result<Json<ProfitRecord>, ApiError> {
    Ok(Json(engine.record_settlement(body).await?))
}

async fn get_ranking(
    State(engine): State<Engine>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DailyRanking>, ApiError> {
    match engine.daily_ranking(date).await? {
        Some(ranking) => Ok(Json(ranking)),
        None => Err(ApiError(LedgerError::RankingNotFound { date })),
    }
}

async fn recompute_ranking(
    State(engine): State<Engine>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DailyRanking>, ApiError> {
    Ok(Json(engine.recompute_ranking(date).await?))
}

async fn settle_day(
    State(engine): State<Engine>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DailyRanking>, ApiError> {
    Ok(Json(engine.settle(date).await?))
}

async fn get_month(
    State(engine): State<Engine>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthlyLeaderboard>, ApiError> {
    Ok(Json(engine.monthly_totals(year, month).await?))
}

async fn settle_receipt(
    State(engine): State<Engine>,
    Json(body): Json<ReceiptCompletion>,
) -> Result<Json<ReceiptOutcome>, ApiError> {
    Ok(Json(engine.settle_receipt(body).await?))
}

async fn reset_membership(
    State(engine): State<Engine>,
    Json(body): Json<ResetRequest>,
) -> Result<Json<ResetResponse>, ApiError> {
    let target = match body.player_id {
        Some(player_id) => ResetTarget::Player(player_id),
        None => ResetTarget::All,
    };
    Ok(Json(ResetResponse {
        players_reset: engine.reset_membership(target).await?,
    }))
}
