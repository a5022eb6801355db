use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_game_engine::{
    error::WordGameError, session::SessionStats, EngineConfig, GameEngine, GuessOutcome,
    RankedWord,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<GameEngine>,
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    game_id: String,
    guess: String,
}

#[derive(Debug, Deserialize)]
struct HintsRequest {
    game_id: String,
    #[serde(default)]
    count: Option<usize>,
}

#[derive(Debug, Serialize)]
struct NewGameResponse {
    game_id: String,
}

#[derive(Debug, Serialize)]
struct HintsResponse {
    hints: Vec<RankedWord>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    model_available: bool,
    vocabulary_size: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_game_server=debug,word_game_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env()?;

    tracing::info!("🚀 Starting Word Game Server");
    tracing::info!("🧠 Model: {}", config.model_path.display());
    tracing::info!("📚 Words: {}", config.words_path.display());
    tracing::info!("🔌 Port: {}", config.port);

    let engine = GameEngine::new(&config).await?;

    let state = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/new-game", get(new_game_handler))
        .route("/score", post(score_handler))
        .route("/hints", post(hints_handler))
        .route("/v1/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("🎮 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: word_game_engine::VERSION.to_string(),
        model_available: state.engine.model_available(),
        vocabulary_size: state.engine.vocabulary().len(),
    })
}

async fn new_game_handler(
    State(state): State<AppState>,
) -> Result<Json<NewGameResponse>, AppError> {
    let session = state.engine.new_game().await?;
    Ok(Json(NewGameResponse { game_id: session.id }))
}

async fn score_handler(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<GuessOutcome>, AppError> {
    tracing::debug!("Score request: {:?}", req);

    let outcome = state.engine.score_guess(&req.game_id, &req.guess).await?;
    Ok(Json(outcome))
}

async fn hints_handler(
    State(state): State<AppState>,
    Json(req): Json<HintsRequest>,
) -> Result<Json<HintsResponse>, AppError> {
    let hints = state.engine.hints(&req.game_id, req.count).await?;
    Ok(Json(HintsResponse {
        hints: hints.into_vec(),
    }))
}

async fn stats_handler(State(state): State<AppState>) -> Result<Json<SessionStats>, AppError> {
    Ok(Json(state.engine.session_stats().await?))
}

// Error handling
struct AppError(WordGameError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            WordGameError::SessionNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Game not found: {}", id))
            }
            e @ WordGameError::EmptyVocabulary => (StatusCode::BAD_REQUEST, e.to_string()),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<WordGameError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
