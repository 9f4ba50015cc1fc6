//! Single binary web host for the guessing game: commands in, chat messages out.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Dataset: PLAYERS_PATH (players.json), RANKINGS_PATH (club_rankings.csv),
//! TOP_CLUB_CUTOFF (30), RETIRED_MAJORS_THRESHOLD (6), ALWAYS_INCLUDE (comma-separated names).

use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use player_guesser_web::{
    handle,
    host::OUTBOX_RETENTION,
    loader::{load_players, load_rankings},
    logic::{DEFAULT_RETIRED_MAJORS_THRESHOLD, DEFAULT_TOP_CLUB_CUTOFF},
    GameManager, Outbox, PlayerCatalog, PoolConfig,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Cookie session key holding the conversation id for callers that do not send one.
const SESSION_ID_KEY: &str = "game_session_id";

struct AppState {
    manager: GameManager,
    outbox: Arc<Outbox>,
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
    players: usize,
    active_sessions: usize,
}

#[derive(Deserialize)]
struct CommandBody {
    #[serde(default)]
    session_id: Option<String>,
    kind: String,
    #[serde(default)]
    text: String,
    /// Where timeout notices go; defaults to the session id.
    #[serde(default)]
    origin: Option<String>,
}

#[derive(Serialize)]
struct CommandResponse {
    session_id: String,
    messages: Vec<String>,
}

#[derive(Serialize)]
struct OutboxResponse {
    origin: String,
    messages: Vec<String>,
}

#[derive(Deserialize)]
struct OriginPath {
    origin: String,
}

#[get("/api/health")]
async fn api_health(state: Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "player-guesser-web",
        players: state.manager.catalog().len(),
        active_sessions: state.manager.active_sessions(),
    })
}

/// Run one game command for a session (explicit id, or the caller's cookie session).
#[post("/api/commands")]
async fn api_command(state: Data<AppState>, session: Session, body: Json<CommandBody>) -> HttpResponse {
    let body = body.into_inner();
    let session_id = match body.session_id.filter(|s| !s.trim().is_empty()) {
        Some(id) => id,
        None => match cookie_session_id(&session) {
            Ok(id) => id,
            Err(e) => {
                log::error!("Cookie session error: {}", e);
                return HttpResponse::InternalServerError().json(serde_json::json!({ "error": "session error" }));
            }
        },
    };
    let origin = body.origin.unwrap_or_else(|| session_id.clone());
    let messages = handle(&state.manager, &session_id, &origin, &body.kind, &body.text);
    HttpResponse::Ok().json(CommandResponse {
        session_id,
        messages,
    })
}

/// Collect messages pushed to an origin outside a command (timeouts).
#[get("/api/outbox/{origin}")]
async fn api_outbox(state: Data<AppState>, path: Path<OriginPath>) -> HttpResponse {
    let origin = path.into_inner().origin;
    let messages = state.outbox.drain(&origin);
    HttpResponse::Ok().json(OutboxResponse { origin, messages })
}

fn cookie_session_id(session: &Session) -> Result<String, actix_web::Error> {
    if let Some(id) = session.get::<String>(SESSION_ID_KEY)? {
        return Ok(id);
    }
    let id = Uuid::new_v4().to_string();
    session.insert(SESSION_ID_KEY, &id)?;
    Ok(id)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_players_path() -> String {
    "players.json".to_string()
}

fn default_rankings_path() -> String {
    "club_rankings.csv".to_string()
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Load the catalog; a missing or broken file leaves it unloaded so `start` reports it.
fn load_catalog(path: &str) -> PlayerCatalog {
    match load_players(path) {
        Ok(players) => {
            let catalog = PlayerCatalog::from_records(players);
            if catalog.is_loaded() {
                log::info!("Loaded {} player(s) from {}", catalog.len(), path);
            } else {
                log::error!("No usable players in {}; games cannot start", path);
            }
            catalog
        }
        Err(e) => {
            log::error!("Could not load players from {}: {}", path, e);
            PlayerCatalog::new()
        }
    }
}

fn load_pool_config(path: &str) -> PoolConfig {
    let cutoff = env_or("TOP_CLUB_CUTOFF", DEFAULT_TOP_CLUB_CUTOFF);
    let threshold = env_or("RETIRED_MAJORS_THRESHOLD", DEFAULT_RETIRED_MAJORS_THRESHOLD);
    let rankings = load_rankings(path).unwrap_or_else(|e| {
        log::warn!("No club rankings from {} ({}); normal pool uses the allowlist only", path, e);
        Vec::new()
    });
    let always_include = std::env::var("ALWAYS_INCLUDE").unwrap_or_default();
    let config = PoolConfig::default()
        .with_rankings(rankings, cutoff)
        .with_always_include(always_include.split(',').map(str::trim).filter(|s| !s.is_empty()))
        .with_retired_majors_threshold(threshold);
    log::info!(
        "{} top club(s) (rank <= {}), {} always-included player(s)",
        config.top_clubs.len(),
        cutoff,
        config.always_include.len()
    );
    config
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = env_or("PORT", default_port());
    let players_path = std::env::var("PLAYERS_PATH").unwrap_or_else(|_| default_players_path());
    let rankings_path = std::env::var("RANKINGS_PATH").unwrap_or_else(|_| default_rankings_path());

    let outbox = Arc::new(Outbox::new());
    let manager = GameManager::new(
        load_catalog(&players_path),
        load_pool_config(&rankings_path),
        outbox.clone(),
    );

    // Background task: every 30 minutes, forget timeout notices nobody collected for 24h
    let outbox_cleanup = outbox.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let removed = outbox_cleanup.prune_stale(OUTBOX_RETENTION);
            if removed > 0 {
                log::info!("Cleaned up {} uncollected outbox(es) (no pushes for 24h)", removed);
            }
        }
    });

    let state = Data::new(AppState {
        manager: manager.clone(),
        outbox,
    });

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let secret_key = Key::generate();
    let result = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .service(api_health)
            .service(api_command)
            .service(api_outbox)
    })
    .bind(bind)?
    .run()
    .await;

    manager.shutdown();
    result
}
