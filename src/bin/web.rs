//! Stateless bracket renderer: POST a tournament snapshot, get rounds, links, and paths back as JSON.
//! Run with: cargo run --bin bracket-web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Nothing is stored between requests; every call rebuilds from the posted snapshot.

use actix_web::{get, post, App, HttpResponse, HttpServer, Responder};
use bracket_engine::{trace_team_path, BracketView, SnapshotError, TeamId, Tournament};
use serde::Deserialize;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TraceBody {
    tournament: Tournament,
    team_id: TeamId,
}

/// Bind address, read from the environment.
#[derive(Clone, Debug, Eq, PartialEq)]
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    /// Missing host or an unparsable port falls back to the defaults.
    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        Self {
            host: host
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(default_host),
            port: port
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or_else(default_port),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-web",
    })
}

/// Build the bracket view (rounds, completion, champion) for a posted snapshot.
#[post("/api/bracket")]
async fn api_bracket(body: String) -> HttpResponse {
    let tournament = match Tournament::from_json(&body) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("rejected bracket snapshot: {}", e);
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
        }
    };
    if !tournament.format.has_bracket_engine() {
        log::info!(
            "tournament {} is labelled {}; rendering as single elimination",
            tournament.id,
            tournament.format.label()
        );
    }
    HttpResponse::Ok().json(BracketView::from_tournament(&tournament))
}

/// Trace one team's path through the posted snapshot's bracket.
#[post("/api/bracket/trace")]
async fn api_trace(body: String) -> HttpResponse {
    let body = match parse_trace_body(&body) {
        Ok(b) => b,
        Err(e) => {
            log::warn!("rejected trace snapshot: {}", e);
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
        }
    };
    let rounds = body.tournament.bracket();
    HttpResponse::Ok().json(trace_team_path(&rounds, body.team_id))
}

fn parse_trace_body(body: &str) -> Result<TraceBody, SnapshotError> {
    let parsed: TraceBody =
        serde_json::from_str(body).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
    parsed.tournament.check_match_ids()?;
    Ok(parsed)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(api_bracket)
            .service(api_trace)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
