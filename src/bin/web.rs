//! Venue display server: interleaved match schedule as HTML and JSON.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Challonge credentials and the tournament list also come from env
//! (see `Config::from_env`).

use actix_files::Files;
use actix_web::{
    get,
    web::{Data, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::Utc;
use match_display_web::{
    build_schedule, collect_tournaments, load_tournaments, render_schedule_page, ChallongeClient,
    Config, FetchError, ScheduleEntry, StateFilter,
};
use serde::Deserialize;

/// Per-process context: configuration plus the API client built from it.
struct AppContext {
    config: Config,
    api: ChallongeClient,
}

/// The HTML page shows at most this many upcoming matches.
const MAX_DISPLAY_MATCHES: usize = 10;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Query string for the JSON endpoints: ?state=all|open|pending (default open).
#[derive(Deserialize)]
struct ScheduleQuery {
    #[serde(default)]
    state: StateFilter,
}

/// Fetch all configured tournaments and build the schedule for one request.
/// Every request hits the upstream API fresh; nothing is cached.
async fn fetch_schedule(
    ctx: &AppContext,
    filter: StateFilter,
) -> Result<Vec<ScheduleEntry>, FetchError> {
    let results = load_tournaments(&ctx.api, &ctx.config.tournament_ids).await;
    let data = collect_tournaments(results, ctx.config.strict_fetch)?;
    Ok(build_schedule(
        &data,
        filter,
        Utc::now(),
        ctx.config.display_timezone,
        ctx.config.next_match_start,
        ctx.config.match_delay,
    ))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "match-display-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Auto-refreshing venue page: the next few open matches with projected times.
#[get("/")]
async fn index(ctx: Data<AppContext>) -> HttpResponse {
    match fetch_schedule(&ctx, StateFilter::Open).await {
        Ok(entries) => {
            let shown = &entries[..entries.len().min(MAX_DISPLAY_MATCHES)];
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(render_schedule_page(shown))
        }
        Err(e) => HttpResponse::BadGateway()
            .content_type("text/plain; charset=utf-8")
            .body(e.to_string()),
    }
}

/// Full schedule as JSON for polling clients.
#[get("/schedule.json")]
async fn schedule_json(ctx: Data<AppContext>, query: Query<ScheduleQuery>) -> HttpResponse {
    match fetch_schedule(&ctx, query.state).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Only entries whose next opponent is already known (for "up next" tickers).
#[get("/schedule/next.json")]
async fn schedule_next_json(ctx: Data<AppContext>, query: Query<ScheduleQuery>) -> HttpResponse {
    match fetch_schedule(&ctx, query.state).await {
        Ok(mut entries) => {
            entries.retain(|e| !e.next_opponent_label.is_empty());
            HttpResponse::Ok().json(entries)
        }
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Stylesheet baked into the binary so the page works regardless of cwd.
#[get("/styles.css")]
async fn styles() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(include_str!("../../static/styles.css"))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!(
        "Starting venue display at http://{}:{} ({} tournament(s), tz {})",
        bind.0,
        bind.1,
        config.tournament_ids.len(),
        config.display_timezone
    );

    let api = ChallongeClient::new(config.username.as_str(), config.api_key.as_str());
    let ctx = Data::new(AppContext { config, api });

    HttpServer::new(move || {
        App::new()
            .app_data(ctx.clone())
            .service(api_health)
            .service(favicon)
            .service(index)
            .service(schedule_json)
            .service(schedule_next_json)
            .service(styles)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}
