//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Schedule source: SCHEDULE_CSV (default static/schedule.csv), decoded once
//! at startup and immutable for the lifetime of the process.

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Data, Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use pickleball_scheduler_web::{
    build_matrix, court_count_options, filter_rounds, player_count_options, resolve_name,
    round_count_options, RecordTable, Round, ScheduleError, Selection,
};
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Query: player count (e.g. /api/options/courts?players=8)
#[derive(Deserialize)]
struct PlayersQuery {
    players: u32,
}

/// Query: player and court counts (e.g. /api/options/rounds?players=8&courts=2)
#[derive(Deserialize)]
struct PlayersCourtsQuery {
    players: u32,
    courts: u32,
}

/// Request body for the schedule and matrix endpoints: the selection plus
/// optional display names (index 0 names player 1; blanks fall back to the
/// player number).
#[derive(Deserialize)]
struct SelectionBody {
    players: u32,
    courts: u32,
    rounds: usize,
    #[serde(default)]
    names: Vec<String>,
}

#[derive(Serialize)]
struct MatchView {
    court: String,
    team_1: [String; 2],
    team_2: [String; 2],
}

/// One schedule page: matches in court order, byes in slot order, names
/// already resolved.
#[derive(Serialize)]
struct RoundView {
    round_label: String,
    matches: Vec<MatchView>,
    byes: Vec<String>,
}

/// One row of the fairness audit table.
#[derive(Serialize)]
struct MatrixRowView {
    player: String,
    /// Shared-court rounds with every player (diagonal cell unused, stays 0).
    court_counts: Vec<u32>,
    /// Same-team rounds with every player.
    teammate_counts: Vec<u32>,
    byes: u32,
    not_played_with: usize,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pickleball-scheduler-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Distinct player counts present in the schedule (first dropdown).
#[get("/api/options/players")]
async fn api_player_options(table: Data<RecordTable>) -> HttpResponse {
    HttpResponse::Ok().json(player_count_options(&table))
}

/// Court counts available for a player count (second dropdown).
#[get("/api/options/courts")]
async fn api_court_options(table: Data<RecordTable>, query: Query<PlayersQuery>) -> HttpResponse {
    HttpResponse::Ok().json(court_count_options(&table, query.players))
}

/// Selectable round budgets for a player/court pair (third dropdown).
#[get("/api/options/rounds")]
async fn api_round_options(
    table: Data<RecordTable>,
    query: Query<PlayersCourtsQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(round_count_options(&table, query.players, query.courts))
}

/// Paged schedule for a selection, with player names applied. An empty
/// array is a valid response (no matching rounds), not an error.
#[post("/api/rounds")]
async fn api_rounds(table: Data<RecordTable>, body: Json<SelectionBody>) -> HttpResponse {
    let rounds = match select_rounds(&table, &body) {
        Ok(rounds) => rounds,
        Err(e) => return bad_request(e),
    };
    let views: Vec<RoundView> = rounds
        .iter()
        .map(|round| round_view(round, &body.names))
        .collect();
    HttpResponse::Ok().json(views)
}

/// Fairness audit for a selection: per player, the interaction counts with
/// every other player plus byes and the "never shared a court" tally.
#[post("/api/matrix")]
async fn api_matrix(table: Data<RecordTable>, body: Json<SelectionBody>) -> HttpResponse {
    let rounds = match select_rounds(&table, &body) {
        Ok(rounds) => rounds,
        Err(e) => return bad_request(e),
    };
    let matrix = match build_matrix(&rounds, body.players) {
        Ok(matrix) => matrix,
        Err(e) => return bad_request(e),
    };

    let n = matrix.player_count();
    let rows: Vec<MatrixRowView> = (0..n)
        .map(|i| MatrixRowView {
            player: resolve_name(i as u32 + 1, &body.names),
            court_counts: (0..n).map(|j| matrix.court_count(i, j)).collect(),
            teammate_counts: (0..n).map(|j| matrix.teammate_count(i, j)).collect(),
            byes: matrix.bye_count(i),
            not_played_with: matrix.not_played_with(i),
        })
        .collect();
    HttpResponse::Ok().json(rows)
}

fn select_rounds(table: &RecordTable, body: &SelectionBody) -> Result<Vec<Round>, ScheduleError> {
    let selection = Selection::new(body.players, body.courts, body.rounds)?;
    filter_rounds(table, &selection)
}

fn bad_request(e: ScheduleError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn round_view(round: &Round, names: &[String]) -> RoundView {
    RoundView {
        round_label: round.label.clone(),
        matches: round
            .matches
            .iter()
            .map(|m| MatchView {
                court: m.court.clone(),
                team_1: m.team_1.map(|p| resolve_name(p, names)),
                team_2: m.team_2.map(|p| resolve_name(p, names)),
            })
            .collect(),
        byes: round.byes.iter().map(|&b| resolve_name(b, names)).collect(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_schedule_path() -> String {
    "static/schedule.csv".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let schedule_path = std::env::var("SCHEDULE_CSV").unwrap_or_else(|_| default_schedule_path());

    let table = RecordTable::from_csv_path(&schedule_path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    log::info!(
        "Loaded {} schedule row(s) from {}",
        table.len(),
        schedule_path
    );

    let state = Data::new(table);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_player_options)
            .service(api_court_options)
            .service(api_round_options)
            .service(api_rounds)
            .service(api_matrix)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
