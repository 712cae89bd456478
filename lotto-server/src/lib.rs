use serde::Deserialize;
use std::sync::Arc;
use tracing::error;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use lotto_core::{
    BookError, LotteryBook, RecordStore, digits_only, export_file_name, is_acceptable,
    sanitize_number_input,
};
use lotto_types::{
    ApiError, DeleteResponse, DrawForm, PlayerForm, SanitizeRequest, SanitizeResponse,
};

pub mod config;

/// Book shared by every request handler
pub type SharedBook = Arc<LotteryBook<dyn RecordStore>>;

const MAX_BODY_BYTES: u64 = 16 * 1024;
const STORAGE_NOTICE: &str = "Could not access saved data. Please try again.";

#[derive(Deserialize)]
struct DrawQuery {
    #[serde(rename = "gameId")]
    game_id: String,
}

pub fn create_routes(
    book: SharedBook,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let book_filter = warp::any().map({
        let book = book.clone();
        move || book.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let list_players = warp::path!("players")
        .and(warp::get())
        .and(book_filter.clone())
        .and_then(handle_list_players);

    let register_player = warp::path!("players")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(book_filter.clone())
        .and_then(handle_register_player);

    let delete_player = warp::path!("players" / String)
        .and(warp::delete())
        .and(book_filter.clone())
        .and_then(handle_delete_player);

    let list_draws = warp::path!("draws")
        .and(warp::get())
        .and(book_filter.clone())
        .and_then(handle_list_draws);

    let register_draw = warp::path!("draws")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(book_filter.clone())
        .and_then(handle_register_draw);

    // Draw ids are free text, so they travel decoded in the query string
    let delete_draw = warp::path!("draws")
        .and(warp::delete())
        .and(warp::query::<DrawQuery>())
        .and(book_filter.clone())
        .and_then(handle_delete_draw);

    let standings = warp::path!("standings")
        .and(warp::get())
        .and(book_filter.clone())
        .and_then(handle_standings);

    let export = warp::path!("export.csv")
        .and(warp::get())
        .and(book_filter.clone())
        .and_then(handle_export);

    let sanitize = warp::path!("input" / "sanitize")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .map(handle_sanitize);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "DELETE"]);

    health
        .or(list_players)
        .or(register_player)
        .or(delete_player)
        .or(list_draws)
        .or(register_draw)
        .or(delete_draw)
        .or(standings)
        .or(export)
        .or(sanitize)
        .with(cors)
        .with(warp::log("lottery_tracker"))
}

/// Map a book failure to its status code and wire body. Storage details are
/// logged here and replaced by a generic notice.
fn error_reply(err: BookError) -> warp::reply::WithStatus<warp::reply::Json> {
    let (status, body) = match err {
        BookError::Invalid(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Validation { errors },
        ),
        BookError::DuplicateDraw { game_id } => {
            (StatusCode::CONFLICT, ApiError::DuplicateDraw { game_id })
        }
        BookError::Persistence(e) => {
            error!("Storage failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::Persistence {
                    message: STORAGE_NOTICE.to_string(),
                },
            )
        }
        BookError::Export(e) => {
            error!("Export failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::Persistence {
                    message: STORAGE_NOTICE.to_string(),
                },
            )
        }
    };

    warp::reply::with_status(warp::reply::json(&body), status)
}

async fn handle_list_players(book: SharedBook) -> Result<impl warp::Reply, warp::Rejection> {
    match book.players().await {
        Ok(players) => Ok(warp::reply::with_status(
            warp::reply::json(&players),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(e)),
    }
}

async fn handle_register_player(
    form: PlayerForm,
    book: SharedBook,
) -> Result<impl warp::Reply, warp::Rejection> {
    match book.register_player(&form).await {
        Ok(player) => Ok(warp::reply::with_status(
            warp::reply::json(&player),
            StatusCode::CREATED,
        )),
        Err(e) => Ok(error_reply(e)),
    }
}

async fn handle_delete_player(
    id: String,
    book: SharedBook,
) -> Result<impl warp::Reply, warp::Rejection> {
    match book.delete_player(&id).await {
        Ok(removed) => Ok(warp::reply::with_status(
            warp::reply::json(&DeleteResponse { removed }),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(e)),
    }
}

async fn handle_list_draws(book: SharedBook) -> Result<impl warp::Reply, warp::Rejection> {
    match book.draws().await {
        Ok(draws) => Ok(warp::reply::with_status(
            warp::reply::json(&draws),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(e)),
    }
}

async fn handle_register_draw(
    form: DrawForm,
    book: SharedBook,
) -> Result<impl warp::Reply, warp::Rejection> {
    match book.register_draw(&form).await {
        Ok(draw) => Ok(warp::reply::with_status(
            warp::reply::json(&draw),
            StatusCode::CREATED,
        )),
        Err(e) => Ok(error_reply(e)),
    }
}

async fn handle_delete_draw(
    query: DrawQuery,
    book: SharedBook,
) -> Result<impl warp::Reply, warp::Rejection> {
    match book.delete_draw(&query.game_id).await {
        Ok(removed) => Ok(warp::reply::with_status(
            warp::reply::json(&DeleteResponse { removed }),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(e)),
    }
}

async fn handle_standings(book: SharedBook) -> Result<impl warp::Reply, warp::Rejection> {
    match book.standings().await {
        Ok(standings) => Ok(warp::reply::with_status(
            warp::reply::json(&standings),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(e)),
    }
}

async fn handle_export(book: SharedBook) -> Result<warp::reply::Response, warp::Rejection> {
    match book.export_csv().await {
        Ok(csv) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                export_file_name(chrono::Utc::now())
            );
            let reply = warp::reply::with_header(csv, "content-type", "text/csv; charset=utf-8");
            Ok(warp::reply::with_header(reply, "content-disposition", disposition).into_response())
        }
        Err(e) => Ok(error_reply(e).into_response()),
    }
}

fn handle_sanitize(request: SanitizeRequest) -> warp::reply::Json {
    let accepted = is_acceptable(&digits_only(&request.typed));
    let value = sanitize_number_input(&request.current, &request.typed);
    warp::reply::json(&SanitizeResponse { value, accepted })
}
