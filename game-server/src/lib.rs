use std::sync::Arc;
use warp::Filter;

use crate::auth::AuthService;
use game_core::GameTracker;
use game_persistence::WordRepository;

pub mod auth;
pub mod config;
pub mod handlers;

const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn create_routes(
    game_tracker: Arc<GameTracker>,
    word_repository: Arc<WordRepository>,
    auth_service: Arc<AuthService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let game_tracker_filter = warp::any().map({
        let game_tracker = game_tracker.clone();
        move || game_tracker.clone()
    });

    let word_repository_filter = warp::any().map({
        let word_repository = word_repository.clone();
        move || word_repository.clone()
    });

    let auth_filter = warp::any().map({
        let auth_service = auth_service.clone();
        move || auth_service.clone()
    });

    let auth_header = warp::header::optional::<String>("authorization");

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Guess submission
    let submit_guess = warp::path!("api" / "game")
        .and(warp::post())
        .and(auth_header.clone())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(game_tracker_filter.clone())
        .and(auth_filter.clone())
        .and_then(handlers::handle_submit_guess);

    let reset_tries = warp::path!("api" / "game" / "tries")
        .and(warp::delete())
        .and(auth_header.clone())
        .and(game_tracker_filter.clone())
        .and(auth_filter.clone())
        .and_then(handlers::handle_reset_tries);

    // Word management
    let create_word = warp::path!("api" / "words")
        .and(warp::post())
        .and(auth_header.clone())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(word_repository_filter.clone())
        .and(auth_filter.clone())
        .and_then(handlers::handle_create_word);

    let list_words = warp::path!("api" / "words")
        .and(warp::get())
        .and(auth_header.clone())
        .and(word_repository_filter.clone())
        .and(auth_filter.clone())
        .and_then(handlers::handle_list_words);

    let get_word = warp::path!("api" / "words" / String)
        .and(warp::get())
        .and(auth_header.clone())
        .and(word_repository_filter.clone())
        .and(auth_filter.clone())
        .and_then(handlers::handle_get_word);

    let update_word = warp::path!("api" / "words" / String)
        .and(warp::put())
        .and(auth_header.clone())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(word_repository_filter.clone())
        .and(auth_filter.clone())
        .and_then(handlers::handle_update_word);

    let delete_word = warp::path!("api" / "words" / String)
        .and(warp::delete())
        .and(auth_header.clone())
        .and(word_repository_filter.clone())
        .and(auth_filter.clone())
        .and_then(handlers::handle_delete_word);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type", "authorization"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    health
        .or(submit_guess)
        .or(reset_tries)
        .or(create_word)
        .or(list_words)
        .or(get_word)
        .or(update_word)
        .or(delete_word)
        .with(cors)
        .with(warp::log("word_game"))
}
