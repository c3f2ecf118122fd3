use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::{Json, WithStatus};

use crate::auth::AuthService;
use game_core::GameTracker;
use game_persistence::WordRepository;
use game_types::{
    ErrorResponse, GameError, MessageResponse, SubmitGuessRequest, SubmitGuessResponse, UserId,
    WordId, WordRequest,
};

type JsonReply = WithStatus<Json>;

const WORD_NOT_FOUND: &str = "Word not found. Please try again!";

fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> JsonReply {
    warp::reply::with_status(warp::reply::json(body), status)
}

fn error_reply(message: impl Into<String>, status: StatusCode) -> JsonReply {
    json_reply(
        &ErrorResponse {
            error: message.into(),
        },
        status,
    )
}

fn message_reply(message: &str) -> JsonReply {
    json_reply(
        &MessageResponse {
            message: message.to_string(),
        },
        StatusCode::OK,
    )
}

fn game_error_reply(err: &GameError) -> JsonReply {
    let status = match err {
        GameError::WordNotFound => StatusCode::NOT_FOUND,
        GameError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_reply(err.to_string(), status)
}

fn internal_error_reply(context: &str, err: anyhow::Error) -> JsonReply {
    tracing::error!("{}: {:#}", context, err);
    error_reply(err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
}

/// Resolve the caller from an `Authorization: Bearer <token>` header.
/// A missing token is 401, a token that fails validation is 403.
pub fn authorize(
    auth_header: Option<String>,
    auth_service: &AuthService,
) -> Result<UserId, JsonReply> {
    let token = auth_header
        .as_deref()
        .and_then(|header| header.trim().strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| error_reply("Authentication required", StatusCode::UNAUTHORIZED))?;

    auth_service.validate_token(token).map_err(|err| {
        tracing::debug!("Rejected request token: {}", err);
        error_reply("Invalid authentication token", StatusCode::FORBIDDEN)
    })
}

/// Decode a JSON body once the caller is authorized
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, JsonReply> {
    serde_json::from_slice(body).map_err(|err| {
        error_reply(
            format!("Invalid request body: {}", err),
            StatusCode::BAD_REQUEST,
        )
    })
}

fn parse_word_id(word_id: &str) -> Result<WordId, JsonReply> {
    Uuid::parse_str(word_id)
        .map_err(|_| error_reply("Invalid word ID format", StatusCode::BAD_REQUEST))
}

pub async fn handle_submit_guess(
    auth_header: Option<String>,
    body: Bytes,
    game_tracker: Arc<GameTracker>,
    auth_service: Arc<AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let user_id = match authorize(auth_header, &auth_service) {
        Ok(user_id) => user_id,
        Err(reply) => return Ok(reply),
    };
    let request: SubmitGuessRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(reply) => return Ok(reply),
    };

    match game_tracker.submit_guess(&request.word, user_id).await {
        Ok(outcome) => Ok(json_reply(
            &SubmitGuessResponse::from(outcome),
            StatusCode::OK,
        )),
        Err(err) => Ok(game_error_reply(&err)),
    }
}

pub async fn handle_reset_tries(
    auth_header: Option<String>,
    game_tracker: Arc<GameTracker>,
    auth_service: Arc<AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(reply) = authorize(auth_header, &auth_service) {
        return Ok(reply);
    }

    match game_tracker.reset_tries().await {
        Ok(_) => Ok(message_reply("All tries reset successfully")),
        Err(err) => Ok(game_error_reply(&err)),
    }
}

pub async fn handle_create_word(
    auth_header: Option<String>,
    body: Bytes,
    word_repository: Arc<WordRepository>,
    auth_service: Arc<AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(reply) = authorize(auth_header, &auth_service) {
        return Ok(reply);
    }
    let request: WordRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(reply) => return Ok(reply),
    };

    match word_repository.create_word(&request.name).await {
        Ok(word) => Ok(json_reply(&word, StatusCode::OK)),
        Err(err) => Ok(internal_error_reply("Failed to create word", err)),
    }
}

pub async fn handle_list_words(
    auth_header: Option<String>,
    word_repository: Arc<WordRepository>,
    auth_service: Arc<AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(reply) = authorize(auth_header, &auth_service) {
        return Ok(reply);
    }

    match word_repository.find_all().await {
        Ok(words) => Ok(json_reply(&words, StatusCode::OK)),
        Err(err) => Ok(internal_error_reply("Failed to fetch words", err)),
    }
}

pub async fn handle_get_word(
    word_id: String,
    auth_header: Option<String>,
    word_repository: Arc<WordRepository>,
    auth_service: Arc<AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(reply) = authorize(auth_header, &auth_service) {
        return Ok(reply);
    }
    let word_id = match parse_word_id(&word_id) {
        Ok(word_id) => word_id,
        Err(reply) => return Ok(reply),
    };

    match word_repository.find_by_id(word_id).await {
        Ok(Some(word)) => Ok(json_reply(&word, StatusCode::OK)),
        Ok(None) => Ok(error_reply(WORD_NOT_FOUND, StatusCode::NOT_FOUND)),
        Err(err) => Ok(internal_error_reply("Failed to fetch word", err)),
    }
}

pub async fn handle_update_word(
    word_id: String,
    auth_header: Option<String>,
    body: Bytes,
    word_repository: Arc<WordRepository>,
    auth_service: Arc<AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(reply) = authorize(auth_header, &auth_service) {
        return Ok(reply);
    }
    let word_id = match parse_word_id(&word_id) {
        Ok(word_id) => word_id,
        Err(reply) => return Ok(reply),
    };
    let request: WordRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(reply) => return Ok(reply),
    };

    match word_repository.update_word(word_id, &request.name).await {
        Ok(Some(word)) => Ok(json_reply(&word, StatusCode::OK)),
        Ok(None) => Ok(error_reply(WORD_NOT_FOUND, StatusCode::NOT_FOUND)),
        Err(err) => Ok(internal_error_reply("Failed to update word", err)),
    }
}

pub async fn handle_delete_word(
    word_id: String,
    auth_header: Option<String>,
    word_repository: Arc<WordRepository>,
    auth_service: Arc<AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Err(reply) = authorize(auth_header, &auth_service) {
        return Ok(reply);
    }
    let word_id = match parse_word_id(&word_id) {
        Ok(word_id) => word_id,
        Err(reply) => return Ok(reply),
    };

    match word_repository.delete_word(word_id).await {
        Ok(true) => Ok(message_reply("Word deleted successfully")),
        Ok(false) => Ok(error_reply(WORD_NOT_FOUND, StatusCode::NOT_FOUND)),
        Err(err) => Ok(internal_error_reply("Failed to delete word", err)),
    }
}
