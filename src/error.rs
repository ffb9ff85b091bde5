/*
 * Responsibility
 * - クレート共通の AuthHeaderError 定義 (欠落 / 形式不正の 2 分類)
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - 呼び出し側が 401 / 400 を分岐できるよう、分類は型で固定する
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthHeaderError {
    /// `Authorization` ヘッダが無い、または値が空文字列
    #[error("no authorization header included")]
    MissingAuthHeader,
    /// ヘッダはあるが `ApiKey <value>` の形になっていない
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

impl IntoResponse for AuthHeaderError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, code) = match self {
            AuthHeaderError::MissingAuthHeader => {
                (StatusCode::UNAUTHORIZED, "MISSING_AUTH_HEADER")
            }
            AuthHeaderError::MalformedAuthHeader => {
                (StatusCode::BAD_REQUEST, "MALFORMED_AUTH_HEADER")
            }
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_maps_to_401() {
        let response = AuthHeaderError::MissingAuthHeader.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn malformed_header_maps_to_400() {
        let response = AuthHeaderError::MalformedAuthHeader.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            AuthHeaderError::MissingAuthHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            AuthHeaderError::MalformedAuthHeader.to_string(),
            "malformed authorization header"
        );
    }
}
