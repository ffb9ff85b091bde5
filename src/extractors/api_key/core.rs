use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::ApiKeyCtx;

/// Handler で、ApiKeyCtx を受け取るための extractor
/// middleware が ApiKeyCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（middleware 未適用のルート）
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl<S> FromRequestParts<S> for ApiKeyCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyCtx>()
            .cloned()
            .map(ApiKeyCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
