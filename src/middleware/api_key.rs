//! `Authorization: ApiKey <key>` の抽出 → ApiKeyCtx を extensions に入れる
//!
//! - ここでやるのは抽出と分類だけ。キーの照合 (どこかのストアと突き合わせる) はしない。
//! - 失敗時は AuthHeaderError をそのまま返す (401 / 400 への変換は error.rs 側の責務)
//! - 空文字列のキー (`ApiKey `) は抽出成功としてそのまま通す

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AuthHeaderError;
use crate::extractors::ApiKeyCtx;
use crate::header::extract_api_key;

/// API キー抽出 middleware を適用する。
///
/// 例：
/// ```ignore
/// let router = Router::new().route("/v1/notes", get(list_notes));
/// let router = middleware::api_key::apply(router);
/// ```
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthHeaderError> {
    let api_key = match extract_api_key(req.headers()) {
        Ok(api_key) => api_key,
        Err(err) => {
            tracing::warn!(
                error = %err,
                "api key extraction failed"
            );
            return Err(err);
        }
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ApiKeyCtx::new(api_key));

    Ok(next.run(req).await)
}
