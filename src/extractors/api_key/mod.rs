/*!
 * API key context extractor
 *
 * Responsibility:
 * - 抽出済み API キー (ApiKeyCtx) を handler に提供する
 * - axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - ApiKeyCtx
 * - ApiKeyCtxExtractor
 */

mod core;
mod types;

pub use self::core::ApiKeyCtxExtractor;
pub use types::ApiKeyCtx;
