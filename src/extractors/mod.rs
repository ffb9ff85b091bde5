/*
 * Responsibility
 * - extractor の公開インターフェース (re-export)
 */
pub mod api_key;

pub use api_key::{ApiKeyCtx, ApiKeyCtxExtractor};
