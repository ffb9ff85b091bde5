/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - 各モジュールが pub fn apply(router) -> Router を持つ
 */
pub mod api_key;
