/*
 * Responsibility
 * - Handler から見える「抽出済み API キー」の型
 * - middleware が抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - キーが実在するかの照合はこのクレートの外の責務
 * - 空文字列のキーも保持しうる (`ApiKey ` の形を成功として扱うため)
 */

/// 抽出に成功したリクエストに付与されるコンテキスト
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub api_key: String,
}

impl ApiKeyCtx {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}
