//! Expense Entity

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 지출 엔티티 (`expenses` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: i64,
    /// 소유자 사용자 ID
    pub user_id: i64,
    /// 결제에 사용된 카드 (현금 지출이면 None)
    #[serde(default)]
    pub credit_card_id: Option<i64>,
    pub description: String,
    /// 금액 (최소 화폐 단위)
    pub amount_cents: i64,
    pub created_at: DateTime,
    #[serde(default)]
    pub deleted_at: Option<DateTime>,
}
