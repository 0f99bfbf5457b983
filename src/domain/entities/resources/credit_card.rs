//! Credit Card Entity
//!
//! 소유권 검사 대상이 되는 신용카드 문서입니다. 이 서비스에서는 단건 조회만 제공합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 신용카드 엔티티 (`credit_cards` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    #[serde(rename = "_id")]
    pub id: i64,
    /// 소유자 사용자 ID
    pub user_id: i64,
    /// 카드 별칭
    pub name: String,
    pub created_at: DateTime,
    #[serde(default)]
    pub deleted_at: Option<DateTime>,
}
