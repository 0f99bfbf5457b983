//! 사용자가 소유하는 리소스 엔티티
//!
//! 신용카드와 지출은 모두 `user_id` 필드로 소유자를 가리키며,
//! 소유권 가드가 이 필드를 호출자 ID와 비교합니다.

pub mod credit_card;
pub mod expense;

pub use credit_card::CreditCard;
pub use expense::Expense;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// 소유자가 있는 리소스 문서
///
/// 저장소는 이 trait만으로 컬렉션 이름과 소유자 ID를 알아냅니다.
pub trait OwnedEntity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;
    /// 로그와 에러 메시지에 쓰이는 리소스 이름
    const LABEL: &'static str;

    fn id(&self) -> i64;
    fn owner_id(&self) -> i64;
    fn is_deleted(&self) -> bool;
}

impl OwnedEntity for CreditCard {
    const COLLECTION: &'static str = "credit_cards";
    const LABEL: &'static str = "credit card";

    fn id(&self) -> i64 {
        self.id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl OwnedEntity for Expense {
    const COLLECTION: &'static str = "expenses";
    const LABEL: &'static str = "expense";

    fn id(&self) -> i64 {
        self.id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
