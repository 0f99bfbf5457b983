//! 소유 리소스(신용카드, 지출) 저장소
//!
//! 두 컬렉션은 같은 형태(`_id`, `user_id`, `deleted_at`)를 공유하므로
//! [`OwnedEntity`](crate::domain::entities::resources::OwnedEntity)에 대해
//! 제네릭한 하나의 리포지토리로 처리합니다.

pub mod resource_repo;

pub use resource_repo::{CreditCardRepository, ExpenseRepository, ResourceRepository, ResourceStore};
