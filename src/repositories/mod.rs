//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입 대신 trait 객체(`Arc<dyn UserStore>`,
//! `Arc<dyn ResourceOwnerLookup>`)에 의존하며, 운영에서는 MongoDB 구현을,
//! 테스트에서는 [`memory`]의 인메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let user = users.find_by_email("user@example.com", false).await?;
//! ```

pub mod counters;
pub mod users;
pub mod resources;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use crate::errors::AppError;

/// 리소스 ID로 소유자 사용자 ID를 찾는 조회기
///
/// 존재하지 않거나 소프트 삭제된 리소스는 `Ok(None)`입니다.
#[async_trait]
pub trait ResourceOwnerLookup: Send + Sync {
    async fn find_owner_of(&self, resource_id: i64) -> Result<Option<i64>, AppError>;
}
