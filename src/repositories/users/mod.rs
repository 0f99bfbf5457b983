//! 사용자(자격 증명 레코드) 저장소
//!
//! [`UserStore`](user_repo::UserStore) trait과 MongoDB 구현
//! [`UserRepository`](user_repo::UserRepository)를 제공합니다.

pub mod user_repo;

pub use user_repo::{UserRepository, UserStore};
