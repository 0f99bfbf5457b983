//! 사용자 관리 서비스 모듈
//!
//! 인증 이외의 사용자 생명주기(조회, 목록, 소프트 삭제)를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(users.clone());
//! let response = user_service.get_user_by_id(42).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
