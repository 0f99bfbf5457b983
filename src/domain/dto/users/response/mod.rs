//! 사용자 응답 DTO
//!
//! 인증 응답(`access_token`, `refresh_token`, `user`)은
//! [`TokenPair`](crate::domain::models::token::TokenPair)를 그대로 직렬화합니다.

pub mod user_response;

pub use user_response::UserResponse;
