//! 토큰 모델
//!
//! JWT 페이로드, 스코프, 발급 결과(토큰 쌍)를 정의합니다.

pub mod token;

pub use token::{TokenPair, TokenPayload, TokenScope};
