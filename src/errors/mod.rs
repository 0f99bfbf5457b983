//! 통합 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)는 서비스, 미들웨어, 핸들러가 공유하는 단일 에러 타입입니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
