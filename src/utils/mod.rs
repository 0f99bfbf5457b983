//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정규화, 기간 파싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{normalize_email, parse_duration_secs};
//!
//! let email = normalize_email("  A@X.com ");
//! let ttl = parse_duration_secs("15m", "JWT_ACCESS_EXPIRES_IN")?;
//! ```

pub mod string_utils;
