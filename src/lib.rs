//! 가계부 API 인증/인가 백엔드
//!
//! 다중 사용자 개인 재무 API의 인증과 인가 계층입니다.
//! 사용자 계정, JWT 액세스/리프레시 토큰, 역할 기반 접근 제어,
//! 그리고 사용자별 리소스(카드, 지출)에 대한 소유권 검사를 제공합니다.
//!
//! # Features
//!
//! - **계정**: 이메일/패스워드 가입과 로그인, 소프트 삭제
//! - **JWT 인증**: 스코프별 비밀키와 수명을 갖는 HS256 토큰
//! - **역할 인가**: 라우트별 공개/인증/역할 선언
//! - **소유권 인가**: 관리자-또는-소유자 규칙을 모든 소유 리소스에 동일하게 적용
//! - **대칭 암호화**: 민감 필드용 AES-GCM
//! - **MongoDB**: 사용자와 리소스 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 엔드포인트 + 접근 정책 (미들웨어)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰, 패스워드, 인증, 인가 판정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 저장소 trait + MongoDB 구현
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use finance_auth_backend::config::AppConfig;
//! use finance_auth_backend::services::AppServices;
//!
//! let config = AppConfig::from_env()?;
//! let services = AppServices::build(&config, users, credit_cards, expenses)?;
//! let pair = services.auth.sign_in("user@example.com", "password123").await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
