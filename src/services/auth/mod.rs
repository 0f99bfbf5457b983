//! 인증 및 보안 서비스 모듈
//!
//! 패스워드 해싱, 대칭 암호화, JWT 토큰, 로그인/가입/갱신, 그리고 요청 단위의
//! 인증·역할·소유권 판정을 제공합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 스코프별 별도 비밀키
//! - bcrypt 패스워드 해싱 (블로킹 풀에서 실행)
//! - AES-256-GCM 대칭 암호화
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let tokens = Arc::new(TokenService::new(config.jwt.clone()));
//! let auth = AuthService::new(users, tokens.clone(), PasswordHasher::new(&config.password));
//! let pair = auth.sign_in("user@example.com", "password123").await?;
//! ```

pub mod token_service;
pub mod password_service;
pub mod cipher_service;
pub mod auth_service;
pub mod access_control;
pub mod ownership;

pub use token_service::TokenService;
pub use password_service::PasswordHasher;
pub use cipher_service::SymmetricCipher;
pub use auth_service::AuthService;
pub use access_control::{RequestAuthenticator, RoleAuthorizer};
pub use ownership::{OwnedResource, OwnershipGuard, OwnershipGuards, RouteParams};
