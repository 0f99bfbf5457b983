//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 설정과 저장소를 생성자로 주입받으며, `main`에서 한 번 만들어져
//! `web::Data`로 워커 간에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, users::UserService};
//!
//! let user_service = web::Data::new(UserService::new(users.clone()));
//! ```

pub mod users;
pub mod auth;
pub mod registry;

pub use registry::AppServices;
