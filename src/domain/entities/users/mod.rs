//! Users Entity Module
//!
//! 사용자(자격 증명 레코드) 엔티티와 역할 열거형을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{NewUser, Role, User};
//!
//! let user = User::new_local(1, NewUser {
//!     name: "A".to_string(),
//!     email: "a@x.com".to_string(),
//!     password_hash: hashed_password,
//!     role: Role::User,
//! });
//! ```

pub mod user;

pub use user::{NewUser, Role, User};
