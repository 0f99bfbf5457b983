//! # Domain Models Module
//!
//! 영속되지 않는 도메인 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: MongoDB에 직접 저장되는 객체
//! - **정체성**: 고유한 정수 ID를 가짐
//! - **예시**: `User`, `CreditCard`, `Expense`
//!
//! ### Models (`./`)
//! - **요청 단위**: 요청마다 계산되고 버려지는 값
//! - **불변성**: 생성 후 변경되지 않음
//! - **예시**: `Identity`, `TokenPayload`, `TokenPair`, `RouteAccess`

pub mod auth;
pub mod token;
