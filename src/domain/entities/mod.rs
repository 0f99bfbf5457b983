//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속성 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (users, credit_cards, expenses)
//! ├── models/       ← 토큰 페이로드, 인증 주체 등 값 객체
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 정수 `_id`를 사용하고, 삭제는 `deleted_at`을 채우는 소프트 삭제입니다.
//! `deleted_at`이 채워진 문서는 일반 조회에서 제외됩니다.

pub mod users;
pub mod resources;
