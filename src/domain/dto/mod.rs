//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//!
//! | 역할 | 모듈 | 비고 |
//! |------|------|------|
//! | HTTP 요청 본문 매핑 | `users::request` | `validator` derive로 입력 검증 |
//! | HTTP 응답 본문 매핑 | `users::response` | 민감 정보 제외 |

pub mod users;
