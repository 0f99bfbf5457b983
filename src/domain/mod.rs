//! 도메인 계층
//!
//! 엔티티(영속 문서), 모델(값 객체), DTO(요청/응답)로 나뉩니다.

pub mod entities;
pub mod dto;
pub mod models;
