//! JWT 토큰 페이로드와 발급 결과 구조체
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)에 사용자 속성과 스코프를 더한
//! 페이로드, 그리고 액세스/리프레시 토큰을 묶은 발급 결과를 정의합니다.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::Role;
use crate::domain::models::auth::identity::Identity;

/// 토큰 스코프
///
/// 액세스 토큰을 리프레시 용도로, 또는 그 반대로 재사용하는 것을 막는 표식입니다.
/// 검증 시 항상 기대 스코프와 비교합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenScope {
    Access,
    Refresh,
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenScope::Access => f.write_str("ACCESS"),
            TokenScope::Refresh => f.write_str("REFRESH"),
        }
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 사용자 ID
/// - `scope`: ACCESS 또는 REFRESH
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp, 초)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// 토큰의 주체 (사용자 ID)
    pub sub: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub scope: TokenScope,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl TokenPayload {
    /// 토큰에 담긴 인증 주체를 복원합니다.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.sub,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// 토큰 발급 결과
///
/// 로그인, 회원가입, 토큰 갱신 응답 본문 그대로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 토큰 주체
    pub user: Identity,
}
