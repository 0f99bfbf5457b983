//! User Entity Implementation
//!
//! 사용자 엔티티(자격 증명 레코드)의 핵심 구현체입니다.
//! 이메일/패스워드 로컬 인증만 지원하며, 삭제는 `deleted_at` 타임스탬프를 남기는
//! 소프트 삭제로 처리합니다.

use std::fmt;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 역할 비교는 대소문자를 구분하는 열거형 일치로만 이루어집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// 관리자. 소유권 검사를 무조건 통과합니다.
    Admin,
    /// 일반 사용자
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 매핑됩니다. `_id`는 `counters` 컬렉션에서
/// 발급한 정수 시퀀스입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (활성 계정 사이에서 unique)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 사용자 역할
    pub role: Role,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
    /// 소프트 삭제 시간. `(email, deleted_at)` 유니크 인덱스를 위해 None도 null로 저장합니다.
    #[serde(default)]
    pub deleted_at: Option<DateTime>,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// 신규 가입자는 항상 `USER` 역할로 시작합니다.
    pub fn new_local(id: i64, new_user: NewUser) -> Self {
        let now = DateTime::now();

        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 소프트 삭제 여부
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// 저장소에 새 사용자를 만들 때 넘기는 데이터
///
/// ID와 타임스탬프는 저장소가 채웁니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
