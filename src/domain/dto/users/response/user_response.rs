use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Role, User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 삭제 정보는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            name,
            email,
            role,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}
