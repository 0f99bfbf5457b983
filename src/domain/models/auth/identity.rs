use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Role, User};
use crate::errors::AppError;

/// 검증된 액세스 토큰에서 복원한 인증 주체
///
/// 서버 세션 없이 요청마다 토큰으로부터 새로 만들어지며,
/// 요청 처리 동안 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// 사용자 고유 ID
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 Request Extensions에 넣어 둔 주체를 꺼냅니다.
impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Identity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(AppError::Unauthenticated(
                "인증되지 않은 요청입니다".to_string()
            ))),
        }
    }
}
