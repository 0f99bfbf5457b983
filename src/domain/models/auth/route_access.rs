use crate::domain::entities::users::Role;

/// 라우트가 선언하는 접근 메타데이터
///
/// 인증 미들웨어를 붙이는 스코프/리소스마다 하나씩 선언합니다.
/// - `public`: true면 토큰을 전혀 검사하지 않습니다.
/// - `roles`: None이면 역할과 무관한 라우트, Some이면 허용 역할 집합입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteAccess {
    pub public: bool,
    pub roles: Option<Vec<Role>>,
}

impl RouteAccess {
    /// 인증 없이 접근 가능한 라우트
    pub fn public() -> Self {
        Self {
            public: true,
            roles: None,
        }
    }

    /// 유효한 액세스 토큰만 있으면 되는 라우트
    pub fn authenticated() -> Self {
        Self {
            public: false,
            roles: None,
        }
    }

    /// 특정 역할 중 하나가 필요한 라우트
    pub fn roles(roles: &[Role]) -> Self {
        Self {
            public: false,
            roles: Some(roles.to_vec()),
        }
    }

    /// 관리자 전용 라우트
    pub fn admin_only() -> Self {
        Self::roles(&[Role::Admin])
    }
}

impl Default for RouteAccess {
    fn default() -> Self {
        Self::authenticated()
    }
}
