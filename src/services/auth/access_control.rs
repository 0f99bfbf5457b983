//! 요청 인증과 역할 인가
//!
//! HTTP 계층과 독립적인 판정 로직입니다. 미들웨어는 헤더와 라우트 메타데이터를
//! 넘기고, 결과(`Ok` 또는 `Unauthenticated`/`Forbidden`)를 응답으로 바꾸기만 합니다.

use crate::domain::models::auth::{Identity, RouteAccess};
use crate::errors::AppError;
use crate::services::auth::token_service::TokenService;

/// 액세스 토큰으로 요청 주체를 확인하는 게이트
pub struct RequestAuthenticator<'a> {
    tokens: &'a TokenService,
}

impl<'a> RequestAuthenticator<'a> {
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// 요청을 인증합니다.
    ///
    /// - 공개 라우트: 토큰을 보지 않고 `Ok(None)`
    /// - 헤더 없음/형식 오류/검증 실패: `Unauthenticated` (세부 사유는 로그에만 남김)
    /// - 성공: 토큰에서 복원한 `Identity`
    pub fn authenticate(
        &self,
        access: &RouteAccess,
        authorization: Option<&str>,
    ) -> Result<Option<Identity>, AppError> {
        if access.public {
            return Ok(None);
        }

        let header = authorization.ok_or_else(|| {
            log::debug!("인증 실패: Authorization 헤더 없음");
            AppError::Unauthenticated("missing bearer token".to_string())
        })?;

        let token = self.tokens.extract_bearer_token(header).map_err(|_| {
            log::debug!("인증 실패: Bearer 형식이 아닌 Authorization 헤더");
            AppError::Unauthenticated("malformed authorization header".to_string())
        })?;

        let payload = self.tokens.verify_access_token(token).map_err(|e| {
            log::warn!("인증 실패: 액세스 토큰 검증 오류 [{}] {}", e.code(), e);
            AppError::Unauthenticated("invalid or expired access token".to_string())
        })?;

        Ok(Some(payload.identity()))
    }
}

/// 라우트에 선언된 역할 집합과 주체의 역할을 비교하는 게이트
pub struct RoleAuthorizer;

impl RoleAuthorizer {
    pub fn authorize(access: &RouteAccess, identity: Option<&Identity>) -> Result<(), AppError> {
        let Some(roles) = access.roles.as_deref() else {
            return Ok(());
        };

        let identity = identity.ok_or_else(|| AppError::Forbidden("must be authenticated".to_string()))?;

        if identity.has_any_role(roles) {
            Ok(())
        } else {
            log::warn!(
                "권한 부족: 사용자 ID {} ({}), 필요 역할: {:?}",
                identity.id,
                identity.role,
                roles
            );
            Err(AppError::Forbidden("insufficient permission".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JwtConfig, JwtScopeConfig};
    use crate::domain::entities::users::Role;

    fn tokens(access_ttl: i64) -> TokenService {
        TokenService::new(JwtConfig {
            access: JwtScopeConfig {
                secret: "access-secret".to_string(),
                ttl_seconds: access_ttl,
            },
            refresh: JwtScopeConfig {
                secret: "refresh-secret".to_string(),
                ttl_seconds: 3_600,
            },
        })
    }

    fn identity(role: Role) -> Identity {
        Identity {
            id: 5,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_public_route_skips_token_inspection() {
        let tokens = tokens(900);
        let result = RequestAuthenticator::new(&tokens)
            .authenticate(&RouteAccess::public(), Some("Bearer garbage"));

        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_missing_or_malformed_header_is_unauthenticated() {
        let tokens = tokens(900);
        let authenticator = RequestAuthenticator::new(&tokens);
        let access = RouteAccess::authenticated();

        assert!(matches!(authenticator.authenticate(&access, None), Err(AppError::Unauthenticated(_))));
        assert!(matches!(
            authenticator.authenticate(&access, Some("Token abc")),
            Err(AppError::Unauthenticated(_))
        ));
    }

    #[test]
    fn test_token_failures_collapse_to_unauthenticated() {
        let tokens = tokens(0);
        let authenticator = RequestAuthenticator::new(&tokens);
        let access = RouteAccess::authenticated();

        let expired = tokens.issue_access_token(&identity(Role::User)).unwrap();
        let refresh = tokens.issue_refresh_token(&identity(Role::User)).unwrap();

        for token in [expired, refresh, "abc.def.ghi".to_string()] {
            let header = format!("Bearer {}", token);
            let result = authenticator.authenticate(&access, Some(&header));
            assert!(matches!(result, Err(AppError::Unauthenticated(_))));
        }
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let tokens = tokens(900);
        let token = tokens.issue_access_token(&identity(Role::Admin)).unwrap();
        let header = format!("Bearer {}", token);

        let identity = RequestAuthenticator::new(&tokens)
            .authenticate(&RouteAccess::admin_only(), Some(&header))
            .unwrap()
            .unwrap();
        assert_eq!(identity.id, 5);
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_role_authorizer() {
        let admin = identity(Role::Admin);
        let user = identity(Role::User);

        assert!(RoleAuthorizer::authorize(&RouteAccess::authenticated(), Some(&user)).is_ok());
        assert!(RoleAuthorizer::authorize(&RouteAccess::admin_only(), Some(&admin)).is_ok());
        assert!(RoleAuthorizer::authorize(&RouteAccess::roles(&[Role::User, Role::Admin]), Some(&user)).is_ok());

        let denied = RoleAuthorizer::authorize(&RouteAccess::admin_only(), Some(&user));
        assert!(matches!(denied, Err(AppError::Forbidden(msg)) if msg == "insufficient permission"));

        let anonymous = RoleAuthorizer::authorize(&RouteAccess::admin_only(), None);
        assert!(matches!(anonymous, Err(AppError::Forbidden(msg)) if msg == "must be authenticated"));
    }
}
