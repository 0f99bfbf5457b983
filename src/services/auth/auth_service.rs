//! 인증 서비스 구현
//!
//! 로그인, 회원가입, 토큰 갱신, 현재 사용자 조회를 담당합니다.
//! 모든 조회는 활성 레코드만 대상으로 하므로 소프트 삭제된 계정은
//! 로그인/갱신 대상이 아니며, 같은 이메일로 다시 가입할 수 있습니다.

use std::sync::Arc;
use crate::domain::dto::users::request::SignUpRequest;
use crate::domain::entities::users::{NewUser, Role, User};
use crate::domain::models::auth::Identity;
use crate::domain::models::token::TokenPair;
use crate::errors::AppError;
use crate::repositories::users::UserStore;
use crate::services::auth::password_service::PasswordHasher;
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::{normalize_email, validate_required_string};

/// 인증 서비스
///
/// ```rust,ignore
/// let auth = AuthService::new(users, tokens, PasswordHasher::new(&config.password));
/// let pair = auth.sign_in("user@example.com", "password123").await?;
/// ```
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    passwords: PasswordHasher,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>, passwords: PasswordHasher) -> Self {
        Self {
            users,
            tokens,
            passwords,
        }
    }

    /// 이메일/패스워드 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 해당 이메일의 활성 계정 없음
    /// * `AppError::InvalidCredentials` - 패스워드 불일치
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let email = normalize_email(email);

        let user = self.users
            .find_by_email(&email, false)
            .await?
            .ok_or_else(|| {
                log::warn!("로그인 실패: 존재하지 않는 계정 {}", email);
                AppError::UserNotFound
            })?;

        if !self.passwords.verify(password, &user.password_hash).await? {
            log::warn!("로그인 실패: 패스워드 불일치 (사용자 ID {})", user.id);
            return Err(AppError::InvalidCredentials);
        }

        log::info!("로그인 성공: 사용자 ID {}", user.id);
        self.tokens.issue_token_pair(Identity::from(&user))
    }

    /// 회원가입
    ///
    /// 신규 계정은 항상 `USER` 역할로 생성됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UserAlreadyExists` - 같은 이메일의 활성 계정 존재
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<TokenPair, AppError> {
        let email = normalize_email(&request.email);
        let name = validate_required_string(&request.name, "name")?;

        if self.users.find_by_email(&email, false).await?.is_some() {
            log::warn!("회원가입 실패: 이미 사용 중인 이메일 {}", email);
            return Err(AppError::UserAlreadyExists);
        }

        let password_hash = self.passwords.hash(&request.password).await?;

        let user = self.users
            .create(NewUser {
                name,
                email,
                password_hash,
                role: Role::User,
            })
            .await?;

        log::info!("회원가입 완료: 사용자 ID {}", user.id);
        self.tokens.issue_token_pair(Identity::from(&user))
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// 토큰 검증 에러(`TokenExpired`, `TokenInvalid`, `TokenScopeMismatch`)는 그대로 전달되며,
    /// 새 토큰은 현재 저장된 레코드 기준으로 발급되어 이름/역할 변경이 반영됩니다.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let payload = self.tokens.verify_refresh_token(refresh_token)?;

        let user = self.users
            .find_by_id(payload.sub, false)
            .await?
            .ok_or_else(|| {
                log::warn!("토큰 갱신 실패: 활성 계정 없음 (사용자 ID {})", payload.sub);
                AppError::UserNotFound
            })?;

        log::info!("토큰 갱신 성공: 사용자 ID {}", user.id);
        self.tokens.issue_token_pair(Identity::from(&user))
    }

    /// 현재 인증 주체의 최신 레코드 조회
    pub async fn current_user(&self, identity: &Identity) -> Result<User, AppError> {
        self.users
            .find_by_id(identity.id, false)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JwtConfig, JwtScopeConfig, PasswordConfig};
    use crate::domain::models::token::TokenScope;
    use crate::repositories::memory::InMemoryUserStore;

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(JwtConfig {
            access: JwtScopeConfig {
                secret: "access-secret".to_string(),
                ttl_seconds: 900,
            },
            refresh: JwtScopeConfig {
                secret: "refresh-secret".to_string(),
                ttl_seconds: 3_600,
            },
        }))
    }

    fn service() -> (AuthService, Arc<InMemoryUserStore>, Arc<TokenService>) {
        let users = Arc::new(InMemoryUserStore::new());
        let tokens = token_service();
        let auth = AuthService::new(
            users.clone(),
            tokens.clone(),
            PasswordHasher::new(&PasswordConfig { bcrypt_cost: 4 }),
        );
        (auth, users, tokens)
    }

    fn sign_up_request(email: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.to_string(),
            password: "secret1".to_string(),
            name: "A".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_sign_up_creates_user_role_account() {
        let (auth, users, _) = service();

        let pair = auth.sign_up(sign_up_request(" A@X.com ")).await.unwrap();
        assert_eq!(pair.user.role, Role::User);
        assert_eq!(pair.user.email, "a@x.com");

        let stored = users.find_by_email("a@x.com", false).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "secret1");
    }

    #[actix_web::test]
    async fn test_sign_up_duplicate_email_conflicts() {
        let (auth, _, _) = service();
        auth.sign_up(sign_up_request("a@x.com")).await.unwrap();

        let result = auth.sign_up(sign_up_request("a@x.com")).await;
        assert!(matches!(result, Err(AppError::UserAlreadyExists)));
    }

    #[actix_web::test]
    async fn test_sign_in_distinguishes_unknown_email_and_wrong_password() {
        let (auth, _, _) = service();
        auth.sign_up(sign_up_request("a@x.com")).await.unwrap();

        assert!(matches!(auth.sign_in("b@x.com", "secret1").await, Err(AppError::UserNotFound)));
        assert!(matches!(auth.sign_in("a@x.com", "wrong").await, Err(AppError::InvalidCredentials)));

        let pair = auth.sign_in("a@x.com", "secret1").await.unwrap();
        assert_eq!(pair.user.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_soft_deleted_account_cannot_sign_in_or_refresh() {
        let (auth, users, _) = service();
        let pair = auth.sign_up(sign_up_request("a@x.com")).await.unwrap();
        users.soft_delete(pair.user.id).await.unwrap();

        assert!(matches!(auth.sign_in("a@x.com", "secret1").await, Err(AppError::UserNotFound)));
        assert!(matches!(auth.refresh_token(&pair.refresh_token).await, Err(AppError::UserNotFound)));

        // 삭제된 계정의 이메일로 재가입 가능
        let again = auth.sign_up(sign_up_request("a@x.com")).await.unwrap();
        assert_ne!(again.user.id, pair.user.id);
    }

    #[actix_web::test]
    async fn test_refresh_issues_new_pair() {
        let (auth, _, tokens) = service();
        let pair = auth.sign_up(sign_up_request("a@x.com")).await.unwrap();

        let refreshed = auth.refresh_token(&pair.refresh_token).await.unwrap();
        assert_eq!(refreshed.user.id, pair.user.id);
        assert_eq!(tokens.verify_access_token(&refreshed.access_token).unwrap().scope, TokenScope::Access);
    }

    #[actix_web::test]
    async fn test_refresh_reflects_current_record() {
        let (auth, users, tokens) = service();
        let pair = auth.sign_up(sign_up_request("a@x.com")).await.unwrap();
        assert_eq!(pair.user.role, Role::User);

        users.update(pair.user.id, |user| {
            user.role = Role::Admin;
            user.name = "Renamed".to_string();
        });

        let refreshed = auth.refresh_token(&pair.refresh_token).await.unwrap();
        assert_eq!(refreshed.user.role, Role::Admin);
        assert_eq!(refreshed.user.name, "Renamed");

        let access = tokens.verify_access_token(&refreshed.access_token).unwrap();
        assert_eq!(access.role, Role::Admin);
        assert_eq!(access.name, "Renamed");

        let refresh = tokens.verify_refresh_token(&refreshed.refresh_token).unwrap();
        assert_eq!(refresh.role, Role::Admin);
    }

    #[actix_web::test]
    async fn test_refresh_with_access_token_is_scope_mismatch() {
        let (auth, _, _) = service();
        let pair = auth.sign_up(sign_up_request("a@x.com")).await.unwrap();

        let result = auth.refresh_token(&pair.access_token).await;
        assert!(matches!(result, Err(AppError::TokenScopeMismatch { .. })));
    }

    #[actix_web::test]
    async fn test_current_user_reloads_record() {
        let (auth, _, _) = service();
        let pair = auth.sign_up(sign_up_request("a@x.com")).await.unwrap();

        let user = auth.current_user(&pair.user).await.unwrap();
        assert_eq!(user.id, pair.user.id);
    }
}
