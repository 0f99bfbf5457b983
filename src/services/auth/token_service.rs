//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256 서명 기반의 액세스/리프레시 토큰을 발급하고 검증합니다.
//! 두 스코프는 서로 다른 비밀키와 수명을 사용하며, 검증 시 항상 스코프를 확인합니다.
//!
//! ## 검증 순서
//!
//! 1. 구조 디코딩 (서명 미검증) 실패 → `TokenInvalid`
//! 2. 스코프 불일치 → `TokenScopeMismatch`
//! 3. 스코프 비밀키로 서명 검증 → 실패 시 `TokenInvalid`, 만료 시 `TokenExpired`
//! 4. `exp <= now` → `TokenExpired`
//!
//! 2단계는 스코프 판별에만 쓰이며, 서명 검증을 통과하지 않은 페이로드가
//! 반환되는 경로는 없습니다.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::models::auth::Identity;
use crate::domain::models::token::{TokenPair, TokenPayload, TokenScope};
use crate::errors::{AppError, ErrorContext};

/// JWT 토큰 관리 서비스
///
/// 기동 시 읽은 [`JwtConfig`]를 소유하며, `web::Data`로 공유됩니다.
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidPayload` - 주체 ID가 양수가 아니거나 이메일이 비어 있음
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue_access_token(&self, identity: &Identity) -> Result<String, AppError> {
        self.issue(identity, TokenScope::Access)
    }

    /// 리프레시 토큰 발급
    ///
    /// 리프레시 토큰은 Secure HttpOnly Cookie에 저장하는 것을 권장합니다.
    pub fn issue_refresh_token(&self, identity: &Identity) -> Result<String, AppError> {
        self.issue(identity, TokenScope::Refresh)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 주체 정보(`sub`, `name`, `email`, `role`)만으로 새로 만들기 때문에
    /// 이전 토큰의 스코프나 만료 시간이 새 토큰으로 넘어가지 않습니다.
    ///
    /// ```rust,ignore
    /// let pair = token_service.issue_token_pair(Identity::from(&user))?;
    /// println!("Access token: {}", pair.access_token);
    /// ```
    pub fn issue_token_pair(&self, identity: Identity) -> Result<TokenPair, AppError> {
        let access_token = self.issue_access_token(&identity)?;
        let refresh_token = self.issue_refresh_token(&identity)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            user: identity,
        })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<TokenPayload, AppError> {
        self.verify(token, TokenScope::Access)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenPayload, AppError> {
        self.verify(token, TokenScope::Refresh)
    }

    /// 서명과 만료를 확인하지 않고 페이로드만 디코딩
    ///
    /// 진단 용도 전용이며, 결과를 인증 판단에 사용해서는 안 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DecodeError` - JWT 구조가 아니거나 페이로드 형식이 다름
    pub fn decode_unverified(&self, token: &str) -> Result<TokenPayload, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<TokenPayload>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::DecodeError(e.to_string()))
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// 스킴 이름은 대소문자를 구분하지 않습니다.
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let payload = token_service.verify_access_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.trim().split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
                Ok(token.trim())
            }
            _ => Err(AppError::Unauthenticated(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }

    fn issue(&self, identity: &Identity, scope: TokenScope) -> Result<String, AppError> {
        if identity.id <= 0 {
            return Err(AppError::InvalidPayload(format!("subject must be positive, got {}", identity.id)));
        }
        if identity.email.trim().is_empty() {
            return Err(AppError::InvalidPayload("email must not be empty".to_string()));
        }

        let scope_config = self.config.for_scope(scope);
        let now = Utc::now().timestamp();
        let exp = now.checked_add(scope_config.ttl_seconds).ok_or_else(|| {
            AppError::ConfigurationError(format!(
                "{} token ttl {} overflows expiry",
                scope, scope_config.ttl_seconds
            ))
        })?;

        let payload = TokenPayload {
            sub: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            scope,
            iat: now,
            exp,
        };

        let encoding_key = EncodingKey::from_secret(scope_config.secret.as_bytes());

        encode(&Header::new(Algorithm::HS256), &payload, &encoding_key)
            .with_context(|| format!("{} 토큰 생성 실패", scope))
    }

    fn verify(&self, token: &str, expected: TokenScope) -> Result<TokenPayload, AppError> {
        let unverified = self
            .decode_unverified(token)
            .map_err(|e| AppError::TokenInvalid(e.to_string()))?;

        if unverified.scope != expected {
            return Err(AppError::TokenScopeMismatch {
                expected,
                actual: unverified.scope,
            });
        }

        let scope_config = self.config.for_scope(expected);
        let decoding_key = DecodingKey::from_secret(scope_config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let payload = decode::<TokenPayload>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::TokenInvalid(e.to_string()),
            })?;

        if payload.exp <= Utc::now().timestamp() {
            return Err(AppError::TokenExpired);
        }

        Ok(payload)
    }
}
