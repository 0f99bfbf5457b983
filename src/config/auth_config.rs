//! # Authentication Configuration Module
//!
//! JWT 서명 비밀키와 토큰 수명, 대칭 암호화 키를 관리하는 모듈입니다.
//! 모든 값은 기동 시 한 번 읽히며, 필수 비밀값이 없으면 개발/테스트 환경을 제외하고
//! `ConfigurationError`로 기동이 중단됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_ACCESS_SECRET="access-secret"
//! export JWT_ACCESS_EXPIRES_IN="15m"     # 기본값 15m
//! export JWT_REFRESH_SECRET="refresh-secret"
//! export JWT_REFRESH_EXPIRES_IN="7d"     # 기본값 7d
//!
//! export CIPHER_SECRET="cipher-secret"
//! export CIPHER_IV_LENGTH="12"           # 12 또는 16
//! ```

use std::fmt;
use crate::config::data_config::Environment;
use crate::config::EnvLookup;
use crate::domain::models::token::TokenScope;
use crate::errors::AppError;
use crate::utils::string_utils::parse_duration_secs;

const DEFAULT_ACCESS_TTL: &str = "15m";
const DEFAULT_REFRESH_TTL: &str = "7d";
const DEFAULT_IV_LENGTH: usize = 12;
/// 토큰 수명 상한 (10년)
const MAX_TOKEN_TTL_SECS: i64 = 10 * 365 * 86_400;

/// 필수 비밀값을 읽습니다.
///
/// 개발/테스트 환경에서만 누락 시 경고와 함께 개발용 값을 사용합니다.
fn required_secret(
    lookup: &EnvLookup,
    key: &str,
    env: Environment,
    dev_default: &str,
) -> Result<String, AppError> {
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(secret) => Ok(secret),
        None if env.allows_insecure_defaults() => {
            log::warn!("⚠️ {} 미설정. 개발용 기본값을 사용합니다 ({:?} 환경)", key, env);
            Ok(dev_default.to_string())
        }
        None => Err(AppError::ConfigurationError(format!("{} must be set", key))),
    }
}

/// 스코프 하나에 대한 서명 설정
#[derive(Clone)]
pub struct JwtScopeConfig {
    /// HMAC-SHA256 비밀키
    pub secret: String,
    /// 토큰 수명 (초). 0이면 발급 즉시 만료됩니다.
    pub ttl_seconds: i64,
}

impl fmt::Debug for JwtScopeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtScopeConfig")
            .field("secret", &"***")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// JWT 토큰 설정
///
/// 액세스/리프레시 스코프는 서로 다른 비밀키를 사용합니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub access: JwtScopeConfig,
    pub refresh: JwtScopeConfig,
}

/// 토큰 수명을 읽습니다. 상한을 넘는 값은 설정 오류입니다.
fn token_ttl(lookup: &EnvLookup, key: &str, default: &str) -> Result<i64, AppError> {
    let ttl = parse_duration_secs(&lookup(key).unwrap_or_else(|| default.to_string()), key)?;

    if ttl > MAX_TOKEN_TTL_SECS {
        return Err(AppError::ConfigurationError(format!(
            "{} must be at most {} seconds, got {}",
            key, MAX_TOKEN_TTL_SECS, ttl
        )));
    }

    Ok(ttl)
}

impl JwtConfig {
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 비밀키 누락, 잘못된 수명,
    ///   또는 운영 계열 환경에서 두 스코프의 비밀키가 같은 경우
    pub fn from_lookup(lookup: &EnvLookup, env: Environment) -> Result<Self, AppError> {
        let access = JwtScopeConfig {
            secret: required_secret(lookup, "JWT_ACCESS_SECRET", env, "dev-access-secret-change-me")?,
            ttl_seconds: token_ttl(lookup, "JWT_ACCESS_EXPIRES_IN", DEFAULT_ACCESS_TTL)?,
        };

        let refresh = JwtScopeConfig {
            secret: required_secret(lookup, "JWT_REFRESH_SECRET", env, "dev-refresh-secret-change-me")?,
            ttl_seconds: token_ttl(lookup, "JWT_REFRESH_EXPIRES_IN", DEFAULT_REFRESH_TTL)?,
        };

        if access.secret == refresh.secret {
            if !env.allows_insecure_defaults() {
                return Err(AppError::ConfigurationError(
                    "JWT_ACCESS_SECRET and JWT_REFRESH_SECRET must differ".to_string(),
                ));
            }
            log::warn!("⚠️ 액세스/리프레시 토큰 비밀키가 같습니다 ({:?} 환경)", env);
        }

        Ok(Self { access, refresh })
    }

    /// 스코프에 해당하는 서명 설정
    pub fn for_scope(&self, scope: TokenScope) -> &JwtScopeConfig {
        match scope {
            TokenScope::Access => &self.access,
            TokenScope::Refresh => &self.refresh,
        }
    }
}

/// 대칭 암호화 설정
#[derive(Clone)]
pub struct CipherConfig {
    /// 키 유도에 쓰이는 비밀값
    pub secret: String,
    /// IV(nonce) 길이 (바이트). 12 또는 16
    pub iv_length: usize,
}

impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("secret", &"***")
            .field("iv_length", &self.iv_length)
            .finish()
    }
}

impl CipherConfig {
    pub fn from_lookup(lookup: &EnvLookup, env: Environment) -> Result<Self, AppError> {
        let secret = required_secret(lookup, "CIPHER_SECRET", env, "dev-cipher-secret-change-me")?;

        let iv_length = match lookup("CIPHER_IV_LENGTH") {
            None => DEFAULT_IV_LENGTH,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(len @ (12 | 16)) => len,
                _ => {
                    return Err(AppError::ConfigurationError(format!(
                        "CIPHER_IV_LENGTH must be 12 or 16, got {:?}",
                        raw
                    )))
                }
            },
        };

        Ok(Self { secret, iv_length })
    }
}
