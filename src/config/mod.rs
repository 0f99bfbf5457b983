//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수는 기동 시 [`AppConfig::from_env`]에서 한 번만 읽히고,
//! 이후에는 불변 구조체로 각 서비스 생성자에 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 서버, 요청 제한, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 서명키와 토큰 수명, 대칭 암호화 설정
//!
//! ## 보안 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 개발용 기본값은 `development`/`test` 환경에서만 허용
//! - 그 외 환경에서 필수 비밀값 누락 시 `ConfigurationError`로 기동 중단
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="finance"
//!
//! export JWT_ACCESS_SECRET="..."
//! export JWT_REFRESH_SECRET="..."
//! export CIPHER_SECRET="..."
//! export BCRYPT_COST="12"          # 4-31 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::{DatabaseConfig, Environment, PasswordConfig, RateLimitConfig, ServerConfig};
pub use auth_config::{CipherConfig, JwtConfig, JwtScopeConfig};

use std::env;
use crate::errors::AppError;

/// 설정 키로 값을 조회하는 함수
///
/// 운영에서는 프로세스 환경 변수를, 테스트에서는 고정된 맵을 사용합니다.
pub type EnvLookup = dyn Fn(&str) -> Option<String>;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub cipher: CipherConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup(lookup: &EnvLookup) -> Result<Self, AppError> {
        let environment = Environment::from_lookup(lookup);

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(lookup),
            rate_limit: RateLimitConfig::from_lookup(lookup),
            database: DatabaseConfig::from_lookup(lookup, environment)?,
            jwt: JwtConfig::from_lookup(lookup, environment)?,
            password: PasswordConfig::from_lookup(lookup, environment),
            cipher: CipherConfig::from_lookup(lookup, environment)?,
        })
    }
}
