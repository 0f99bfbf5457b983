//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 데이터베이스, 서버 바인딩, 요청 제한, 패스워드 해싱 설정을 관리합니다.
//! 모든 값은 기동 시 한 번 읽혀 불변 구조체로 보관됩니다.

use crate::config::EnvLookup;
use crate::errors::AppError;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 값으로 실행 환경을 결정합니다.
    ///
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 비밀값 누락 시 개발용 기본값을 허용하는 환경인지 여부
    pub fn allows_insecure_defaults(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-31)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 유효하면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn from_lookup(lookup: &EnvLookup, env: Environment) -> Self {
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|cost| (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 기본값: "127.0.0.1"
    pub host: String,
    /// 기본값: 8080
    pub port: u16,
    /// 워커 스레드 수. 기본값: 4
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            workers: lookup("WORKERS")
                .and_then(|w| w.parse().ok())
                .filter(|w| *w > 0)
                .unwrap_or(4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        let per_second = lookup("RATE_LIMIT_PER_SECOND")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_PER_SECOND 미설정 또는 잘못된 값. 기본값 100 사용");
                100
            });

        let burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_BURST_SIZE 미설정 또는 잘못된 값. 기본값 200 사용");
                200
            });

        Self { per_second, burst_size }
    }
}

/// MongoDB 연결 설정
///
/// - `MONGODB_URI`: 기본값 "mongodb://localhost:27017"
/// - `DATABASE_NAME`: 기본값 "finance_dev"
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: &EnvLookup, env: Environment) -> Result<Self, AppError> {
        let uri = match lookup("MONGODB_URI") {
            Some(uri) => uri,
            None if env.allows_insecure_defaults() => "mongodb://localhost:27017".to_string(),
            None => {
                return Err(AppError::ConfigurationError(
                    "MONGODB_URI must be set".to_string(),
                ))
            }
        };

        Ok(Self {
            uri,
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "finance_dev".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> Box<EnvLookup> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Box::new(move |key: &str| map.get(key).cloned())
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
        assert_eq!(Environment::from_lookup(&*lookup_from(&[])), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_override_is_range_checked() {
        let lookup = lookup_from(&[("BCRYPT_COST", "6")]);
        assert_eq!(PasswordConfig::from_lookup(&*lookup, Environment::Production).bcrypt_cost, 6);

        let lookup = lookup_from(&[("BCRYPT_COST", "2")]);
        assert_eq!(PasswordConfig::from_lookup(&*lookup, Environment::Production).bcrypt_cost, 12);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(&*lookup_from(&[]));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_zero_workers_falls_back_to_default() {
        let config = ServerConfig::from_lookup(&*lookup_from(&[("WORKERS", "0")]));
        assert_eq!(config.workers, 4);

        let config = ServerConfig::from_lookup(&*lookup_from(&[("WORKERS", "2")]));
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn test_database_uri_required_in_production() {
        let result = DatabaseConfig::from_lookup(&*lookup_from(&[]), Environment::Production);
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));

        let config = DatabaseConfig::from_lookup(&*lookup_from(&[]), Environment::Development).unwrap();
        assert_eq!(config.uri, "mongodb://localhost:27017");
    }
}
