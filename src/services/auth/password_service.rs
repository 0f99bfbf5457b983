//! 패스워드 해싱 서비스
//!
//! bcrypt 해싱과 검증은 CPU 집약적이므로 `actix_web::web::block`으로
//! 블로킹 스레드 풀에서 실행합니다.

use actix_web::web;
use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult, ErrorContext};

/// bcrypt 기반 패스워드 해셔
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// 평문 패스워드를 해싱합니다. 같은 입력이라도 매번 다른 솔트가 쓰입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 빈 평문
    /// * `AppError::InternalError` - bcrypt 실패 또는 블로킹 작업 취소
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        if plaintext.is_empty() {
            return Err(AppError::ConfigurationError(
                "password hashing requires a non-empty plaintext".to_string(),
            ));
        }

        let cost = self.cost;
        let plaintext = plaintext.to_owned();

        web::block(move || bcrypt::hash(plaintext, cost))
            .await
            .context("패스워드 해싱 작업 실패")?
            .context("패스워드 해싱 실패")
    }

    /// 평문과 저장된 해시를 비교합니다.
    ///
    /// 불일치는 에러가 아니라 `Ok(false)`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 빈 평문 또는 빈 해시
    /// * `AppError::InternalError` - 저장된 해시 형식 오류
    pub async fn verify(&self, plaintext: &str, hashed: &str) -> AppResult<bool> {
        if plaintext.is_empty() || hashed.is_empty() {
            return Err(AppError::ConfigurationError(
                "password verification requires both plaintext and hash".to_string(),
            ));
        }

        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();

        web::block(move || bcrypt::verify(plaintext, &hashed))
            .await
            .context("패스워드 검증 작업 실패")?
            .context("저장된 해시 형식 오류")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(&PasswordConfig { bcrypt_cost: 4 })
    }

    #[actix_web::test]
    async fn test_hash_then_verify() {
        let hasher = hasher();
        let hashed = hasher.hash("correct horse").await.unwrap();

        assert!(hasher.verify("correct horse", &hashed).await.unwrap());
        assert!(!hasher.verify("wrong horse", &hashed).await.unwrap());
    }

    #[actix_web::test]
    async fn test_same_password_gets_different_salts() {
        let hasher = hasher();
        let first = hasher.hash("secret1").await.unwrap();
        let second = hasher.hash("secret1").await.unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &second).await.unwrap());
    }

    #[actix_web::test]
    async fn test_empty_arguments_are_rejected() {
        let hasher = hasher();

        assert!(matches!(hasher.hash("").await, Err(AppError::ConfigurationError(_))));
        assert!(matches!(hasher.verify("", "$2b$04$x").await, Err(AppError::ConfigurationError(_))));
        assert!(matches!(hasher.verify("pw", "").await, Err(AppError::ConfigurationError(_))));
    }

    #[actix_web::test]
    async fn test_malformed_hash_is_internal_error() {
        let result = hasher().verify("pw", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
