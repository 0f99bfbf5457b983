//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 계층의 실패를
//! 하나의 타입으로 모읍니다. 각 변형은 안정적인 에러 코드와 HTTP 상태를 가지며,
//! 응답 본문은 항상 `{ "code", "message", "status" }` 형태입니다.
//!
//! ## 에러 코드 매핑
//!
//! | AppError | code | HTTP Status |
//! |----------|------|-------------|
//! | `Unauthenticated` | `UNAUTHENTICATED` | 401 |
//! | `InvalidCredentials` | `AUTH_INVALID_CREDENTIALS` | 401 |
//! | `UserNotFound` | `AUTH_USER_NOT_FOUND` | 401 |
//! | `UserAlreadyExists` | `AUTH_USER_ALREADY_EXISTS` | 409 |
//! | `TokenExpired` | `TOKEN_EXPIRED` | 401 |
//! | `TokenInvalid` | `TOKEN_INVALID` | 401 |
//! | `TokenScopeMismatch` | `TOKEN_SCOPE_MISMATCH` | 401 |
//! | `InvalidPayload` | `TOKEN_INVALID_PAYLOAD` | 400 |
//! | `DecodeError` | `TOKEN_DECODE_ERROR` | 400 |
//! | `Forbidden` | `FORBIDDEN` | 403 |
//! | `NotFound` | `NOT_FOUND` | 404 |
//! | `ValidationError` | `VALIDATION_ERROR` | 400 |
//! | `DecryptionError` | `DECRYPTION_ERROR` | 400 |
//! | `ConfigurationError` | `CONFIGURATION_ERROR` | 500 |
//! | `DatabaseError` | `DATABASE_ERROR` | 500 |
//! | `InternalError` | `INTERNAL_ERROR` | 500 |
//!
//! 500 계열 에러의 상세 메시지는 서버 로그에만 남고 클라이언트에는 노출되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn find(&self, email: &str) -> Result<Option<User>, AppError> {
//!     self.collection()
//!         .find_one(doc! { "email": email })
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::domain::models::token::token::TokenScope;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 액세스 토큰이 없거나 유효하지 않음 (401)
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// 비밀번호 불일치 (401)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 로그인/갱신 대상 계정 없음 (401)
    #[error("Invalid email or password")]
    UserNotFound,

    /// 같은 이메일의 활성 계정이 이미 존재 (409)
    #[error("An account with this email already exists")]
    UserAlreadyExists,

    /// 토큰 만료 (401)
    #[error("Token has expired")]
    TokenExpired,

    /// 서명 불일치, 변조, 형식 오류 (401)
    #[error("Invalid token: {0}")]
    TokenInvalid(String),

    /// 토큰 스코프가 검증 컨텍스트와 다름 (401)
    #[error("Token scope mismatch: expected {expected}, got {actual}")]
    TokenScopeMismatch {
        expected: TokenScope,
        actual: TokenScope,
    },

    /// 토큰 발급에 필요한 페이로드가 비어 있음 (400)
    #[error("Invalid token payload: {0}")]
    InvalidPayload(String),

    /// 서명 검증 없는 디코딩 실패 (400)
    #[error("Token decode error: {0}")]
    DecodeError(String),

    /// 권한 부족 (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 리소스 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 입력값 검증 실패 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 암호문 형식 오류 또는 키 불일치 (400)
    #[error("Decryption error: {0}")]
    DecryptionError(String),

    /// 비밀키 누락 등 설정 오류. 기동 시에는 치명적 (500)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 데이터 저장소 오류 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 예상치 못한 내부 오류 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트가 분기 처리에 사용하는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated(_) => "UNAUTHENTICATED",
            AppError::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            AppError::UserNotFound => "AUTH_USER_NOT_FOUND",
            AppError::UserAlreadyExists => "AUTH_USER_ALREADY_EXISTS",
            AppError::TokenExpired => "TOKEN_EXPIRED",
            AppError::TokenInvalid(_) => "TOKEN_INVALID",
            AppError::TokenScopeMismatch { .. } => "TOKEN_SCOPE_MISMATCH",
            AppError::InvalidPayload(_) => "TOKEN_INVALID_PAYLOAD",
            AppError::DecodeError(_) => "TOKEN_DECODE_ERROR",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DecryptionError(_) => "DECRYPTION_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 500 계열 여부. 이 경우 응답 메시지를 숨깁니다.
    pub fn is_opaque(&self) -> bool {
        matches!(
            self,
            AppError::ConfigurationError(_) | AppError::DatabaseError(_) | AppError::InternalError(_)
        )
    }

    /// 클라이언트에게 전달할 메시지
    pub fn public_message(&self) -> String {
        if self.is_opaque() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_)
            | AppError::InvalidCredentials
            | AppError::UserNotFound
            | AppError::TokenExpired
            | AppError::TokenInvalid(_)
            | AppError::TokenScopeMismatch { .. } => StatusCode::UNAUTHORIZED,
            AppError::UserAlreadyExists => StatusCode::CONFLICT,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidPayload(_)
            | AppError::DecodeError(_)
            | AppError::ValidationError(_)
            | AppError::DecryptionError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationError(_)
            | AppError::DatabaseError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 오류는 여기서 한 번 로그로 남기고 본문에는 일반 메시지만 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if self.is_opaque() {
            log::error!("요청 처리 중 내부 오류 발생 [{}]: {}", self.code(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "code": self.code(),
                "message": self.public_message(),
                "status": status.as_u16(),
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
