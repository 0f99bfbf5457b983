//! 인증 요청관련 DTO
//!
//! 로그인, 회원가입, 토큰 갱신 요청 본문을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 회원가입 요청 구조체
///
/// 역할은 입력받지 않습니다. 신규 계정은 항상 `USER`로 생성됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "비밀번호는 6-128자 사이여야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,
}

/// 리프레시 토큰 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_validation() {
        let valid = SignUpRequest {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            name: "A".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignUpRequest { email: "not-an-email".to_string(), ..valid.clone() };
        assert!(bad_email.validate().is_err());

        let short_password = SignUpRequest { password: "abc".to_string(), ..valid.clone() };
        assert!(short_password.validate().is_err());

        let empty_name = SignUpRequest { name: String::new(), ..valid };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_sign_in_request_requires_password() {
        let request = SignInRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
