//! # 문자열 유틸리티
//!
//! 입력값 정리와 설정값 파싱에 쓰이는 공통 함수들입니다.

use crate::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 이메일 정규화
///
/// 조회와 저장 모두 같은 형태를 쓰도록 앞뒤 공백을 제거하고 소문자로 바꿉니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 기간 문자열을 초 단위로 파싱합니다.
///
/// `"900"`, `"30s"`, `"15m"`, `"12h"`, `"7d"` 형식을 지원합니다.
/// 0은 허용되며(즉시 만료), 음수나 알 수 없는 단위는 설정 오류입니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(parse_duration_secs("15m", "JWT_ACCESS_EXPIRES_IN").unwrap(), 900);
/// assert_eq!(parse_duration_secs("7d", "JWT_REFRESH_EXPIRES_IN").unwrap(), 604_800);
/// ```
pub fn parse_duration_secs(value: &str, key: &str) -> Result<i64, AppError> {
    let value = value.trim();
    let invalid = || AppError::ConfigurationError(format!("{} 값이 올바른 기간이 아닙니다: {:?}", key, value));

    let (digits, multiplier) = match value.char_indices().last() {
        Some((idx, 's')) => (&value[..idx], 1),
        Some((idx, 'm')) => (&value[..idx], 60),
        Some((idx, 'h')) => (&value[..idx], 3_600),
        Some((idx, 'd')) => (&value[..idx], 86_400),
        Some((_, c)) if c.is_ascii_digit() => (value, 1),
        _ => return Err(invalid()),
    };

    let amount: i64 = digits.parse().map_err(|_| invalid())?;
    if amount < 0 {
        return Err(invalid());
    }

    amount.checked_mul(multiplier).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.com "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_parse_duration_secs() {
        assert_eq!(parse_duration_secs("900", "K").unwrap(), 900);
        assert_eq!(parse_duration_secs("30s", "K").unwrap(), 30);
        assert_eq!(parse_duration_secs("15m", "K").unwrap(), 900);
        assert_eq!(parse_duration_secs("12h", "K").unwrap(), 43_200);
        assert_eq!(parse_duration_secs(" 7d ", "K").unwrap(), 604_800);
        assert_eq!(parse_duration_secs("0", "K").unwrap(), 0);
    }

    #[test]
    fn test_parse_duration_secs_rejects_garbage() {
        for input in ["", "m", "15w", "-5m", "abc", "1.5h"] {
            let result = parse_duration_secs(input, "JWT_ACCESS_EXPIRES_IN");
            assert!(
                matches!(result, Err(AppError::ConfigurationError(_))),
                "{:?} should be rejected",
                input
            );
        }
    }
}
