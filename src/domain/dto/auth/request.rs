//! # 인증 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 카카오 OAuth 콜백 쿼리 파라미터
///
/// 카카오 인가 서버가 리다이렉트로 전달하는 파라미터입니다.
/// 사용자가 동의를 거부한 경우 `code` 없이 `error` 필드만 채워져
/// 도착하므로 `code`와 `state`는 선택 필드로 받습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct KakaoCallbackQuery {
    /// 토큰 교환에 사용할 인가 코드
    #[validate(length(min = 1, message = "인가 코드가 비어있습니다"))]
    pub code: Option<String>,

    /// CSRF 방지용 state 값
    #[validate(length(min = 1, message = "state 값이 비어있습니다"))]
    pub state: Option<String>,

    /// 인가 실패 시의 오류 코드
    pub error: Option<String>,

    /// 인가 실패 사유 설명
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_callback_query() {
        let query = KakaoCallbackQuery {
            code: Some("auth-code".to_string()),
            state: Some("state-value".to_string()),
            error: None,
            error_description: None,
        };

        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        let query = KakaoCallbackQuery {
            code: Some(String::new()),
            state: Some("state-value".to_string()),
            error: None,
            error_description: None,
        };

        assert!(query.validate().is_err());
    }

    #[test]
    fn test_denied_callback_omits_code() {
        let query = KakaoCallbackQuery {
            code: None,
            state: None,
            error: Some("access_denied".to_string()),
            error_description: Some("User denied access".to_string()),
        };

        // 거부 콜백은 검증 통과 후 핸들러에서 error 필드로 분기합니다.
        assert!(query.validate().is_ok());
    }
}
