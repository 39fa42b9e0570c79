//! # 인증 응답 DTO

use serde::Serialize;

/// 소셜 로그인 URL 응답
///
/// 클라이언트는 `login_url`로 브라우저를 이동시켜
/// 카카오 인가 절차를 시작합니다.
#[derive(Debug, Serialize)]
pub struct OAuthLoginUrlResponse {
    /// 카카오 인가 페이지 URL
    pub login_url: String,
    /// 발급된 CSRF 방지 state 값
    pub state: String,
}

/// 로그아웃 결과 응답
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    /// 처리 결과 메시지
    pub message: String,
}
