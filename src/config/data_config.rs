//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩과 페이지네이션 관련 설정을 관리합니다.
//! 실행 환경 구분은 `PROFILE` 환경 변수와 `.env.{profile}` 파일이 담당합니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 게시글 목록 페이지네이션 설정
pub struct PageConfig;

impl PageConfig {
    /// 페이지 크기가 지정되지 않은 요청에 적용할 기본값을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `BOARD_PAGE_SIZE`: 기본 페이지 크기 (기본값: 10)
    pub fn default_size() -> i64 {
        env::var("BOARD_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_page_config_default_size() {
        if env::var("BOARD_PAGE_SIZE").is_err() {
            assert_eq!(PageConfig::default_size(), 10);
        }
    }
}
