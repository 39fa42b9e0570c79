pub mod kakao_auth_service;
