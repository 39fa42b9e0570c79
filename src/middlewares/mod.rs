//! 요청 파이프라인 미들웨어 모듈

pub mod social_user_inner;
pub mod social_user_middleware;

pub use social_user_middleware::{OptionalSocialUser, SocialUser, SocialUserMiddleware};
