//! HTTP 요청/응답 DTO 모듈

pub mod auth;
pub mod boards;
pub mod users;

pub use auth::*;
pub use boards::*;
pub use users::*;
