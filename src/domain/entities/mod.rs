//! 영속 엔티티 모듈

pub mod boards;
pub mod users;
