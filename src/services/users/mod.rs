pub mod user_resolver_service;
