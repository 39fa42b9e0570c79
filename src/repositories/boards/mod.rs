pub mod board_repo;
