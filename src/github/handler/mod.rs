pub mod commit_handler;
pub mod release_handler;
pub mod repository_handler;
