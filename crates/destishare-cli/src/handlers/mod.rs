pub mod add;
pub mod browse;
pub mod init;
pub mod list;
pub mod vote;
