pub mod config;
pub mod convert;
pub mod init;
pub mod process;
pub mod summary;
