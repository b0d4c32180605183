pub mod browse;
pub mod export;
pub mod import;
pub mod init;
pub mod set;
pub mod show;
pub mod window;
