pub mod browse;
pub mod init;
pub mod issues;
pub mod star;
