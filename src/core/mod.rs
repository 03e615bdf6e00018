pub mod archiver;
pub mod file_selector;
