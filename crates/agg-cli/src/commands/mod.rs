pub mod build;
pub mod dispatch;
pub mod fetch;
pub mod fields;
pub mod import;
pub mod logos;
pub mod process;
pub mod validate;
