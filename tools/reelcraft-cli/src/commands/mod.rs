pub mod compile;
pub mod config;
pub mod info;
pub mod profiles;
pub mod validate;
