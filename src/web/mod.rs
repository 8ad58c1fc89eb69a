pub mod csrf;
pub mod flash;
pub mod validate;
