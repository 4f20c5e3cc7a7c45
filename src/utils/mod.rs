pub mod dom;
pub mod format;
pub mod geometry;
pub mod recaptcha;
pub mod storage;
pub mod timing;
pub mod validate;
