// ABOUTME: Configuration and constants for the Lisp interpreter

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WELCOME_MESSAGE: &str = "schemelet";
pub const WELCOME_SUBTITLE: &str = "a minimal lexically-scoped Lisp";
