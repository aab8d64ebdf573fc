#[cfg(feature = "ssr")]
pub mod backend;
pub mod common;
pub mod frontend;
