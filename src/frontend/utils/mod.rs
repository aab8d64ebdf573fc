pub mod errors;
pub mod fetch_state;
pub mod formatting;
pub mod mount_guard;
