//! Global stores for application state.

pub mod flash;

pub use flash::{set_flash, take_flash, FLASH};
