//! One-shot notice carried across a navigation.

use dioxus::prelude::*;

/// Message for the next page to show once
pub static FLASH: GlobalSignal<Option<String>> = Signal::global(|| None);

pub fn set_flash(message: impl Into<String>) {
    *FLASH.write() = Some(message.into());
}

/// Read and clear the pending notice
pub fn take_flash() -> Option<String> {
    FLASH.write().take()
}
