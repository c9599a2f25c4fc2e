//! Status banner.

use super::page::{Page, ids};

/// Show `message` in the status banner, styled as an error when `is_error`.
pub fn show_status(page: &mut Page, message: &str, is_error: bool) {
    let Ok(status) = page.element_mut(ids::STATUS) else {
        return;
    };
    status.set_text(message);
    status.toggle_class("error", is_error);
    status.remove_class("hidden");
}

pub fn hide_status(page: &mut Page) {
    if let Ok(status) = page.element_mut(ids::STATUS) {
        status.add_class("hidden");
    }
}
