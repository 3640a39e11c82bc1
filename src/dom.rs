// Thin wrappers over the browser calls the components need. All of them are
// best-effort: a missing window/body just means nothing happens.

use web_sys::{window, HtmlElement};

pub fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Locks or restores page scrolling behind the mobile menu.
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
