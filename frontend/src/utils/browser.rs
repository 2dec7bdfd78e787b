/// Opens `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, cannot open {}", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => log::info!("Opened WhatsApp hand-off"),
        Ok(None) => log::warn!("Popup blocked for {}", url),
        Err(e) => log::error!("Failed to open {}: {:?}", url, e),
    }
}

/// Blocking notification.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}

/// Locks or restores page scrolling, used while the mobile menu is open.
pub fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("Failed to set body overflow: {:?}", e);
        }
    }
}
