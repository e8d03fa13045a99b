// Thin wrappers over `web_sys`. Called from event handlers and `main` only,
// never from the section components.

use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// Hands the composed message to whatever mail client the OS has registered.
/// There is no way to learn whether one exists.
pub fn open_mail_client(mailto: &str) -> Result<(), String> {
    let w = window().ok_or("No window".to_string())?;
    w.location()
        .set_href(mailto)
        .map_err(|_| "Navigation to mailto: was rejected".to_string())
}

pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let w = window().ok_or("No window".to_string())?;
    let cb = w.navigator().clipboard();
    JsFuture::from(cb.write_text(&text))
        .await
        .map_err(|_| {
            "Clipboard write failed (HTTPS + user gesture required in some browsers)".to_string()
        })?;
    Ok(())
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
