//! Clipboard access via the async Web Clipboard API.

/// Write text to the system clipboard.
///
/// Resolves once the browser has accepted or rejected the write. Callers
/// decide how loudly to report a failure; this function only surfaces it.
pub async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
