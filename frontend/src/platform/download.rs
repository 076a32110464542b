//! Saving a file through the browser's download handling.

use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlAnchorElement};

use crate::export::ExportFile;

/// Offers `file` to the user as a download.
///
/// The object URL is revoked when `ObjectUrl` drops and the temporary anchor
/// is detached by `Detach`, so nothing is left behind on any return path.
pub fn save_file(file: &ExportFile) -> Result<(), JsValue> {
    let blob = Blob::new_with_options(file.bytes.as_slice(), Some(file.media_type));
    let url = ObjectUrl::from(blob);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.style().set_property("display", "none")?;

    body.append_child(&anchor)?;
    let _attached = Detach(anchor.clone().into());
    anchor.click();

    log::info!("saved {} ({} bytes)", file.filename, file.bytes.len());
    Ok(())
}

struct Detach(Element);

impl Drop for Detach {
    fn drop(&mut self) {
        self.0.remove();
    }
}
