/// Выгрузка данных в JSON файл на стороне браузера
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Pretty-printed JSON with two-space indentation
pub fn to_pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String, String> {
    serde_json::to_string_pretty(data).map_err(|e| format!("Failed to serialize export: {}", e))
}

/// Hands already serialized JSON to the browser as a file download
pub fn download_json(content: &str, filename: &str) -> Result<(), String> {
    let blob = create_blob(content, "application/json")?;
    download_blob(&blob, filename)
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let json = to_pretty_json(&vec![serde_json::json!({"a": 1})]).unwrap();
        assert_eq!(json, "[\n  {\n    \"a\": 1\n  }\n]");
    }

    #[test]
    fn test_empty_list_exports_brackets() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(to_pretty_json(&empty).unwrap(), "[]");
    }
}
