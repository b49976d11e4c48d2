use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use galleria_core::ImageBox;

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Elements matching `selector` under `root`, in document order.
pub(crate) fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub(crate) fn query_document<T: JsCast>(selector: &str) -> Vec<T> {
    let Some(root) = document().and_then(|doc| doc.document_element()) else {
        return Vec::new();
    };
    query_all(&root, selector)
}

pub(crate) fn query_one<T: JsCast>(selector: &str) -> Option<T> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

/// True unless the element has no box at all: zero width, zero height and
/// no client rects.
pub(crate) fn is_rendered(element: &Element) -> bool {
    let rect = element.get_bounding_client_rect();
    rect.width() > 0.0 || rect.height() > 0.0 || element.get_client_rects().length() > 0
}

pub(crate) fn image_box(image: &HtmlImageElement) -> ImageBox {
    let rect = image.get_bounding_client_rect();
    ImageBox {
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
        natural_height: image.natural_height() as f64,
    }
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub(crate) fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub(crate) fn document_is_complete(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string())
        .map(|state| state == "complete")
        .unwrap_or(false)
}

/// Global constructor or function exposed on `window`, if any.
pub(crate) fn window_global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    Some(value)
}
