// ============================================================================
// TEST SUPPORT - Utilidades para los tests en navegador (wasm-bindgen-test)
// ============================================================================

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, InputEvent, InputEventInit};

/// Contenedor nuevo colgado del body donde montar un componente
pub fn mount_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Deja correr al scheduler de Yew
pub async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(30)).await;
}

pub async fn wait_ms(ms: u32) {
    yew::platform::time::sleep(Duration::from_millis(u64::from(ms))).await;
}

pub fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
}

pub fn click(root: &Element, selector: &str) {
    find(root, selector).unchecked_into::<HtmlElement>().click();
}

/// Escribe en un <input> o <textarea> y dispara `input` como lo haría el usuario
pub fn type_into(root: &Element, selector: &str, value: &str) {
    let element = find(root, selector);
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else {
        element.unchecked_ref::<HtmlTextAreaElement>().set_value(value);
    }
    let init = InputEventInit::new();
    init.set_bubbles(true);
    let event = InputEvent::new_with_event_init_dict("input", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

pub fn input_value(root: &Element, selector: &str) -> String {
    let element = find(root, selector);
    match element.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => element.unchecked_ref::<HtmlTextAreaElement>().value(),
    }
}
