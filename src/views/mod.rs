// ============================================================================
// VIEWS - Páginas de la aplicación
// ============================================================================
// Cada página es dueña de su estado local (formularios, pestaña, diálogos).
// ============================================================================

pub mod accessibility;
pub mod admin;
pub mod app;
pub mod citizen;
pub mod home;
pub mod integration;
pub mod not_found;

pub use accessibility::AccessibilityPage;
pub use admin::AdminPage;
pub use app::{App, AppShell};
pub use citizen::CitizenPage;
pub use home::HomePage;
pub use integration::IntegrationPage;
pub use not_found::NotFoundPage;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Valor de un `<input>` o `<textarea>` a partir de su evento
pub(crate) fn input_value(e: InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

/// Callback que escribe un campo de un formulario guardado en `use_state`
pub(crate) fn field_setter<F>(form: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<String>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

/// Igual que `field_setter`, pero conectado directamente a `oninput`
pub(crate) fn field_input<F>(form: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let set = field_setter(form, apply);
    Callback::from(move |e: InputEvent| {
        if let Some(value) = input_value(e) {
            set.emit(value);
        }
    })
}

/// `data-<name>` del elemento más cercano al origen del click.
///
/// Una sola callback atiende a un grupo de botones que llevan su variante en
/// el marcado.
pub(crate) fn data_tag(e: &MouseEvent, name: &str) -> Option<String> {
    let attribute = format!("data-{}", name);
    let origin = e.target()?.dyn_into::<Element>().ok()?;
    origin.closest(&format!("[{}]", attribute)).ok()??.get_attribute(&attribute)
}
