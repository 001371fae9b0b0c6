// ============================================================================
// DOCUMENT SERVICE - Aplica preferencias de accesibilidad al <html>
// ============================================================================
// Solo vive lo que dura la página: no se persiste nada.
// ============================================================================

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::models::AccessibilitySettings;

/// Valor CSS del tamaño de fuente raíz
pub fn font_size_value(settings: &AccessibilitySettings) -> String {
    format!("{}px", settings.font_size)
}

pub fn apply_accessibility(settings: &AccessibilitySettings) -> Result<(), JsValue> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| JsValue::from_str("No document element"))?;

    let html = root
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Root is not an HtmlElement"))?;
    html.style().set_property("font-size", &font_size_value(settings))?;

    let classes = root.class_list();
    for class in AccessibilitySettings::managed_classes() {
        classes.remove_1(class)?;
    }
    for class in settings.root_classes() {
        classes.add_1(class)?;
    }

    log::info!(
        "♿ [A11Y] Preferencias aplicadas: {}px, idioma {}",
        settings.font_size,
        settings.language
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_is_rendered_in_pixels() {
        let settings = AccessibilitySettings::default().with_font_size(20);
        assert_eq!(font_size_value(&settings), "20px");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root() -> web_sys::Element {
        web_sys::window().unwrap().document().unwrap().document_element().unwrap()
    }

    #[wasm_bindgen_test]
    fn applies_font_size_and_classes_to_the_root() {
        let settings = AccessibilitySettings {
            high_contrast: true,
            ..AccessibilitySettings::default()
        }
        .with_font_size(20);
        apply_accessibility(&settings).unwrap();

        let root = root();
        assert!(root.class_list().contains("a11y-high-contrast"));
        let style = root.unchecked_ref::<HtmlElement>().style();
        assert_eq!(style.get_property_value("font-size").unwrap(), "20px");
    }

    #[wasm_bindgen_test]
    fn switching_a_toggle_off_removes_its_class() {
        let on = AccessibilitySettings {
            high_contrast: true,
            ..AccessibilitySettings::default()
        };
        apply_accessibility(&on).unwrap();
        apply_accessibility(&AccessibilitySettings::default()).unwrap();
        assert!(!root().class_list().contains("a11y-high-contrast"));
    }
}
