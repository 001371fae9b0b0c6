use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::SelectOption;

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub label: AttrValue,
    pub options: &'static [SelectOption],
    /// Valor seleccionado; vacío muestra el placeholder
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub on_change: Option<Callback<String>>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let node = use_node_ref();

    // `selected` solo fija el valor inicial: tras elegir a mano, el <select>
    // ignora los cambios de atributo y hay que escribir su valor
    {
        let node = node.clone();
        use_effect_with(props.value.clone(), move |value| {
            if let Some(select) = node.cast::<HtmlSelectElement>() {
                if select.value() != value.as_str() {
                    select.set_value(value);
                }
            }
        });
    }

    let onchange = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let (Some(cb), Some(select)) = (&cb, e.target_dyn_into::<HtmlSelectElement>()) {
                cb.emit(select.value());
            }
        })
    };

    html! {
        <div class="form-field">
            <label class="form-label">{props.label.clone()}</label>
            <select class="form-select" ref={node} {onchange}>
                if let Some(placeholder) = &props.placeholder {
                    <option value="" disabled={true} selected={props.value.is_empty()}>{placeholder.clone()}</option>
                }
                { for props.options.iter().map(|option| html! {
                    <option value={option.value} selected={props.value.as_str() == option.value}>
                        {option.label}
                    </option>
                })}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    const COLORS: &[SelectOption] = &[SelectOption::new("red", "Red"), SelectOption::new("blue", "Blue")];

    async fn render(value: &'static str) -> String {
        let props = SelectProps {
            label: "Color".into(),
            options: COLORS,
            value: value.into(),
            placeholder: Some("Pick one".into()),
            on_change: None,
        };
        LocalServerRenderer::<Select>::with_props(props).render().await
    }

    #[tokio::test]
    async fn empty_value_selects_the_placeholder() {
        let rendered = render("").await;
        assert!(rendered.contains("Pick one"));
        assert_eq!(rendered.matches("selected").count(), 1);
    }

    #[tokio::test]
    async fn chosen_value_is_the_only_selected_option() {
        let rendered = render("blue").await;
        assert_eq!(rendered.matches("selected").count(), 1);
        assert!(rendered.contains("Blue"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{find, mount_root, settle};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SIZES: &[SelectOption] = &[SelectOption::new("s", "Small"), SelectOption::new("l", "Large")];

    fn props(value: &'static str) -> SelectProps {
        SelectProps {
            label: "Size".into(),
            options: SIZES,
            value: value.into(),
            placeholder: Some("Pick a size".into()),
            on_change: None,
        }
    }

    #[wasm_bindgen_test]
    async fn reset_value_returns_to_the_placeholder() {
        let root = mount_root();
        let mut app = yew::Renderer::<Select>::with_root_and_props(root.clone(), props("l")).render();
        settle().await;
        let select = find(&root, "select").unchecked_into::<HtmlSelectElement>();
        assert_eq!(select.value(), "l");

        app.update(props(""));
        settle().await;
        assert_eq!(select.value(), "");
        app.destroy();
    }
}
