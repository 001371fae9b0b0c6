// ============================================================================
// DIALOG - Marco modal controlado (open + on_open_change)
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    pub title: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Ancho máximo mayor para los diálogos con tablas/pestañas
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    // Escape cierra mientras está abierto
    {
        let on_open_change = props.on_open_change.clone();
        use_effect_with(props.open, move |open| {
            let document = if *open {
                web_sys::window().and_then(|w| w.document())
            } else {
                None
            };
            let closure = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                if e.key() == "Escape" {
                    on_open_change.emit(false);
                }
            }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

            if let Some(doc) = &document {
                if let Err(e) = doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref()) {
                    log::error!("❌ [DIALOG] No se pudo escuchar keydown: {:?}", e);
                }
            }

            move || {
                if let Some(doc) = &document {
                    let _ = doc.remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                }
                drop(closure);
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let cb = props.on_open_change.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(false))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let content_class = if props.wide { "modal-content modal-wide" } else { "modal-content" };

    html! {
        <div class="modal active" role="dialog" aria-modal="true">
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class={content_class} onclick={stop}>
                <div class="modal-header">
                    <h2>
                        if let Some(icon) = &props.icon {
                            <span class="modal-icon">{icon.clone()}</span>
                        }
                        {props.title.clone()}
                    </h2>
                    <button class="btn-close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                if let Some(description) = &props.description {
                    <p class="modal-description">{description.clone()}</p>
                }
                <div class="modal-body">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    fn props(open: bool) -> DialogProps {
        DialogProps {
            open,
            on_open_change: Callback::noop(),
            title: "System Health".into(),
            icon: None,
            description: Some("Live status".into()),
            wide: false,
            children: Children::new(vec![html! { <p>{"body text"}</p> }]),
        }
    }

    #[tokio::test]
    async fn closed_dialog_renders_nothing() {
        let rendered = LocalServerRenderer::<Dialog>::with_props(props(false)).render().await;
        assert!(!rendered.contains("modal"));
        assert!(!rendered.contains("body text"));
    }

    #[tokio::test]
    async fn open_dialog_renders_frame_and_children() {
        let rendered = LocalServerRenderer::<Dialog>::with_props(props(true)).render().await;
        assert!(rendered.contains("modal active"));
        assert!(rendered.contains("modal-overlay"));
        assert!(rendered.contains("System Health"));
        assert!(rendered.contains("Live status"));
        assert!(rendered.contains("body text"));
    }
}
