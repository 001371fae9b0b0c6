// ============================================================================
// TOASTER - Pinta la cola de notificaciones y las descarta solas
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::ToastContext;
use crate::state::{Toast, ToastAction};

#[function_component(Toaster)]
pub fn toaster() -> Html {
    let Some(queue) = use_context::<ToastContext>() else {
        return html! {};
    };

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster" aria-live="polite">
            { for queue.toasts().iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-descarte; el Timeout muere con el toast
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(CONFIG.toast_config.duration_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let close = {
        let id = props.toast.id;
        let cb = props.on_dismiss.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(id))
    };

    let notice = &props.toast.notice;
    let class = if notice.is_destructive() { "toast toast-destructive" } else { "toast" };

    html! {
        <div {class} role="status">
            <div class="toast-text">
                <div class="toast-title">{notice.title.clone()}</div>
                <div class="toast-description">{notice.description.clone()}</div>
            </div>
            <button class="toast-close" aria-label="Dismiss" onclick={close}>{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Notice;

    #[tokio::test]
    async fn destructive_toast_uses_destructive_style() {
        let props = ToastItemProps {
            toast: Toast {
                id: 7,
                notice: Notice::destructive("Phone Number Required", "Please enter your phone number."),
            },
            on_dismiss: Callback::noop(),
        };
        let rendered = yew::LocalServerRenderer::<ToastItem>::with_props(props).render().await;
        assert!(rendered.contains("toast toast-destructive"));
        assert!(rendered.contains("Phone Number Required"));
    }
}
