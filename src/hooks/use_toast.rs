// ============================================================================
// TOAST CONTEXT - Cola de notificaciones compartida por toda la app
// ============================================================================

use yew::prelude::*;

use crate::models::Notice;
use crate::state::{ToastAction, ToastQueue};

pub type ToastContext = UseReducerHandle<ToastQueue>;

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    html! {
        <ContextProvider<ToastContext> context={queue}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Callback para publicar una notificación
#[hook]
pub fn use_toast() -> Callback<Notice> {
    let context = use_context::<ToastContext>();
    Callback::from(move |notice: Notice| match &context {
        Some(queue) => queue.dispatch(ToastAction::Push(notice)),
        None => log::warn!("⚠️ [TOAST] Sin ToastProvider: {}", notice.title),
    })
}
