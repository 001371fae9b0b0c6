use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{bullet_list, DialogControlProps};
use crate::components::Dialog;
use crate::data::accessibility::{WHATSAPP_SUPPORT, WHATSAPP_UPDATES};
use crate::hooks::use_toast;
use crate::viewmodels::contact_viewmodel::{dialog_outcome, whatsapp_connect};

#[function_component(WhatsAppDialog)]
pub fn whatsapp_dialog(props: &DialogControlProps) -> Html {
    let phone = use_state(String::new);
    let toast = use_toast();

    let on_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                phone.set(input.value());
            }
        })
    };

    let on_connect = {
        let phone = phone.clone();
        let toast = toast.clone();
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_e: MouseEvent| {
            let (notice, close) = dialog_outcome(whatsapp_connect(&phone));
            toast.emit(notice);
            if close {
                on_open_change.emit(false);
            }
        })
    };

    let cancel = {
        let cb = props.on_open_change.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(false))
    };

    html! {
        <Dialog
            open={props.open}
            on_open_change={props.on_open_change.clone()}
            icon="💬"
            title="WhatsApp Support"
            description="Connect to our WhatsApp support for instant updates and assistance"
        >
            <div class="callout">
                <h4>{"Support Details"}</h4>
                { for WHATSAPP_SUPPORT.iter().map(|(label, value)| html! {
                    <div class="list-row text-sm">
                        <span>{format!("{}:", label)}</span>
                        <strong>{*value}</strong>
                    </div>
                })}
            </div>

            <div class="form-field">
                <label class="form-label" for="whatsapp-phone">{"Your Mobile Number"}</label>
                <input
                    id="whatsapp-phone"
                    class="form-input"
                    type="tel"
                    placeholder="+91 XXXXX XXXXX"
                    value={(*phone).clone()}
                    oninput={on_input}
                />
            </div>

            <div class="callout callout-success">
                <p><strong>{"✓ What you'll receive:"}</strong></p>
                { bullet_list(&WHATSAPP_UPDATES) }
            </div>

            <div class="dialog-actions">
                <button class="btn btn-outline" onclick={cancel}>{"Cancel"}</button>
                <button class="btn btn-primary" onclick={on_connect}>{"💬 Connect WhatsApp"}</button>
            </div>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn renders_support_details_and_updates() {
        let props = DialogControlProps { open: true, on_open_change: Callback::noop() };
        let rendered = LocalServerRenderer::<WhatsAppDialog>::with_props(props).render().await;
        assert!(rendered.contains("+91 98765 43210"));
        assert!(rendered.contains("Route change notifications"));
        assert!(rendered.contains("Connect WhatsApp"));
    }
}
