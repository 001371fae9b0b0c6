use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::{bullet_list, DialogControlProps};
use crate::components::Dialog;
use crate::data::accessibility::{HOTLINE_HOURS, HOTLINE_LANGUAGES, VOICE_SERVICES};
use crate::hooks::use_toast;
use crate::viewmodels::contact_viewmodel::{dialog_outcome, voice_call};

#[function_component(VoiceDialog)]
pub fn voice_dialog(props: &DialogControlProps) -> Html {
    let language = use_state(String::new);
    let toast = use_toast();

    let on_language = {
        let language = language.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                language.set(select.value());
            }
        })
    };

    let on_call = {
        let language = language.clone();
        let toast = toast.clone();
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_e: MouseEvent| {
            let (notice, close) = dialog_outcome(voice_call(&language));
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
            icon="🔊"
            title="Voice Support Hotline"
            description="Get immediate voice assistance in your preferred language"
        >
            <div class="callout">
                <h4>{"🕐 Service Hours & Information"}</h4>
                { for HOTLINE_HOURS.iter().map(|(label, value)| html! {
                    <div class="list-row text-sm">
                        <span>{format!("{}:", label)}</span>
                        <strong>{*value}</strong>
                    </div>
                })}
            </div>

            <div class="form-field">
                <label class="form-label">{"🌐 Select Language"}</label>
                <select class="form-select" onchange={on_language}>
                    <option value="" disabled={true} selected={language.is_empty()}>
                        {"Choose your preferred language"}
                    </option>
                    { for HOTLINE_LANGUAGES.iter().map(|hotline| html! {
                        <option value={hotline.code} selected={language.as_str() == hotline.code}>
                            {format!("{} - {}", hotline.name, hotline.phone)}
                        </option>
                    })}
                </select>
            </div>

            <div class="callout callout-accent">
                <h5>{"Voice Services Available:"}</h5>
                { bullet_list(&VOICE_SERVICES) }
            </div>

            <div class="dialog-actions">
                <button class="btn btn-outline" onclick={cancel}>{"Cancel"}</button>
                <button class="btn btn-primary" onclick={on_call}>{"📞 Call Now"}</button>
            </div>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn lists_every_hotline_with_its_number() {
        let props = DialogControlProps { open: true, on_open_change: Callback::noop() };
        let rendered = LocalServerRenderer::<VoiceDialog>::with_props(props).render().await;
        assert!(rendered.contains("Voice Support Hotline"));
        for hotline in HOTLINE_LANGUAGES.iter() {
            assert!(rendered.contains(hotline.phone));
        }
        assert!(rendered.contains("Call Now"));
    }
}
