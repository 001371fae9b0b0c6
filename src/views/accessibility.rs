// ============================================================================
// ACCESSIBILITY CENTER - Preferencias, canales alternativos y estándares
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::dialogs::{AudioDialog, VoiceDialog, WhatsAppDialog};
use crate::data::accessibility::{feature_groups, LANGUAGES, STANDARDS};
use crate::hooks::use_toast;
use crate::models::{AccessibilitySettings, Tone, FONT_SIZE_STEP, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::services::apply_accessibility;
use crate::viewmodels::accessibility_viewmodel::{apply_failed_notice, saved_notice};
use crate::viewmodels::SettingToggle;

/// Canal alternativo abierto desde el panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactChannel {
    Voice,
    WhatsApp,
    Audio,
}

#[function_component(AccessibilityPage)]
pub fn accessibility_page() -> Html {
    let settings = use_state(AccessibilitySettings::default);
    let channel = use_state(|| None::<ContactChannel>);
    let toast = use_toast();

    let on_language = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                settings.set(AccessibilitySettings { language: select.value(), ..(*settings).clone() });
            }
        })
    };
    let on_font_size = {
        let settings = settings.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let Ok(px) = input.value().parse::<u32>() {
                settings.set((*settings).clone().with_font_size(px));
            }
        })
    };
    let on_save = {
        let settings = settings.clone();
        let toast = toast.clone();
        Callback::from(move |_e: MouseEvent| match apply_accessibility(&settings) {
            Ok(()) => toast.emit(saved_notice(&settings)),
            Err(e) => {
                log::error!("❌ [A11Y] No se pudieron aplicar las preferencias: {:?}", e);
                toast.emit(apply_failed_notice());
            }
        })
    };

    let toggle_row = |toggle: SettingToggle| {
        let checked = toggle.get(&settings);
        let onchange = {
            let settings = settings.clone();
            Callback::from(move |_e: Event| {
                let mut next = (*settings).clone();
                toggle.set(&mut next, !checked);
                settings.set(next);
            })
        };
        html! {
            <label class="switch-row">
                <span class="text-sm">{toggle.label()}</span>
                <input class="switch" type="checkbox" role="switch" {checked} {onchange} />
            </label>
        }
    };

    let open_channel = |target: ContactChannel| {
        let channel = channel.clone();
        Callback::from(move |_e: MouseEvent| channel.set(Some(target)))
    };
    let channel_change = |target: ContactChannel| {
        let channel = channel.clone();
        Callback::from(move |open: bool| channel.set(open.then_some(target)))
    };

    html! {
        <div class="page">
            <div class="page-header">
                <div class="container text-center">
                    <h1>{"Accessibility Center"}</h1>
                    <p class="text-muted">
                        {"Customize your experience to make waste management services accessible for everyone"}
                    </p>
                </div>
            </div>

            <div class="container two-columns">
                <div class="stack">
                    <div class="card">
                        <div class="card-title"><span class="card-icon text-primary">{"♿"}</span>{"Accessibility Settings"}</div>
                        <p class="card-description">{"Customize the interface to meet your specific needs"}</p>

                        <div class="form-field">
                            <label class="form-label" for="a11y-language">{"🌐 Language"}</label>
                            <select id="a11y-language" class="form-select" onchange={on_language}>
                                { for LANGUAGES.iter().map(|lang| html! {
                                    <option value={lang.code} selected={settings.language == lang.code}>
                                        {format!("{} ({})", lang.native, lang.name)}
                                    </option>
                                })}
                            </select>
                        </div>

                        <div class="form-field">
                            <label class="form-label" for="a11y-font-size">
                                {format!("🔤 Font Size: {}px", settings.font_size)}
                            </label>
                            <input
                                id="a11y-font-size"
                                class="form-range"
                                type="range"
                                min={MIN_FONT_SIZE.to_string()}
                                max={MAX_FONT_SIZE.to_string()}
                                step={FONT_SIZE_STEP.to_string()}
                                value={settings.font_size.to_string()}
                                oninput={on_font_size}
                            />
                        </div>

                        <h4>{"👁️ Visual Options"}</h4>
                        { for SettingToggle::VISUAL.into_iter().map(toggle_row) }

                        <h4>{"🔊 Audio & Voice"}</h4>
                        { for SettingToggle::AUDIO.into_iter().map(toggle_row) }

                        <h4>{"⌨️ Navigation"}</h4>
                        { toggle_row(SettingToggle::KeyboardNav) }

                        <button class="btn btn-primary btn-block" onclick={on_save}>
                            {"Save Accessibility Preferences"}
                        </button>
                    </div>

                    <div class="card">
                        <div class="card-title">{"Alternative Communication"}</div>
                        <p class="card-description">{"Multiple ways to access waste management services"}</p>
                        { contact_row("📞", "Voice Hotline", "Call for assistance in any local language", "Call Now", open_channel(ContactChannel::Voice)) }
                        { contact_row("💬", "WhatsApp Support", "Text-based assistance with voice messages", "Connect", open_channel(ContactChannel::WhatsApp)) }
                        { contact_row("🎧", "Audio Guide", "Step-by-step voice instructions", "Listen", open_channel(ContactChannel::Audio)) }
                    </div>
                </div>

                <div class="stack">
                    <div class="card">
                        <div class="card-title">{"Accessibility Features"}</div>
                        <p class="card-description">{"Comprehensive support for users with diverse needs"}</p>
                        { for feature_groups().into_iter().map(|group| html! {
                            <div class="feature-group" key={group.title.to_string()}>
                                <h4><span class="icon-box">{group.icon}</span>{group.title}</h4>
                                <ul class="bullet-list">
                                    { for group.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                            </div>
                        })}
                    </div>

                    <div class="card card-success">
                        <div class="card-title"><span class="card-icon text-success">{"♿"}</span>{"Accessibility Standards"}</div>
                        <p class="card-description">{"Built with inclusive design principles"}</p>
                        { for STANDARDS.iter().map(|standard| html! {
                            <div class="check-item">
                                <span class={Tone::Success.dot_class()}></span>
                                <span class="text-sm">{*standard}</span>
                            </div>
                        })}
                    </div>
                </div>
            </div>

            <VoiceDialog
                open={*channel == Some(ContactChannel::Voice)}
                on_open_change={channel_change(ContactChannel::Voice)}
            />
            <WhatsAppDialog
                open={*channel == Some(ContactChannel::WhatsApp)}
                on_open_change={channel_change(ContactChannel::WhatsApp)}
            />
            <AudioDialog
                open={*channel == Some(ContactChannel::Audio)}
                on_open_change={channel_change(ContactChannel::Audio)}
            />
        </div>
    }
}

fn contact_row(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    action: &'static str,
    onclick: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="list-row list-row-boxed">
            <div class="card-title">
                <span class="card-icon">{icon}</span>
                <div>
                    <p><strong>{title}</strong></p>
                    <p class="text-sm text-muted">{text}</p>
                </div>
            </div>
            <button class="btn btn-outline btn-sm" {onclick}>{action}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn renders_settings_with_defaults() {
        let rendered = LocalServerRenderer::<AccessibilityPage>::new().render().await;
        assert!(rendered.contains("Font Size: 16px"));
        assert!(rendered.contains("தமிழ் (Tamil)"));
        for toggle in SettingToggle::VISUAL.iter().chain(SettingToggle::AUDIO.iter()) {
            assert!(rendered.contains(toggle.label()));
        }
        assert!(rendered.contains("WCAG 2.1 AA Compliant"));
        assert!(!rendered.contains("modal active"));
    }
}
