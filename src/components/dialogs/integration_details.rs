// ============================================================================
// INTEGRATION DETAILS - Configurar integración / exportar / sincronizar
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::bullet_list;
use crate::components::Dialog;
use crate::config::CONFIG;
use crate::data::integration::{
    integration_profile, IntegrationProfile, EXPORT_CONTENTS, EXPORT_DETAILS, SYNC_OPERATIONS, SYNC_STATUS,
};
use crate::hooks::{use_simulated_task, use_toast};
use crate::models::IntegrationKind;
use crate::services::export_config;
use crate::viewmodels::integration_viewmodel::{
    configured_notice, export_failed_notice, export_notice, sync_notice,
};

#[derive(Properties, PartialEq)]
pub struct IntegrationDetailsDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    pub kind: Option<IntegrationKind>,
}

#[function_component(IntegrationDetailsDialog)]
pub fn integration_details_dialog(props: &IntegrationDetailsDialogProps) -> Html {
    let api_key = use_state(String::new);
    let configure = use_simulated_task(CONFIG.simulation_config.configure_delay_ms);
    let toast = use_toast();

    // Cerrar el diálogo abandona una configuración en curso
    {
        let cancel = configure.cancel.clone();
        use_effect_with(props.open, move |open| {
            if !*open {
                cancel.emit(());
            }
        });
    }

    let on_key_input = {
        let api_key = api_key.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                api_key.set(input.value());
            }
        })
    };

    let close = {
        let cb = props.on_open_change.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(false))
    };

    let Some(kind) = props.kind else {
        return html! {
            <Dialog open={props.open} on_open_change={props.on_open_change.clone()} title="Integration" icon="⚡" />
        };
    };

    match kind {
        IntegrationKind::Export => {
            let on_export = {
                let toast = toast.clone();
                Callback::from(move |_e: MouseEvent| {
                    toast.emit(export_notice());
                    if let Err(e) = export_config() {
                        log::error!("❌ [EXPORT] Descarga fallida: {:?}", e);
                        toast.emit(export_failed_notice());
                    }
                })
            };
            html! {
                <Dialog open={props.open} on_open_change={props.on_open_change.clone()} title={kind.display_name()} icon={kind.icon()}>
                    <div class="card">
                        <div class="card-title">{"Export Configuration"}</div>
                        <p class="card-description">{"Download complete system configuration and settings"}</p>
                        <div class="callout">
                            <h5>{"Export Package Includes:"}</h5>
                            { bullet_list(&EXPORT_CONTENTS) }
                        </div>
                        <div class="two-columns text-sm">
                            { for EXPORT_DETAILS.iter().map(|(label, value)| html! {
                                <div>{format!("{}: ", label)}<strong>{*value}</strong></div>
                            })}
                        </div>
                        <button class="btn btn-primary btn-block" onclick={on_export}>{"⬇️ Download Configuration"}</button>
                    </div>
                </Dialog>
            }
        }
        IntegrationKind::Sync => {
            let on_sync = {
                let toast = toast.clone();
                Callback::from(move |_e: MouseEvent| toast.emit(sync_notice()))
            };
            html! {
                <Dialog open={props.open} on_open_change={props.on_open_change.clone()} title={kind.display_name()} icon={kind.icon()}>
                    <div class="card">
                        <div class="card-title">{"Sync All Systems"}</div>
                        <p class="card-description">{"Synchronize data across all integrated systems"}</p>
                        <div class="callout">
                            <h5>{"Sync Operations:"}</h5>
                            { bullet_list(&SYNC_OPERATIONS) }
                        </div>
                        <div class="callout callout-primary">
                            { for SYNC_STATUS.iter().map(|(label, value)| html! {
                                <p class="text-xs"><strong>{format!("{}:", label)}</strong>{" "}{*value}</p>
                            })}
                        </div>
                        <button class="btn btn-primary btn-block" onclick={on_sync}>{"⬆️ Start Full Synchronization"}</button>
                    </div>
                </Dialog>
            }
        }
        _ => {
            let on_save = {
                let run = configure.run.clone();
                let toast = toast.clone();
                let on_open_change = props.on_open_change.clone();
                Callback::from(move |_e: MouseEvent| {
                    let toast = toast.clone();
                    let on_open_change = on_open_change.clone();
                    log::info!("⚙️ [INTEGRATION] Configurando {}", kind.as_str());
                    run.emit(Callback::from(move |_: ()| {
                        toast.emit(configured_notice(kind));
                        on_open_change.emit(false);
                    }));
                })
            };
            let description = format!("Configure and manage {} integration", kind.display_name().to_lowercase());
            let body = integration_profile(kind)
                .map(|profile| profile_card(&profile, &api_key, on_key_input))
                .unwrap_or_default();

            html! {
                <Dialog
                    open={props.open}
                    on_open_change={props.on_open_change.clone()}
                    title={kind.display_name()}
                    icon={kind.icon()}
                    {description}
                    wide={true}
                >
                    {body}
                    <div class="dialog-actions">
                        <button class="btn btn-outline" onclick={close}>{"Close"}</button>
                        <button class="btn btn-primary" disabled={configure.running} onclick={on_save}>
                            { if configure.running { "Configuring..." } else { "Save Configuration" } }
                        </button>
                    </div>
                </Dialog>
            }
        }
    }
}

fn profile_card(profile: &IntegrationProfile, api_key: &str, on_key_input: Callback<InputEvent>) -> Html {
    let (badge_label, badge_tone) = profile.badge;
    html! {
        <div class="card">
            <div class="card-title">{profile.heading}</div>
            <p class="card-description">{profile.summary}</p>
            <div class="two-columns">
                { for profile.sections.iter().map(|(title, items)| html! {
                    <div class="titled-list">
                        <h5>{format!("{}:", title)}</h5>
                        { bullet_list(items) }
                    </div>
                })}
            </div>
            if let Some((label, placeholder)) = profile.credential {
                <div class="form-field">
                    <label class="form-label">{label}</label>
                    <input
                        class="form-input"
                        type="password"
                        {placeholder}
                        value={api_key.to_string()}
                        oninput={on_key_input}
                    />
                </div>
            }
            if let Some(note) = profile.note {
                <div class="callout callout-success"><p class="text-xs">{note}</p></div>
            }
            <span class={badge_tone.badge_class()}>{badge_label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render(kind: Option<IntegrationKind>) -> String {
        let props = IntegrationDetailsDialogProps { open: true, on_open_change: Callback::noop(), kind };
        LocalServerRenderer::<IntegrationDetailsDialog>::with_props(props).render().await
    }

    #[tokio::test]
    async fn configurable_integration_shows_save_button() {
        let rendered = render(Some(IntegrationKind::Gemini)).await;
        assert!(rendered.contains("Google Gemini AI Integration"));
        assert!(rendered.contains("Gemini API Key"));
        assert!(rendered.contains("Save Configuration"));
        assert!(!rendered.contains("Configuring..."));
    }

    #[tokio::test]
    async fn export_and_sync_have_no_save_button() {
        let export = render(Some(IntegrationKind::Export)).await;
        assert!(export.contains("Download Configuration"));
        assert!(!export.contains("Save Configuration"));

        let sync = render(Some(IntegrationKind::Sync)).await;
        assert!(sync.contains("Start Full Synchronization"));
        assert!(!sync.contains("Save Configuration"));
    }

    #[tokio::test]
    async fn missing_kind_renders_empty_frame() {
        let rendered = render(None).await;
        assert!(rendered.contains("modal active"));
        assert!(!rendered.contains("Save Configuration"));
        assert!(!rendered.contains("Download Configuration"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::components::Toaster;
    use crate::hooks::ToastProvider;
    use crate::test_support::{click, mount_root, settle, wait_ms};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SAVE: &str = ".dialog-actions .btn-primary";

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        open: bool,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <ToastProvider>
                <IntegrationDetailsDialog
                    open={props.open}
                    on_open_change={Callback::noop()}
                    kind={Some(IntegrationKind::Gemini)}
                />
                <Toaster />
            </ToastProvider>
        }
    }

    #[wasm_bindgen_test]
    async fn save_reports_after_the_configure_delay() {
        let root = mount_root();
        let app = yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { open: true }).render();
        settle().await;

        click(&root, SAVE);
        settle().await;
        assert!(root.inner_html().contains("Configuring..."));

        wait_ms(CONFIG.simulation_config.configure_delay_ms + 200).await;
        assert!(root.inner_html().contains("Integration Configured"));
        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn closing_abandons_a_pending_configuration() {
        let root = mount_root();
        let mut app = yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { open: true }).render();
        settle().await;

        click(&root, SAVE);
        settle().await;
        app.update(HarnessProps { open: false });

        wait_ms(CONFIG.simulation_config.configure_delay_ms + 200).await;
        assert!(!root.inner_html().contains("Integration Configured"));
        app.destroy();
    }
}
