// ============================================================================
// INTEGRATION HUB - APIs, dispositivos IoT, comunicación y monitorización
// ============================================================================

use yew::prelude::*;

use super::{data_tag, field_input};
use crate::components::dialogs::{
    chart_placeholder, IntegrationDetailsDialog, SystemHealthDialog, VoiceDialog, WhatsAppDialog,
};
use crate::components::{TabItem, Tabs};
use crate::data::integration::{api_connections, iot_devices, AVAILABLE_INTEGRATIONS, COMMUNICATION_SETTINGS};
use crate::hooks::use_toast;
use crate::models::{battery_tone, fill_tone, ApiConnection, IntegrationKind, MonitorKind};
use crate::state::DialogState;
use crate::viewmodels::integration_viewmodel::add_integration;
use crate::viewmodels::NewIntegrationForm;

const INTEGRATION_TABS: &[TabItem] = &[
    ("apis", "API Connections"),
    ("iot", "IoT Devices"),
    ("communication", "Communication"),
    ("monitoring", "Monitoring"),
];

#[function_component(IntegrationPage)]
pub fn integration_page() -> Html {
    let tab = use_state(|| "apis");
    // La lista es estado de la página: las altas no sobreviven a la navegación
    let connections = use_state(api_connections);
    let form = use_state(NewIntegrationForm::default);
    let details = use_state(DialogState::<IntegrationKind>::default);
    let monitor = use_state(DialogState::<MonitorKind>::default);
    let whatsapp_open = use_state(|| false);
    let voice_open = use_state(|| false);
    let toast = use_toast();

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |value: &'static str| tab.set(value))
    };
    let open_details = {
        let details = details.clone();
        Callback::from(move |kind: IntegrationKind| {
            log::debug!("🔌 [INTEGRATION] Abriendo {}", kind.as_str());
            details.set(DialogState::opened(kind));
        })
    };
    let on_details_change = {
        let details = details.clone();
        Callback::from(move |open: bool| details.set(details.with_open(open)))
    };
    let on_monitor = {
        let monitor = monitor.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(kind) = data_tag(&e, "monitor").as_deref().and_then(MonitorKind::parse) {
                log::debug!("📈 [INTEGRATION] Monitor {}", kind.as_str());
                monitor.set(DialogState::opened(kind));
            }
        })
    };
    let on_available = {
        let open_details = open_details.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(kind) = data_tag(&e, "integration").as_deref().and_then(IntegrationKind::parse) {
                open_details.emit(kind);
            }
        })
    };
    let on_monitor_change = {
        let monitor = monitor.clone();
        Callback::from(move |open: bool| monitor.set(monitor.with_open(open)))
    };
    let on_whatsapp_change = {
        let whatsapp_open = whatsapp_open.clone();
        Callback::from(move |open: bool| whatsapp_open.set(open))
    };
    let on_voice_change = {
        let voice_open = voice_open.clone();
        Callback::from(move |open: bool| voice_open.set(open))
    };

    let on_add = {
        let connections = connections.clone();
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let outcome = add_integration(&connections, &form);
            connections.set(outcome.connections);
            form.set(outcome.form);
            toast.emit(outcome.notice);
        })
    };

    let content = match *tab {
        "iot" => iot_tab(),
        "communication" => communication_tab(
            on_whatsapp_change.reform(|_e: MouseEvent| true),
            open_details.reform(|_e: MouseEvent| IntegrationKind::Twilio),
            on_voice_change.reform(|_e: MouseEvent| true),
        ),
        "monitoring" => html! {
            <div class="two-columns">
                <div class="card">
                    <div class="card-title">{"System Health"}</div>
                    <p class="card-description">{"Real-time monitoring of all integrated systems"}</p>
                    { chart_placeholder("⚡", "System health monitoring dashboard will be displayed here") }
                    <button class="btn btn-primary btn-block" data-monitor={MonitorKind::Health.as_str()} onclick={on_monitor.clone()}>
                        {"⚡ Open Health Monitor"}
                    </button>
                </div>
                <div class="card">
                    <div class="card-title">{"Network Performance"}</div>
                    <p class="card-description">{"API response times and network statistics"}</p>
                    { chart_placeholder("🌐", "Network performance metrics will be shown here") }
                    <button class="btn btn-primary btn-block" data-monitor={MonitorKind::Network.as_str()} onclick={on_monitor}>
                        {"🌐 Open Network Monitor"}
                    </button>
                </div>
            </div>
        },
        _ => html! {
            <div class="two-columns">
                <div class="card">
                    <div class="card-title"><span class="card-icon text-accent">{"⚡"}</span>{"API Services"}</div>
                    <p class="card-description">{"External service integrations and their status"}</p>
                    { for connections.iter().map(connection_row) }
                </div>

                <div class="card">
                    <div class="card-title">{"Add New Integration"}</div>
                    <p class="card-description">{"Connect additional services to expand functionality"}</p>
                    <form class="form" onsubmit={on_add}>
                        <input
                            class="form-input"
                            placeholder="Service name"
                            value={form.name.clone()}
                            oninput={field_input(&form, |f: &mut NewIntegrationForm, v| f.name = v)}
                        />
                        <input
                            class="form-input"
                            placeholder="API endpoint"
                            value={form.endpoint.clone()}
                            oninput={field_input(&form, |f: &mut NewIntegrationForm, v| f.endpoint = v)}
                        />
                        <input
                            class="form-input"
                            type="password"
                            placeholder="API key"
                            value={form.api_key.clone()}
                            oninput={field_input(&form, |f: &mut NewIntegrationForm, v| f.api_key = v)}
                        />
                        <button type="submit" class="btn btn-primary btn-block">{"Add Integration"}</button>
                    </form>

                    <h4>{"Available Integrations"}</h4>
                    <div class="action-grid">
                        { for AVAILABLE_INTEGRATIONS.iter().map(|(label, kind)| html! {
                            <button
                                class="btn btn-outline btn-sm"
                                key={kind.as_str()}
                                data-integration={kind.as_str()}
                                onclick={on_available.clone()}
                            >
                                {*label}
                            </button>
                        })}
                    </div>
                </div>
            </div>
        },
    };

    html! {
        <div class="page">
            <div class="page-header">
                <div class="container page-header-row">
                    <div>
                        <h1>{"Integration Hub"}</h1>
                        <p class="text-muted">{"Manage APIs, IoT devices, and system integrations"}</p>
                    </div>
                    <div class="button-row">
                        <button class="btn btn-outline" onclick={open_details.reform(|_e: MouseEvent| IntegrationKind::Export)}>
                            {"⬇️ Export Config"}
                        </button>
                        <button class="btn btn-primary" onclick={open_details.reform(|_e: MouseEvent| IntegrationKind::Sync)}>
                            {"⬆️ Sync All"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="container">
                <Tabs items={INTEGRATION_TABS} active={*tab} {on_select} />
                <div class="tab-content">{content}</div>
            </div>

            <IntegrationDetailsDialog open={details.open} on_open_change={on_details_change} kind={details.target} />
            <SystemHealthDialog open={monitor.open} on_open_change={on_monitor_change} kind={monitor.target} />
            <WhatsAppDialog open={*whatsapp_open} on_open_change={on_whatsapp_change} />
            <VoiceDialog open={*voice_open} on_open_change={on_voice_change} />
        </div>
    }
}

fn connection_row(api: &ApiConnection) -> Html {
    html! {
        <div class="list-row list-row-boxed" key={api.id}>
            <div class="card-title">
                <span class="icon-box">{api.kind.icon()}</span>
                <div>
                    <p><strong>{api.name.clone()}</strong></p>
                    <p class="text-sm text-muted capitalize">{format!("{} service", api.kind.label())}</p>
                </div>
            </div>
            <div class="button-row">
                if api.health > 0 {
                    <span class="text-xs text-muted">{format!("{}%", api.health)}</span>
                }
                <span class={api.status.tone().badge_class()}>
                    {api.status.icon()}{" "}<span class="capitalize">{api.status.label()}</span>
                </span>
            </div>
        </div>
    }
}

fn iot_tab() -> Html {
    html! {
        <div class="card">
            <div class="card-title"><span class="card-icon text-info">{"📶"}</span>{"IoT Device Network"}</div>
            <p class="card-description">{"Monitor and manage connected smart bins and vehicle trackers"}</p>
            <div class="card-grid card-grid-3">
                { for iot_devices().into_iter().map(|device| html! {
                    <div class="card card-compact" key={device.id.to_string()}>
                        <div class="card-row">
                            <span><span class="text-muted">{"📱 "}</span><strong>{device.id}</strong></span>
                            <span class={device.status.tone().badge_class()}>{device.status.label()}</span>
                        </div>
                        <p class="text-sm text-muted">{device.kind}</p>
                        <div class="list-row text-sm">
                            <span>{"Location:"}</span>
                            <strong>{device.location}</strong>
                        </div>
                        <div class="list-row text-sm">
                            <span>{"Battery:"}</span>
                            <strong class={battery_tone(device.battery_level).text_class()}>
                                {format!("{}%", device.battery_level)}
                            </strong>
                        </div>
                        if let Some(fill) = device.fill_level {
                            <div class="list-row text-sm">
                                <span>{"Fill Level:"}</span>
                                <strong class={fill_tone(fill).text_class()}>{format!("{}%", fill)}</strong>
                            </div>
                        }
                    </div>
                })}
            </div>
        </div>
    }
}

fn communication_tab(
    on_whatsapp: Callback<MouseEvent>,
    on_sms: Callback<MouseEvent>,
    on_voice: Callback<MouseEvent>,
) -> Html {
    html! {
        <>
            <div class="card-grid card-grid-3">
                <div class="card">
                    <div class="card-title"><span class="card-icon text-success">{"💬"}</span>{"WhatsApp Business"}</div>
                    <span class="badge badge-secondary">{"Pending Setup"}</span>
                    <p class="text-sm text-muted">{"Connect WhatsApp Business API for citizen notifications and support"}</p>
                    <button class="btn btn-primary btn-block" onclick={on_whatsapp}>{"Configure WhatsApp"}</button>
                </div>
                <div class="card">
                    <div class="card-title"><span class="card-icon text-info">{"📱"}</span>{"SMS Gateway"}</div>
                    <span class="badge badge-destructive">{"Connection Error"}</span>
                    <p class="text-sm text-muted">{"SMS service for collection reminders and alerts"}</p>
                    <button class="btn btn-outline btn-block" onclick={on_sms}>{"Reconnect SMS"}</button>
                </div>
                <div class="card">
                    <div class="card-title"><span class="card-icon text-accent">{"📞"}</span>{"Voice Support"}</div>
                    <span class="badge badge-secondary">{"Not Configured"}</span>
                    <p class="text-sm text-muted">{"Multi-language voice assistant for accessibility"}</p>
                    <button class="btn btn-outline btn-block" onclick={on_voice}>{"Setup Voice"}</button>
                </div>
            </div>
            <div class="card">
                <div class="card-title">{"Communication Settings"}</div>
                <p class="card-description">{"Configure multi-modal communication preferences"}</p>
                { for COMMUNICATION_SETTINGS.iter().map(|(name, state, tone)| html! {
                    <div class="list-row list-row-boxed">
                        <span>{*name}</span>
                        <span class={tone.badge_class()}>{*state}</span>
                    </div>
                })}
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn opens_on_api_tab_with_connections_and_form() {
        let rendered = LocalServerRenderer::<IntegrationPage>::new().render().await;
        assert!(rendered.contains("Google Maps API"));
        assert!(rendered.contains("SMS Gateway"));
        assert!(rendered.contains("Add Integration"));
        for (label, kind) in AVAILABLE_INTEGRATIONS.iter() {
            assert!(rendered.contains(label));
            assert!(rendered.contains(&format!("data-integration=\"{}\"", kind.as_str())));
        }
        assert!(!rendered.contains("modal active"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{click, input_value, mount_root, settle, type_into};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn added_integration_joins_the_list_and_clears_the_form() {
        let root = mount_root();
        let app = yew::Renderer::<IntegrationPage>::with_root(root.clone()).render();
        settle().await;

        type_into(&root, "input[placeholder='Service name']", "Weather Feed");
        type_into(&root, "input[placeholder='API endpoint']", "https://weather.example/api");
        settle().await;
        click(&root, "form button[type='submit']");
        settle().await;

        assert!(root.inner_html().contains("Weather Feed"));
        assert_eq!(input_value(&root, "input[placeholder='Service name']"), "");
        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn available_integration_opens_its_details() {
        let root = mount_root();
        let app = yew::Renderer::<IntegrationPage>::with_root(root.clone()).render();
        settle().await;

        click(&root, "[data-integration='slack']");
        settle().await;
        assert!(root.inner_html().contains("Slack Notifications"));
        app.destroy();
    }
}
