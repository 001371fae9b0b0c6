// ============================================================================
// CITIZEN PORTAL - Reportes, recogidas, reciclaje y canales de contacto
// ============================================================================

use yew::prelude::*;

use super::{field_input, field_setter};
use crate::components::dialogs::{VoiceDialog, WhatsAppDialog};
use crate::components::{Select, TabItem, Tabs};
use crate::data::citizen::{recent_reports, recycling_tips, CONTACT_ACCESSIBILITY, ISSUE_TYPES, URGENCY_LEVELS};
use crate::hooks::use_toast;
use crate::viewmodels::citizen_viewmodel::{sms_setup_notice, submit_pickup, submit_report};
use crate::viewmodels::{PickupForm, ReportForm};

const CITIZEN_TABS: &[TabItem] = &[
    ("report", "Report Issue"),
    ("pickup", "Schedule Pickup"),
    ("education", "Learn & Recycle"),
    ("communication", "Contact Methods"),
];

#[function_component(CitizenPage)]
pub fn citizen_page() -> Html {
    let tab = use_state(|| "report");
    let report = use_state(ReportForm::default);
    let pickup = use_state(PickupForm::default);
    let whatsapp_open = use_state(|| false);
    let voice_open = use_state(|| false);
    let toast = use_toast();

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |value: &'static str| tab.set(value))
    };

    let on_report_submit = {
        let report = report.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (next, notice) = submit_report(&report);
            report.set(next);
            toast.emit(notice);
        })
    };
    let on_pickup_submit = {
        let pickup = pickup.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (next, notice) = submit_pickup(&pickup);
            pickup.set(next);
            toast.emit(notice);
        })
    };

    let on_whatsapp_change = {
        let whatsapp_open = whatsapp_open.clone();
        Callback::from(move |open: bool| whatsapp_open.set(open))
    };
    let on_voice_change = {
        let voice_open = voice_open.clone();
        Callback::from(move |open: bool| voice_open.set(open))
    };

    let content = match *tab {
        "pickup" => html! {
            <div class="card">
                <div class="card-title"><span class="card-icon text-info">{"🚛"}</span>{"Schedule Bulk Pickup"}</div>
                <p class="card-description">{"Request special collection for large items or bulk waste"}</p>
                <form class="form" onsubmit={on_pickup_submit}>
                    <textarea
                        class="form-input"
                        placeholder="List items for pickup (furniture, appliances, etc.)"
                        value={pickup.items.clone()}
                        oninput={field_input(&pickup, |f: &mut PickupForm, v| f.items = v)}
                    />
                    <input
                        class="form-input"
                        type="date"
                        value={pickup.date.clone()}
                        oninput={field_input(&pickup, |f: &mut PickupForm, v| f.date = v)}
                    />
                    <input
                        class="form-input"
                        placeholder="Pickup address"
                        value={pickup.address.clone()}
                        oninput={field_input(&pickup, |f: &mut PickupForm, v| f.address = v)}
                    />
                    <input
                        class="form-input"
                        type="tel"
                        placeholder="Contact number"
                        value={pickup.contact.clone()}
                        oninput={field_input(&pickup, |f: &mut PickupForm, v| f.contact = v)}
                    />
                    <button type="submit" class="btn btn-primary btn-block">{"📅 Schedule Pickup"}</button>
                </form>
            </div>
        },
        "education" => education_tab(),
        "communication" => {
            let open_whatsapp = on_whatsapp_change.reform(|_e: MouseEvent| true);
            let open_voice = on_voice_change.reform(|_e: MouseEvent| true);
            let on_sms = {
                let toast = toast.clone();
                Callback::from(move |_e: MouseEvent| {
                    log::info!("📱 [CITIZEN] Alertas SMS activadas");
                    toast.emit(sms_setup_notice());
                })
            };
            html! {
                <>
                    <div class="card-grid card-grid-3">
                        <div class="card card-success">
                            <div class="card-title"><span class="card-icon text-success">{"💬"}</span>{"WhatsApp"}</div>
                            <p class="card-description">{"Quick updates and service notifications"}</p>
                            <button class="btn btn-outline btn-block" onclick={open_whatsapp}>{"Connect WhatsApp"}</button>
                            <p class="text-xs text-muted">{"Available in multiple local languages"}</p>
                        </div>
                        <div class="card card-info">
                            <div class="card-title"><span class="card-icon text-info">{"📱"}</span>{"SMS Alerts"}</div>
                            <p class="card-description">{"Collection schedules and reminders"}</p>
                            <button class="btn btn-outline btn-block" onclick={on_sms}>{"Setup SMS"}</button>
                            <p class="text-xs text-muted">{"Text-based communication for all devices"}</p>
                        </div>
                        <div class="card card-accent">
                            <div class="card-title"><span class="card-icon text-accent">{"🔊"}</span>{"Voice Support"}</div>
                            <p class="card-description">{"Accessible voice-based assistance"}</p>
                            <button class="btn btn-outline btn-block" onclick={open_voice}>{"📞 Call Now"}</button>
                            <p class="text-xs text-muted">{"Multi-language voice support available"}</p>
                        </div>
                    </div>
                    <div class="card">
                        <div class="card-title">{"Accessibility Features"}</div>
                        <p class="card-description">{"Ensuring waste management services are accessible to everyone"}</p>
                        <div class="two-columns">
                            { for CONTACT_ACCESSIBILITY.iter().map(|(title, text)| html! {
                                <div>
                                    <h4>{*title}</h4>
                                    <p class="text-sm text-muted">{*text}</p>
                                </div>
                            })}
                        </div>
                    </div>
                </>
            }
        }
        _ => html! {
            <div class="two-columns">
                <div class="card">
                    <div class="card-title"><span class="card-icon text-warning">{"⚠️"}</span>{"Report Waste Issue"}</div>
                    <p class="card-description">{"Help us maintain a clean city by reporting waste management issues"}</p>
                    <form class="form" onsubmit={on_report_submit}>
                        <Select
                            label="Issue Type"
                            options={ISSUE_TYPES}
                            value={report.issue_type.clone()}
                            placeholder="Select issue type"
                            on_change={field_setter(&report, |f: &mut ReportForm, v| f.issue_type = v)}
                        />
                        <input
                            class="form-input"
                            placeholder="Location (address or landmark)"
                            value={report.location.clone()}
                            oninput={field_input(&report, |f: &mut ReportForm, v| f.location = v)}
                        />
                        <textarea
                            class="form-input"
                            placeholder="Describe the issue in detail..."
                            value={report.description.clone()}
                            oninput={field_input(&report, |f: &mut ReportForm, v| f.description = v)}
                        />
                        <Select
                            label="Urgency"
                            options={URGENCY_LEVELS}
                            value={report.urgency.clone()}
                            placeholder="Urgency level"
                            on_change={field_setter(&report, |f: &mut ReportForm, v| f.urgency = v)}
                        />
                        <div class="button-row">
                            <button type="submit" class="btn btn-primary btn-grow">{"Submit Report"}</button>
                            <button type="button" class="btn btn-outline btn-icon" aria-label="Attach photo">{"📷"}</button>
                            <button type="button" class="btn btn-outline btn-icon" aria-label="Use my location">{"📍"}</button>
                        </div>
                    </form>
                </div>

                <div class="card">
                    <div class="card-title">{"Your Recent Reports"}</div>
                    <p class="card-description">{"Track the status of your submitted reports"}</p>
                    { for recent_reports().into_iter().map(|report| html! {
                        <div class="list-row list-row-boxed" key={report.id.to_string()}>
                            <div class="card-title">
                                <span class={report.status.tone().dot_class()}></span>
                                <div>
                                    <p><strong>{report.kind}</strong></p>
                                    <p class="text-sm text-muted">{report.location}</p>
                                </div>
                            </div>
                            <div class="text-right">
                                <p class="text-sm capitalize"><strong>{report.status.label()}</strong></p>
                                <p class="text-xs text-muted">{report.date}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        },
    };

    html! {
        <div class="page">
            <div class="page-header">
                <div class="container text-center">
                    <h1>{"Citizen Portal"}</h1>
                    <p class="text-muted">{"Report issues, schedule services, and learn about proper waste management"}</p>
                </div>
            </div>

            <div class="container">
                <Tabs items={CITIZEN_TABS} active={*tab} {on_select} />
                <div class="tab-content">{content}</div>
            </div>

            <WhatsAppDialog open={*whatsapp_open} on_open_change={on_whatsapp_change} />
            <VoiceDialog open={*voice_open} on_open_change={on_voice_change} />
        </div>
    }
}

fn education_tab() -> Html {
    html! {
        <>
            <div class="card-grid card-grid-3">
                { for recycling_tips().into_iter().map(|tip| html! {
                    <div class="card" key={tip.category.to_string()}>
                        <div class="card-title">
                            <span class="card-icon">{tip.icon}</span>
                            {format!("{} Recycling", tip.category)}
                        </div>
                        <ul class="star-list">
                            { for tip.tips.iter().map(|item| html! {
                                <li><span class="text-accent">{"★"}</span>{" "}{*item}</li>
                            })}
                        </ul>
                    </div>
                })}
            </div>
            <div class="card">
                <div class="card-title"><span class="card-icon text-accent">{"🏅"}</span>{"AI Recycling Guide"}</div>
                <p class="card-description">{"Get personalized recycling advice powered by AI"}</p>
                <div class="button-row">
                    <input class="form-input btn-grow" placeholder="Ask about any item... (e.g., 'Can I recycle pizza boxes?')" />
                    <button class="btn btn-primary">{"Ask AI"}</button>
                </div>
                <p class="text-sm text-muted">{"Get instant answers about proper disposal and recycling methods"}</p>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn opens_on_report_tab_with_recent_reports() {
        let rendered = LocalServerRenderer::<CitizenPage>::new().render().await;
        assert!(rendered.contains("Report Waste Issue"));
        assert!(rendered.contains("Select issue type"));
        assert!(rendered.contains("Main St &amp; 5th Ave") || rendered.contains("Main St & 5th Ave"));
        assert!(rendered.contains("in-progress"));
        assert!(!rendered.contains("Schedule Bulk Pickup"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{click, input_value, mount_root, settle, type_into};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const LOCATION: &str = "input[placeholder^='Location']";
    const DESCRIPTION: &str = "textarea[placeholder^='Describe']";

    #[wasm_bindgen_test]
    async fn typed_report_is_cleared_after_submit() {
        let root = mount_root();
        let app = yew::Renderer::<CitizenPage>::with_root(root.clone()).render();
        settle().await;

        type_into(&root, LOCATION, "Main St & 5th Ave");
        type_into(&root, DESCRIPTION, "Overflowing bin");
        settle().await;
        assert_eq!(input_value(&root, LOCATION), "Main St & 5th Ave");

        click(&root, "button[type='submit']");
        settle().await;
        assert_eq!(input_value(&root, LOCATION), "");
        assert_eq!(input_value(&root, DESCRIPTION), "");
        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn incomplete_report_keeps_what_was_typed() {
        let root = mount_root();
        let app = yew::Renderer::<CitizenPage>::with_root(root.clone()).render();
        settle().await;

        type_into(&root, LOCATION, "Park Ave");
        settle().await;
        click(&root, "button[type='submit']");
        settle().await;
        assert_eq!(input_value(&root, LOCATION), "Park Ave");
        app.destroy();
    }
}
