// ============================================================================
// QUICK ACTIONS - Informe / planificador / solicitudes / configuración
// ============================================================================

use yew::prelude::*;

use super::bullet_list;
use crate::components::{Dialog, Select, TabItem, Tabs};
use crate::data::admin::{
    citizen_requests, ALERT_SETTINGS, COLLECTION_SCHEDULES, DATE_RANGES, DEFAULT_LANGUAGES,
    PLANNER_PRIORITIES, PLANNER_ZONES, REPORT_FEATURES, REPORT_TYPES,
};
use crate::hooks::use_toast;
use crate::models::QuickAction;
use crate::viewmodels::ReportRequest;

const CONFIG_TABS: &[TabItem] = &[("general", "General"), ("alerts", "Alerts"), ("performance", "Performance")];

const ROUTE_PERFORMANCE: [(&str, &str); 4] = [
    ("Efficiency", "94.8%"),
    ("Fuel Saved", "23%"),
    ("Time Reduced", "18 min"),
    ("CO₂ Reduced", "15%"),
];

#[derive(Properties, PartialEq)]
pub struct QuickActionsDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    pub action: Option<QuickAction>,
}

#[function_component(QuickActionsDialog)]
pub fn quick_actions_dialog(props: &QuickActionsDialogProps) -> Html {
    let request = use_state(ReportRequest::default);
    let config_tab = use_state(|| "general");
    let toast = use_toast();

    let close = {
        let cb = props.on_open_change.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(false))
    };

    let body = match props.action {
        Some(QuickAction::Report) => {
            let on_type = {
                let request = request.clone();
                Callback::from(move |value: String| {
                    request.set(ReportRequest { report_type: value, ..(*request).clone() })
                })
            };
            let on_range = {
                let request = request.clone();
                Callback::from(move |value: String| {
                    request.set(ReportRequest { date_range: value, ..(*request).clone() })
                })
            };
            let on_generate = {
                let request = request.clone();
                let toast = toast.clone();
                Callback::from(move |_e: MouseEvent| match request.generate() {
                    Ok(notice) => toast.emit(notice),
                    Err(err) => toast.emit(err.into()),
                })
            };
            html! {
                <>
                    <div class="two-columns">
                        <Select
                            label="Report Type"
                            options={REPORT_TYPES}
                            value={request.report_type.clone()}
                            placeholder="Select report type"
                            on_change={on_type}
                        />
                        <Select
                            label="Date Range"
                            options={DATE_RANGES}
                            value={request.date_range.clone()}
                            placeholder="Select date range"
                            on_change={on_range}
                        />
                    </div>
                    <div class="callout">
                        <h4>{"Report Features:"}</h4>
                        { bullet_list(&REPORT_FEATURES) }
                    </div>
                    <button class="btn btn-primary btn-block" onclick={on_generate}>{"⬇️ Generate Report"}</button>
                </>
            }
        }
        Some(QuickAction::Planner) => html! {
            <div class="card">
                <div class="card-title">{"AI Route Planner"}</div>
                <p class="card-description">{"Optimize collection routes using machine learning algorithms"}</p>
                <div class="two-columns">
                    <Select label="Zone Selection" options={PLANNER_ZONES} placeholder="Select zones" />
                    <Select label="Optimization Priority" options={PLANNER_PRIORITIES} placeholder="Select priority" />
                </div>
                <div class="callout callout-info">
                    <h5>{"Current Route Performance:"}</h5>
                    <div class="two-columns text-sm">
                        { for ROUTE_PERFORMANCE.iter().map(|(label, value)| html! {
                            <div>{format!("{}: ", label)}<strong>{*value}</strong></div>
                        })}
                    </div>
                </div>
                <button class="btn btn-primary btn-block">{"📍 Optimize Routes"}</button>
            </div>
        },
        Some(QuickAction::Requests) => {
            let requests = citizen_requests();
            html! {
                <>
                    <div class="card-row">
                        <h3>{"Citizen Requests Management"}</h3>
                        <span class="text-muted">{format!("{} pending requests", requests.len())}</span>
                    </div>
                    { for requests.iter().map(|request| html! {
                        <div class="card card-compact" key={request.id.to_string()}>
                            <div class="card-row">
                                <div class="card-title">
                                    <span class={request.priority.tone().dot_class()}></span>
                                    <div>
                                        <p><strong>{request.kind}</strong></p>
                                        <p class="text-muted">{request.location}</p>
                                    </div>
                                </div>
                                <div class="text-right">
                                    <p><strong>{request.id}</strong></p>
                                    <p class="text-xs text-muted">{request.date}</p>
                                </div>
                            </div>
                        </div>
                    })}
                    <button class="btn btn-outline btn-block">{"👥 View All Requests"}</button>
                </>
            }
        }
        Some(QuickAction::Config) => {
            let on_select = {
                let config_tab = config_tab.clone();
                Callback::from(move |value: &'static str| config_tab.set(value))
            };
            let content = match *config_tab {
                "alerts" => html! {
                    <div class="card">
                        <div class="card-title">{"Alert Settings"}</div>
                        { for ALERT_SETTINGS.iter().map(|setting| html! {
                            <div class="list-row list-row-boxed">
                                <span class="text-sm">{*setting}</span>
                                <button class="btn btn-outline btn-sm">{"Enabled"}</button>
                            </div>
                        })}
                    </div>
                },
                "performance" => html! {
                    <div class="card">
                        <div class="card-title">{"Performance Thresholds"}</div>
                        <div class="form-field">
                            <label class="form-label">{"Minimum Efficiency (%)"}</label>
                            <input class="form-input" type="number" value="85" />
                        </div>
                        <div class="form-field">
                            <label class="form-label">{"Max Response Time (minutes)"}</label>
                            <input class="form-input" type="number" value="15" />
                        </div>
                    </div>
                },
                _ => html! {
                    <div class="card">
                        <div class="card-title">{"System Configuration"}</div>
                        <Select label="Collection Schedule" options={COLLECTION_SCHEDULES} value="daily-6" />
                        <Select label="Default Language" options={DEFAULT_LANGUAGES} value="en" />
                    </div>
                },
            };
            html! {
                <>
                    <Tabs items={CONFIG_TABS} active={*config_tab} {on_select} />
                    <div class="tab-content">{content}</div>
                </>
            }
        }
        None => html! {},
    };

    let (title, icon, description) = match props.action {
        Some(action) => (action.title(), action.icon(), Some(action.description())),
        None => ("Quick Actions", "⚙️", None),
    };

    html! {
        <Dialog
            open={props.open}
            on_open_change={props.on_open_change.clone()}
            {title}
            {icon}
            description={description.map(AttrValue::from)}
        >
            {body}
            <div class="dialog-actions dialog-actions-end">
                <button class="btn btn-outline" onclick={close}>{"Close"}</button>
            </div>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render(action: Option<QuickAction>) -> String {
        let props = QuickActionsDialogProps { open: true, on_open_change: Callback::noop(), action };
        LocalServerRenderer::<QuickActionsDialog>::with_props(props).render().await
    }

    #[tokio::test]
    async fn each_action_renders_its_own_body() {
        assert!(render(Some(QuickAction::Report)).await.contains("Report Features:"));
        assert!(render(Some(QuickAction::Planner)).await.contains("AI Route Planner"));
        assert!(render(Some(QuickAction::Requests)).await.contains("4 pending requests"));
        assert!(render(Some(QuickAction::Config)).await.contains("Collection Schedule"));
    }

    #[tokio::test]
    async fn no_action_renders_the_bare_frame() {
        let rendered = render(None).await;
        assert!(rendered.contains("Quick Actions"));
        assert!(!rendered.contains("Report Features:"));
        assert!(!rendered.contains("AI Route Planner"));
    }
}
