use yew::prelude::*;

use super::{chart_placeholder, figure_grid};
use crate::components::{Dialog, Progress, TabItem, Tabs};
use crate::data::insights::{
    endpoint_metrics, health_overview, network_overview, services, system_alerts, system_metrics,
};
use crate::models::MonitorKind;

const HEALTH_TABS: &[TabItem] = &[("overview", "Overview"), ("services", "Services"), ("alerts", "Alerts")];

#[derive(Properties, PartialEq)]
pub struct SystemHealthDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    pub kind: Option<MonitorKind>,
}

#[function_component(SystemHealthDialog)]
pub fn system_health_dialog(props: &SystemHealthDialogProps) -> Html {
    let tab = use_state(|| "overview");
    let on_select = {
        let tab = tab.clone();
        Callback::from(move |value: &'static str| tab.set(value))
    };
    let close = {
        let cb = props.on_open_change.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(false))
    };

    match props.kind {
        Some(MonitorKind::Health) => {
            let content = match *tab {
                "services" => services_tab(),
                "alerts" => alerts_tab(),
                _ => overview_tab(),
            };
            html! {
                <Dialog
                    open={props.open}
                    on_open_change={props.on_open_change.clone()}
                    icon="⚡"
                    title="System Health Monitor"
                    description="Real-time monitoring of all system components and services"
                    wide={true}
                >
                    <Tabs items={HEALTH_TABS} active={*tab} {on_select} />
                    <div class="tab-content">{content}</div>
                    <button class="btn btn-primary btn-block" onclick={close}>{"Close Monitor"}</button>
                </Dialog>
            }
        }
        Some(MonitorKind::Network) => html! {
            <Dialog
                open={props.open}
                on_open_change={props.on_open_change.clone()}
                icon="🌐"
                title="Network Performance Monitor"
                description="API response times and network connectivity statistics"
                wide={true}
            >
                { network_body() }
                <button class="btn btn-primary btn-block" onclick={close}>{"Close Network Monitor"}</button>
            </Dialog>
        },
        None => html! {
            <Dialog open={props.open} on_open_change={props.on_open_change.clone()} title="System Monitor" />
        },
    }
}

fn overview_tab() -> Html {
    html! {
        <>
            <div class="tile-grid">
                { for system_metrics().iter().map(|metric| html! {
                    <div class="card card-compact">
                        <div class="card-row">
                            <span>{metric.icon}{" "}{metric.name}</span>
                            <strong class={metric.health.tone().text_class()}>{format!("{}%", metric.value)}</strong>
                        </div>
                        <Progress value={metric.value} />
                    </div>
                })}
            </div>
            <div class="card">
                <div class="card-title"><span class="card-icon text-success">{"📈"}</span>{"Overall System Health"}</div>
                { figure_grid(&health_overview()) }
            </div>
        </>
    }
}

fn services_tab() -> Html {
    html! {
        <div class="card-grid">
            { for services().iter().map(|service| html! {
                <div class="card">
                    <div class="card-row">
                        <div class="card-title">{service.name}</div>
                        <span class={service.health.tone().badge_class()}>{service.health.label()}</span>
                    </div>
                    <div class="two-columns text-sm">
                        <div><span class="text-muted">{"Uptime:"}</span>{" "}<strong>{service.uptime}</strong></div>
                        <div><span class="text-muted">{"Response:"}</span>{" "}<strong>{service.response}</strong></div>
                    </div>
                </div>
            })}
        </div>
    }
}

fn alerts_tab() -> Html {
    html! {
        <div class="card">
            <div class="card-title">{"System Alerts & Notifications"}</div>
            <p class="card-description">{"Recent system events and status changes"}</p>
            { for system_alerts().iter().map(|alert| html! {
                <div class="alert-row">
                    <span class={alert.kind.tone().text_class()}>{alert.kind.icon()}</span>
                    <div>
                        <p class="alert-message">{alert.message}</p>
                        <p class="text-xs text-muted">{alert.time}</p>
                    </div>
                </div>
            })}
        </div>
    }
}

fn network_body() -> Html {
    html! {
        <>
            { figure_grid(&network_overview()) }
            <div class="card">
                <div class="card-title">{"API Endpoint Performance"}</div>
                <p class="card-description">{"Response times and success rates for external integrations"}</p>
                { for endpoint_metrics().iter().map(|endpoint| html! {
                    <div class="list-row list-row-boxed">
                        <div>
                            <p class="text-sm"><strong>{"🌐 "}{endpoint.endpoint}</strong></p>
                            <p class="text-xs text-muted">
                                {format!("Latency: {} | Success: {}", endpoint.latency, endpoint.success)}
                            </p>
                        </div>
                        <div class={classes!("text-right", endpoint.error_tone().text_class())}>
                            {format!("{} errors", endpoint.errors)}
                        </div>
                    </div>
                })}
            </div>
            <div class="card">
                <div class="card-title">{"Network Traffic Analysis"}</div>
                <p class="card-description">{"Real-time data flow and bandwidth usage"}</p>
                { chart_placeholder("📈", "Network traffic visualization would display here") }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render(kind: Option<MonitorKind>) -> String {
        let props = SystemHealthDialogProps { open: true, on_open_change: Callback::noop(), kind };
        LocalServerRenderer::<SystemHealthDialog>::with_props(props).render().await
    }

    #[tokio::test]
    async fn health_and_network_render_their_own_branch() {
        let health = render(Some(MonitorKind::Health)).await;
        assert!(health.contains("System Health Monitor"));
        assert!(health.contains("CPU Usage"));
        assert!(!health.contains("API Endpoint Performance"));

        let network = render(Some(MonitorKind::Network)).await;
        assert!(network.contains("Network Performance Monitor"));
        assert!(network.contains("WhatsApp Business"));
        assert!(network.contains("23 errors"));
    }

    #[tokio::test]
    async fn missing_kind_renders_frame_only() {
        let rendered = render(None).await;
        assert!(rendered.contains("modal active"));
        assert!(!rendered.contains("CPU Usage"));
        assert!(!rendered.contains("API Endpoint Performance"));
    }
}
