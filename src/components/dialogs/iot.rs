use yew::prelude::*;

use super::{callout, check_list, close_button, titled_list, DialogControlProps};
use crate::components::Dialog;
use crate::data::insights::{device_types, network_stats, IOT_SPECIFICATIONS};

#[function_component(IotDialog)]
pub fn iot_dialog(props: &DialogControlProps) -> Html {
    html! {
        <Dialog
            open={props.open}
            on_open_change={props.on_open_change.clone()}
            icon="📶"
            title="Smart IoT Integration Network"
            description="Comprehensive IoT ecosystem for intelligent waste management monitoring"
            wide={true}
        >
            <div class="tile-grid">
                { for network_stats().iter().map(|stat| html! {
                    <div class="tile">
                        <div class="tile-value">{stat.value}</div>
                        <div class="tile-label">{stat.label}</div>
                        <div class="text-success">{stat.icon}</div>
                    </div>
                })}
            </div>

            { for device_types().iter().map(|device| html! {
                <div class="card">
                    <div class="card-row">
                        <div class="card-title">
                            <span class="card-icon">{device.icon}</span>
                            <div>
                                <span>{device.name}</span>
                                <div class="text-muted">{format!("{} devices deployed", device.count)}</div>
                            </div>
                        </div>
                        <span class="badge badge-success">{device.status}</span>
                    </div>
                    <p class="card-description">{device.description}</p>
                    { check_list(&device.features) }
                </div>
            })}

            <div class="card">
                <div class="card-title"><span class="card-icon">{"🔋"}</span>{"Technical Specifications"}</div>
                <div class="two-columns">
                    { for IOT_SPECIFICATIONS.iter().map(|(title, points)| titled_list(*title, points)) }
                </div>
                { callout(
                    "Real-time Benefits:",
                    "IoT integration has improved collection efficiency by 34%, reduced overflow incidents by 78%, \
                     and enabled predictive maintenance that prevents 92% of equipment failures."
                ) }
            </div>

            { close_button(&props.on_open_change) }
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn closed_iot_dialog_renders_nothing() {
        let props = DialogControlProps { open: false, on_open_change: Callback::noop() };
        let rendered = LocalServerRenderer::<IotDialog>::with_props(props).render().await;
        assert!(!rendered.contains("Smart IoT Integration Network"));
    }

    #[tokio::test]
    async fn open_iot_dialog_shows_specifications() {
        let props = DialogControlProps { open: true, on_open_change: Callback::noop() };
        let rendered = LocalServerRenderer::<IotDialog>::with_props(props).render().await;
        assert!(rendered.contains("Smart IoT Integration Network"));
        assert!(rendered.contains("Technical Specifications"));
    }
}
