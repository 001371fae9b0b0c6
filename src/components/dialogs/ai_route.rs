use yew::prelude::*;

use super::{callout, close_button, feature_cards, highlight_grid, titled_list, DialogControlProps};
use crate::components::Dialog;
use crate::data::insights::{
    optimization_features, optimization_stats, OPTIMIZATION_ALGORITHMS, OPTIMIZATION_DATA_SOURCES,
};

#[function_component(AiRouteDialog)]
pub fn ai_route_dialog(props: &DialogControlProps) -> Html {
    html! {
        <Dialog
            open={props.open}
            on_open_change={props.on_open_change.clone()}
            icon="📈"
            title="AI-Powered Route Optimization"
            description="Advanced machine learning algorithms optimizing waste collection for maximum efficiency"
            wide={true}
        >
            { highlight_grid(&optimization_stats()) }
            { feature_cards(&optimization_features()) }

            <div class="card">
                <div class="card-title"><span class="card-icon">{"🧠"}</span>{"Technical Implementation"}</div>
                <div class="two-columns">
                    { titled_list("Algorithms Used:", &OPTIMIZATION_ALGORITHMS) }
                    { titled_list("Data Sources:", &OPTIMIZATION_DATA_SOURCES) }
                </div>
                { callout(
                    "Environmental Impact:",
                    "Our AI optimization has reduced carbon emissions by 15% through efficient routing, \
                     saving approximately 2,340 liters of fuel monthly across the city fleet."
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
    async fn shows_algorithms_and_data_sources() {
        let props = DialogControlProps { open: true, on_open_change: Callback::noop() };
        let rendered = LocalServerRenderer::<AiRouteDialog>::with_props(props).render().await;
        assert!(rendered.contains("AI-Powered Route Optimization"));
        assert!(rendered.contains("Algorithms Used:"));
        assert!(rendered.contains("Data Sources:"));
    }
}
