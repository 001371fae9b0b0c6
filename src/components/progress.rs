use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    /// Porcentaje 0..=100 (se recorta)
    pub value: u8,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Progress)]
pub fn progress(props: &ProgressProps) -> Html {
    let value = props.value.min(100);
    html! {
        <div class={classes!("progress", props.class.clone())} role="progressbar" aria-valuenow={value.to_string()}>
            <div class="progress-bar" style={format!("width: {}%", value)}></div>
        </div>
    }
}
