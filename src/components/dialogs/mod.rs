// ============================================================================
// DIALOGS - Diálogos informativos y de acción
// ============================================================================

pub mod ai_route;
pub mod analytics;
pub mod audio;
pub mod integration_details;
pub mod iot;
pub mod multi_modal;
pub mod quick_actions;
pub mod system_health;
pub mod voice;
pub mod whatsapp;

pub use ai_route::AiRouteDialog;
pub use analytics::AnalyticsDialog;
pub use audio::AudioDialog;
pub use integration_details::IntegrationDetailsDialog;
pub use iot::IotDialog;
pub use multi_modal::MultiModalDialog;
pub use quick_actions::QuickActionsDialog;
pub use system_health::SystemHealthDialog;
pub use voice::VoiceDialog;
pub use whatsapp::WhatsAppDialog;

use yew::prelude::*;

use crate::models::{Feature, Highlight, Tone};

/// Props comunes de los diálogos sin discriminante
#[derive(Properties, PartialEq)]
pub struct DialogControlProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
}

pub(crate) fn bullet_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="bullet-list">
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

pub(crate) fn titled_list(title: &'static str, items: &[&'static str]) -> Html {
    html! {
        <div class="titled-list">
            <h5>{title}</h5>
            { bullet_list(items) }
        </div>
    }
}

pub(crate) fn check_list(items: &[&'static str]) -> Html {
    html! {
        <div class="check-list">
            { for items.iter().map(|item| html! {
                <div class="check-item"><span class="text-success">{"✓"}</span><span>{*item}</span></div>
            })}
        </div>
    }
}

pub(crate) fn highlight_grid(highlights: &[Highlight]) -> Html {
    html! {
        <div class="tile-grid">
            { for highlights.iter().map(|h| html! {
                <div class="tile">
                    <div class="tile-icon">{h.icon}</div>
                    <div class="tile-value">{h.value}</div>
                    <div class="tile-label">{h.label}</div>
                </div>
            })}
        </div>
    }
}

/// Cifras (valor, etiqueta, tono)
pub(crate) fn figure_grid(figures: &[(&'static str, &'static str, Tone)]) -> Html {
    html! {
        <div class="tile-grid">
            { for figures.iter().map(|(value, label, tone)| html! {
                <div class="tile">
                    <div class={classes!("tile-value", tone.text_class())}>{*value}</div>
                    <div class="tile-label">{*label}</div>
                </div>
            })}
        </div>
    }
}

pub(crate) fn feature_cards(features: &[Feature]) -> Html {
    html! {
        <div class="card-grid">
            { for features.iter().map(|f| html! {
                <div class="card">
                    <div class="card-title"><span class="card-icon">{f.icon}</span>{f.title}</div>
                    <p class="card-description">{f.description}</p>
                </div>
            })}
        </div>
    }
}

pub(crate) fn callout(title: &'static str, text: &'static str) -> Html {
    html! {
        <div class="callout">
            <h5>{title}</h5>
            <p>{text}</p>
        </div>
    }
}

pub(crate) fn chart_placeholder(icon: &'static str, text: &'static str) -> Html {
    html! {
        <div class="chart-placeholder">
            <div class="chart-icon">{icon}</div>
            <p class="text-muted">{text}</p>
        </div>
    }
}

pub(crate) fn close_button(on_open_change: &Callback<bool>) -> Html {
    let cb = on_open_change.clone();
    html! {
        <button class="btn btn-primary btn-block" onclick={Callback::from(move |_e: MouseEvent| cb.emit(false))}>
            {"Close"}
        </button>
    }
}
