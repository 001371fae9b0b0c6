use yew::prelude::*;

use super::{bullet_list, close_button, DialogControlProps};
use crate::components::Dialog;
use crate::data::insights::{communication_channels, language_coverage, INCLUSION_FEATURES};

#[function_component(MultiModalDialog)]
pub fn multi_modal_dialog(props: &DialogControlProps) -> Html {
    html! {
        <Dialog
            open={props.open}
            on_open_change={props.on_open_change.clone()}
            icon="👥"
            title="Multi-Modal Communication System"
            description="Inclusive communication channels ensuring accessibility for all urban population segments"
            wide={true}
        >
            <div class="card-grid">
                { for communication_channels().iter().map(|channel| html! {
                    <div class="card">
                        <div class="card-row">
                            <div class="card-title">
                                <span class="card-icon">{channel.icon}</span>
                                <div>
                                    <span>{channel.name}</span>
                                    <div class="text-xs text-muted">{format!("{} active users", channel.users)}</div>
                                </div>
                            </div>
                            <span class="badge badge-success">{channel.status}</span>
                        </div>
                        <p class="card-description">{channel.description}</p>
                        <div class="list-row text-xs">
                            <span>{"Languages:"}</span>
                            <strong>{format!("{} supported", channel.languages)}</strong>
                        </div>
                        { bullet_list(&channel.features) }
                    </div>
                })}
            </div>

            <div class="card">
                <div class="card-title"><span class="card-icon">{"🌐"}</span>{"Multi-Language Support"}</div>
                <p class="card-description">{"Comprehensive language coverage for inclusive communication"}</p>
                <div class="tile-grid">
                    { for language_coverage().iter().map(|lang| html! {
                        <div class="tile tile-left">
                            <div class="card-row">
                                <strong>{lang.language}</strong>
                                <span class="badge badge-secondary">{lang.coverage}</span>
                            </div>
                            <div class="text-xs text-muted">{format!("{} users", lang.users)}</div>
                        </div>
                    })}
                </div>
            </div>

            <div class="card">
                <div class="card-title"><span class="card-icon">{"🔊"}</span>{"Accessibility & Inclusion"}</div>
                <p class="card-description">{"Ensuring waste management services are accessible to all citizens"}</p>
                <div class="two-columns">
                    <div>
                        <h5>{"Accessibility Features:"}</h5>
                        { bullet_list(&INCLUSION_FEATURES) }
                    </div>
                    <div>
                        <h5>{"Economic Inclusion:"}</h5>
                        <div class="callout callout-success">
                            <h6>{"Low-Income Support"}</h6>
                            <p>{"Free SMS services and voice calls for basic waste management needs"}</p>
                        </div>
                        <div class="callout callout-info">
                            <h6>{"Digital Divide Bridge"}</h6>
                            <p>{"Offline-capable features and basic phone compatibility"}</p>
                        </div>
                    </div>
                </div>
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
    async fn lists_channels_and_language_coverage() {
        let props = DialogControlProps { open: true, on_open_change: Callback::noop() };
        let rendered = LocalServerRenderer::<MultiModalDialog>::with_props(props).render().await;
        assert!(rendered.contains("WhatsApp Business"));
        assert!(rendered.contains("SMS Gateway"));
        assert!(rendered.contains("Multi-Language Support"));
    }
}
