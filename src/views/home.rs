// ============================================================================
// HOME - Portada: características, portales y cifras
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dialogs::{AiRouteDialog, AnalyticsDialog, IotDialog, MultiModalDialog};
use crate::data::home::{features, headline_stats, portals, INCLUSION_POINTS};
use crate::models::Showcase;
use crate::router::Route;
use crate::state::DialogState;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let showcase = use_state(DialogState::<Showcase>::default);

    let on_open_change = {
        let showcase = showcase.clone();
        Callback::from(move |open: bool| showcase.set(showcase.with_open(open)))
    };
    let is_open = |target: Showcase| showcase.open && showcase.target == Some(target);

    html! {
        <div class="page">
            <section class="hero">
                <div class="container hero-grid">
                    <div>
                        <h1 class="hero-title">
                            {"Smart Waste Management for "}
                            <span class="hero-highlight">{"Sustainable Cities"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"AI-powered optimization, IoT integration, and inclusive communication channels for efficient urban waste management systems."}
                        </p>
                        <div class="button-row">
                            <Link<Route> to={Route::Admin} classes="btn btn-light btn-lg">{"📊 View Dashboard"}</Link<Route>>
                            <Link<Route> to={Route::Citizen} classes="btn btn-ghost-light btn-lg">{"👥 Citizen Services"}</Link<Route>>
                        </div>
                    </div>
                    <div class="hero-art" role="img" aria-label="Smart city waste management with IoT sensors and route optimization">
                        {"🏙️"}
                    </div>
                </div>
            </section>

            <section class="section section-tinted">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Intelligent Waste Management System"}</h2>
                        <p class="text-muted">
                            {"Leveraging GenAI, IoT sensors, and multi-modal communication to create efficient, accessible, and sustainable waste management solutions."}
                        </p>
                    </div>
                    <div class="card-grid card-grid-4">
                        { for features().into_iter().map(|(feature, target)| {
                            let onclick = {
                                let showcase = showcase.clone();
                                Callback::from(move |_e: MouseEvent| {
                                    log::debug!("🔎 [HOME] Abriendo {:?}", target);
                                    showcase.set(DialogState::opened(target));
                                })
                            };
                            html! {
                                <button class="card card-clickable" {onclick} key={feature.title.to_string()}>
                                    <div class="card-icon card-icon-lg">{feature.icon}</div>
                                    <div class="card-title">{feature.title}</div>
                                    <p class="card-description">{feature.description}</p>
                                </button>
                            }
                        })}
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Access System Portals"}</h2>
                        <p class="text-muted">{"Choose your access point to the waste management ecosystem"}</p>
                    </div>
                    <div class="card-grid card-grid-2">
                        { for portals().into_iter().map(|portal| html! {
                            <div class="card" key={portal.title}>
                                <div class="card-row">
                                    <div class="card-title">
                                        <span class="card-icon">{portal.icon}</span>
                                        <div>
                                            <span>{portal.title}</span>
                                            <p class="card-description">{portal.description}</p>
                                        </div>
                                    </div>
                                    <span class="text-muted">{"→"}</span>
                                </div>
                                <Link<Route> to={portal.route} classes={classes!(portal.button_class, "btn-block")}>
                                    {format!("Access {}", portal.title)}
                                </Link<Route>>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container stats-row">
                    { for headline_stats().into_iter().map(|(value, label, tone)| html! {
                        <div class="headline-stat">
                            <div class={classes!("headline-value", tone.text_class())}>{value}</div>
                            <div class="text-muted">{label}</div>
                        </div>
                    })}
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="panel two-columns">
                        <div>
                            <h2>{"Inclusive & Accessible Design"}</h2>
                            <p class="text-muted">
                                {"Our system ensures waste management services are accessible to all citizens through multiple communication channels, multi-language support, and comprehensive accessibility features."}
                            </p>
                            <div class="check-list">
                                { for INCLUSION_POINTS.iter().map(|point| html! {
                                    <div class="check-item"><span class="text-success">{"✓"}</span><span>{*point}</span></div>
                                })}
                            </div>
                        </div>
                        <div class="panel-action">
                            <Link<Route> to={Route::Accessibility} classes="btn btn-primary btn-lg">{"♿ Explore Accessibility Features"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </section>

            <AiRouteDialog open={is_open(Showcase::AiRoute)} on_open_change={on_open_change.clone()} />
            <IotDialog open={is_open(Showcase::Iot)} on_open_change={on_open_change.clone()} />
            <MultiModalDialog open={is_open(Showcase::MultiModal)} on_open_change={on_open_change.clone()} />
            <AnalyticsDialog open={is_open(Showcase::Analytics)} {on_open_change} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[function_component(Harness)]
    fn harness() -> Html {
        let history = AnyHistory::from(MemoryHistory::with_entries(vec!["/"]));
        html! {
            <Router {history}>
                <HomePage />
            </Router>
        }
    }

    #[tokio::test]
    async fn renders_features_portals_and_stats_without_dialogs() {
        let rendered = LocalServerRenderer::<Harness>::new().render().await;
        assert!(rendered.contains("Sustainable Cities"));
        assert!(rendered.contains("AI-Powered Route Optimization"));
        assert!(rendered.contains("Access Accessibility Center"));
        assert!(rendered.contains("45.2T"));
        assert!(!rendered.contains("modal active"));
    }

    #[tokio::test]
    async fn portal_links_point_at_their_routes() {
        let rendered = LocalServerRenderer::<Harness>::new().render().await;
        for path in ["/admin", "/citizen", "/integration", "/accessibility"] {
            assert!(rendered.contains(&format!("href=\"{}\"", path)));
        }
    }
}
