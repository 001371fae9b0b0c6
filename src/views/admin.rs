// ============================================================================
// ADMIN DASHBOARD - Estadísticas, rutas y acciones rápidas
// ============================================================================

use yew::prelude::*;

use super::data_tag;
use crate::components::dialogs::{chart_placeholder, AnalyticsDialog, QuickActionsDialog};
use crate::components::{StatCard, TabItem, Tabs};
use crate::config::CONFIG;
use crate::data::admin::{admin_stats, collection_routes, recent_alerts};
use crate::hooks::use_simulated_task;
use crate::models::QuickAction;
use crate::state::DialogState;

const ADMIN_TABS: &[TabItem] = &[
    ("overview", "Overview"),
    ("routes", "Routes"),
    ("analytics", "Analytics"),
    ("settings", "Settings"),
];

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let tab = use_state(|| "overview");
    let refresh = use_simulated_task(CONFIG.simulation_config.refresh_delay_ms);
    let quick_action = use_state(DialogState::<QuickAction>::default);
    let analytics_open = use_state(|| false);

    let on_refresh = {
        let run = refresh.run.clone();
        Callback::from(move |_e: MouseEvent| {
            log::info!("🔄 [ADMIN] Refrescando datos");
            run.emit(Callback::from(|_: ()| log::info!("✅ [ADMIN] Datos actualizados")));
        })
    };

    let open_action = {
        let quick_action = quick_action.clone();
        Callback::from(move |action: QuickAction| {
            log::debug!("⚡ [ADMIN] Acción rápida {}", action.as_str());
            quick_action.set(DialogState::opened(action));
        })
    };
    let on_action_open_change = {
        let quick_action = quick_action.clone();
        Callback::from(move |open: bool| quick_action.set(quick_action.with_open(open)))
    };
    let on_analytics_open_change = {
        let analytics_open = analytics_open.clone();
        Callback::from(move |open: bool| analytics_open.set(open))
    };
    let on_select = {
        let tab = tab.clone();
        Callback::from(move |value: &'static str| tab.set(value))
    };

    let content = match *tab {
        "routes" => routes_tab(),
        "analytics" => {
            let open = on_analytics_open_change.reform(|_e: MouseEvent| true);
            html! {
                <div class="card">
                    <div class="card-title">{"Analytics Dashboard"}</div>
                    <p class="card-description">{"Detailed insights and performance metrics"}</p>
                    { chart_placeholder("📊", "Analytics charts and data visualizations will be integrated here") }
                    <button class="btn btn-primary" onclick={open}>{"📊 Open Advanced Analytics"}</button>
                </div>
            }
        }
        "settings" => {
            let open = open_action.reform(|_e: MouseEvent| QuickAction::Config);
            html! {
                <div class="card">
                    <div class="card-title">{"System Settings"}</div>
                    <p class="card-description">{"Configure system parameters and preferences"}</p>
                    { chart_placeholder("⚙️", "System configuration options will be available here") }
                    <button class="btn btn-primary" onclick={open}>{"⚙️ Open System Configuration"}</button>
                </div>
            }
        }
        _ => overview_tab(&open_action),
    };

    html! {
        <div class="page">
            <div class="page-header">
                <div class="container page-header-row">
                    <div>
                        <h1>{"Admin Dashboard"}</h1>
                        <p class="text-muted">{"Monitor and optimize city-wide waste management operations"}</p>
                    </div>
                    <div class="button-row">
                        <button class="btn btn-outline" disabled={refresh.running} onclick={on_refresh}>
                            <span class={classes!("icon", refresh.running.then_some("spin"))}>{"🔄"}</span>
                            {" Refresh Data"}
                        </button>
                        <button class="btn btn-primary" onclick={open_action.reform(|_e: MouseEvent| QuickAction::Report)}>
                            {"⬇️ Export Report"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="container">
                <div class="card-grid card-grid-4">
                    { for admin_stats().into_iter().map(|stat| html! {
                        <StatCard
                            key={stat.title.to_string()}
                            title={stat.title}
                            value={stat.value}
                            icon={stat.icon}
                            trend={stat.trend}
                            variant={stat.variant}
                        />
                    })}
                </div>

                <Tabs items={ADMIN_TABS} active={*tab} {on_select} />
                <div class="tab-content">{content}</div>
            </div>

            <QuickActionsDialog
                open={quick_action.open}
                on_open_change={on_action_open_change}
                action={quick_action.target}
            />
            <AnalyticsDialog open={*analytics_open} on_open_change={on_analytics_open_change} />
        </div>
    }
}

fn overview_tab(open_action: &Callback<QuickAction>) -> Html {
    let on_quick_action = {
        let open_action = open_action.clone();
        Callback::from(move |e: MouseEvent| {
            match data_tag(&e, "action").as_deref().and_then(QuickAction::parse) {
                Some(action) => open_action.emit(action),
                None => log::warn!("⚠️ [ADMIN] Botón sin acción reconocible"),
            }
        })
    };

    html! {
        <div class="two-columns">
            <div class="card">
                <div class="card-title"><span class="card-icon text-warning">{"⚠️"}</span>{"Recent Alerts"}</div>
                <p class="card-description">{"Real-time system notifications and warnings"}</p>
                { for recent_alerts().into_iter().map(|alert| html! {
                    <div class="alert-row" key={alert.id}>
                        <span class={alert.kind.tone().dot_class()}></span>
                        <div>
                            <p class="alert-message">{alert.message}</p>
                            <p class="text-xs text-muted">{alert.time}</p>
                        </div>
                    </div>
                })}
            </div>

            <div class="card">
                <div class="card-title"><span class="card-icon text-primary">{"⚙️"}</span>{"Quick Actions"}</div>
                <p class="card-description">{"Frequently used management tools"}</p>
                <div class="action-grid">
                    { for QuickAction::ALL.iter().map(|action| html! {
                        <button
                            class="btn btn-outline btn-tile"
                            key={action.as_str()}
                            data-action={action.as_str()}
                            onclick={on_quick_action.clone()}
                        >
                            <span class="tile-icon">{action.icon()}</span>
                            <span class="text-sm">{action.button_label()}</span>
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

fn routes_tab() -> Html {
    html! {
        <div class="card">
            <div class="card-title">{"Collection Routes Status"}</div>
            <p class="card-description">{"Monitor active routes and optimize collection efficiency"}</p>
            { for collection_routes().into_iter().map(|route| html! {
                <div class="list-row list-row-boxed" key={route.id.to_string()}>
                    <div class="card-title">
                        <span class={route.status.tone().dot_class()}></span>
                        <strong>{route.id}</strong>
                        <div>
                            <p><strong>{route.zone}</strong></p>
                            <p class="text-sm text-muted">{format!("{} trucks assigned", route.trucks)}</p>
                        </div>
                    </div>
                    <div class="text-right">
                        <p><strong>{format!("{}% efficiency", route.efficiency)}</strong></p>
                        <p class="text-sm text-muted capitalize">{route.status.label()}</p>
                    </div>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn renders_stats_overview_and_quick_actions() {
        let rendered = LocalServerRenderer::<AdminPage>::new().render().await;
        assert!(rendered.contains("Active Collection Routes"));
        assert!(rendered.contains("+8% from last week"));
        assert!(rendered.contains("Bin #247 at Park Ave is 95% full"));
        for action in QuickAction::ALL {
            assert!(rendered.contains(action.button_label()));
            assert!(rendered.contains(&format!("data-action=\"{}\"", action.as_str())));
        }
        assert!(rendered.contains("Refresh Data"));
        assert!(!rendered.contains("modal active"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{click, mount_root, settle};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn quick_action_button_opens_its_dialog() {
        let root = mount_root();
        let app = yew::Renderer::<AdminPage>::with_root(root.clone()).render();
        settle().await;
        assert!(!root.inner_html().contains("Citizen Requests Management"));

        // El click nace en la etiqueta interior del botón
        click(&root, "[data-action='requests'] .text-sm");
        settle().await;
        assert!(root.inner_html().contains("Citizen Requests Management"));
        app.destroy();
    }
}
