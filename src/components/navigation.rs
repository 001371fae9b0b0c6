use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::router::{active_items, NavItem, Route, NAV_ITEMS};

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let mobile_open = use_state(|| false);

    let toggle = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_e: MouseEvent| mobile_open.set(!*mobile_open))
    };
    // Cualquier enlace del menú móvil lo cierra, aunque apunte a la página actual
    let close_menu = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_e: MouseEvent| mobile_open.set(false))
    };

    let active: Vec<Route> = active_items(route).map(|item| item.route).collect();
    let item_classes = |target: Route| {
        classes!("nav-link", active.contains(&target).then_some("active"))
    };
    let nav_link = |item: &NavItem| {
        html! {
            <Link<Route> key={item.label} to={item.route} classes={item_classes(item.route)}>
                <span class="nav-icon">{item.icon}</span>
                {item.label}
            </Link<Route>>
        }
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand-icon">{"♻️"}</span>
                    <span class="brand-name">{CONFIG.app_name.clone()}</span>
                </Link<Route>>

                <div class="nav-desktop">
                    { for NAV_ITEMS.iter().map(nav_link) }
                </div>

                <button class="nav-toggle" aria-label="Toggle menu" aria-expanded={mobile_open.to_string()} onclick={toggle}>
                    { if *mobile_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *mobile_open {
                <div class="nav-mobile" onclick={close_menu}>
                    { for NAV_ITEMS.iter().map(nav_link) }
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        path: AttrValue,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::with_entries(vec![props.path.to_string()]));
        html! {
            <Router {history}>
                <Navigation />
            </Router>
        }
    }

    async fn render_at(path: &'static str) -> String {
        LocalServerRenderer::<Harness>::with_props(HarnessProps { path: path.into() })
            .render()
            .await
    }

    #[tokio::test]
    async fn marks_only_the_matching_item() {
        let rendered = render_at("/citizen").await;
        assert_eq!(rendered.matches("nav-link active").count(), 1);
        assert!(rendered.contains("href=\"/citizen\""));
    }

    #[tokio::test]
    async fn home_is_marked_at_root() {
        let rendered = render_at("/").await;
        assert_eq!(rendered.matches("nav-link active").count(), 1);
    }

    #[tokio::test]
    async fn unknown_path_marks_nothing() {
        let rendered = render_at("/missing").await;
        assert_eq!(rendered.matches("nav-link active").count(), 0);
    }
}
