// ============================================================================
// APP - Raíz: router del navegador, toasts, navegación y página actual
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::{AccessibilityPage, AdminPage, CitizenPage, HomePage, IntegrationPage, NotFoundPage};
use crate::components::{Navigation, Toaster};
use crate::hooks::ToastProvider;
use crate::router::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

/// Todo lo que cuelga del router; los tests lo montan sobre un MemoryHistory
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    html! {
        <ToastProvider>
            <div class="app">
                <Navigation />
                <main class="app-main">
                    <Switch<Route> render={switch} />
                </main>
                <Toaster />
            </div>
        </ToastProvider>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::Citizen => html! { <CitizenPage /> },
        Route::Integration => html! { <IntegrationPage /> },
        Route::Accessibility => html! { <AccessibilityPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
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
                <AppShell />
            </Router>
        }
    }

    async fn render(path: &'static str) -> String {
        LocalServerRenderer::<Harness>::with_props(HarnessProps { path: path.into() })
            .render()
            .await
    }

    #[tokio::test]
    async fn renders_the_page_for_each_route() {
        assert!(render("/").await.contains("Sustainable Cities"));
        assert!(render("/admin").await.contains("Monitor and optimize city-wide waste management operations"));
        assert!(render("/citizen").await.contains("Report Waste Issue"));
        assert!(render("/integration").await.contains("Manage APIs, IoT devices, and system integrations"));
        assert!(render("/accessibility").await.contains("Accessibility Center"));
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_inside_the_shell() {
        let rendered = render("/recycling-bins").await;
        assert!(rendered.contains("Oops! Page not found"));
        assert!(rendered.contains("SmartWaste"));
    }
}
