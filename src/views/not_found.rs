use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with(path, |path| {
        log::error!("❌ [ROUTER] 404: ruta inexistente {}", path);
    });

    html! {
        <div class="page page-centered">
            <div class="text-center">
                <h1 class="not-found-code">{"404"}</h1>
                <p class="text-muted">{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Return to Home"}</Link<Route>>
            </div>
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
        let history = AnyHistory::from(MemoryHistory::with_entries(vec!["/missing"]));
        html! {
            <Router {history}>
                <NotFoundPage />
            </Router>
        }
    }

    #[tokio::test]
    async fn links_back_home() {
        let rendered = LocalServerRenderer::<Harness>::new().render().await;
        assert!(rendered.contains("404"));
        assert!(rendered.contains("href=\"/\""));
        assert!(rendered.contains("Return to Home"));
    }
}
