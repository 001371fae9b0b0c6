// ============================================================================
// ROUTER - Rutas de la aplicación (yew-router) y elementos de navegación
// ============================================================================

use yew_router::prelude::*;

/// Página de la aplicación
#[derive(Routable, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[at("/citizen")]
    Citizen,
    #[at("/integration")]
    Integration,
    #[at("/accessibility")]
    Accessibility,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { route: Route::Home, label: "Home", icon: "🏠" },
    NavItem { route: Route::Admin, label: "Admin Dashboard", icon: "📊" },
    NavItem { route: Route::Citizen, label: "Citizen Portal", icon: "👥" },
    NavItem { route: Route::Integration, label: "Integration Hub", icon: "🔌" },
    NavItem { route: Route::Accessibility, label: "Accessibility", icon: "♿" },
];

/// "/" solo está activo en la raíz; el resto por prefijo
pub fn is_active(href: &str, path: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path.starts_with(href)
    }
}

/// Elementos marcados para la ruta que se está pintando.
///
/// Se compara con el path canónico de la ruta reconocida, no con el de la
/// barra de direcciones: "/admin/" o "//" resaltan lo mismo que pintan.
pub fn active_items(current: Route) -> impl Iterator<Item = &'static NavItem> {
    let path = current.to_path();
    NAV_ITEMS.iter().filter(move |item| is_active(&item.route.to_path(), &path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/admin"), Some(Route::Admin));
        assert_eq!(Route::recognize("/citizen"), Some(Route::Citizen));
        assert_eq!(Route::recognize("/integration"), Some(Route::Integration));
        assert_eq!(Route::recognize("/accessibility"), Some(Route::Accessibility));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/admin/extra"), Some(Route::NotFound));
    }

    #[test]
    fn home_is_active_only_at_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/admin"));
        assert!(!is_active("/", ""));
    }

    #[test]
    fn prefix_rule_for_other_items() {
        assert!(is_active("/integration", "/integration"));
        assert!(is_active("/integration", "/integration/x"));
        assert!(!is_active("/integration", "/admin"));
    }

    #[test]
    fn highlight_follows_the_rendered_route() {
        for item in NAV_ITEMS {
            let active: Vec<_> = active_items(item.route).map(|i| i.route).collect();
            assert_eq!(active, vec![item.route]);
        }
        assert_eq!(active_items(Route::NotFound).count(), 0);
    }
}
