/// Estado de un diálogo controlado por la página: abierto + discriminante.
///
/// Cerrar conserva el discriminante para que el contenido no desaparezca
/// antes de que el overlay se oculte; `open` es lo único que decide si se pinta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogState<T> {
    pub open: bool,
    pub target: Option<T>,
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        Self { open: false, target: None }
    }
}

impl<T: Copy> DialogState<T> {
    pub fn opened(target: T) -> Self {
        Self { open: true, target: Some(target) }
    }

    /// Aplica un `on_open_change(open)` recibido del diálogo
    pub fn with_open(self, open: bool) -> Self {
        Self { open, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuickAction;

    #[test]
    fn closing_keeps_target() {
        let state = DialogState::opened(QuickAction::Report);
        let closed = state.with_open(false);
        assert!(!closed.open);
        assert_eq!(closed.target, Some(QuickAction::Report));
    }

    #[test]
    fn default_is_closed_without_target() {
        let state: DialogState<QuickAction> = DialogState::default();
        assert!(!state.open);
        assert!(state.target.is_none());
    }
}
