// ============================================================================
// TOAST STATE - Cola de notificaciones transitorias
// ============================================================================
// La más reciente primero. Al superar el límite se descarta la más antigua.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Notice;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
    limit: usize,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    /// Inserta al principio y devuelve el id asignado
    pub fn push(&mut self, notice: Notice) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.insert(0, Toast { id, notice });
        if self.toasts.len() > self.limit {
            let evicted = self.toasts.split_off(self.limit);
            log::debug!("🗑️ [TOAST] {} notificación(es) descartadas por límite", evicted.len());
        }
        id
    }

    /// Quita un toast por id. Un id desconocido no hace nada.
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(CONFIG.toast_config.limit)
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                let id = next.push(notice);
                log::info!("🔔 [TOAST] Nueva notificación #{}", id);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(n: u32) -> Notice {
        Notice::info(format!("title {}", n), "body")
    }

    #[test]
    fn newest_first_and_bounded() {
        let mut queue = ToastQueue::with_limit(3);
        for n in 1..=5 {
            queue.push(notice(n));
        }
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.notice.title.as_str()).collect();
        assert_eq!(titles, vec!["title 5", "title 4", "title 3"]);
    }

    #[test]
    fn dismiss_removes_only_that_id() {
        let mut queue = ToastQueue::with_limit(3);
        let first = queue.push(notice(1));
        let second = queue.push(notice(2));
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);

        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn ids_are_unique_across_evictions() {
        let mut queue = ToastQueue::with_limit(1);
        let a = queue.push(notice(1));
        let b = queue.push(notice(2));
        assert_ne!(a, b);
        assert_eq!(queue.toasts()[0].id, b);
    }

    #[test]
    fn reducer_applies_actions() {
        let queue = Rc::new(ToastQueue::with_limit(2));
        let queue = queue.reduce(ToastAction::Push(notice(1)));
        let queue = queue.reduce(ToastAction::Push(notice(2)));
        let queue = queue.reduce(ToastAction::Push(notice(3)));
        assert_eq!(queue.toasts().len(), 2);
        let oldest = queue.toasts()[1].id;
        let queue = queue.reduce(ToastAction::Dismiss(oldest));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].notice.title, "title 3");
    }

    #[test]
    fn zero_limit_still_shows_one() {
        let mut queue = ToastQueue::with_limit(0);
        queue.push(notice(1));
        assert_eq!(queue.toasts().len(), 1);
    }
}
