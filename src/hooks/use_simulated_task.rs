use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Hueco para un único temporizador en curso.
///
/// Guardar uno nuevo suelta (y por tanto cancela) el anterior; `cancel` y el
/// drop del hueco sueltan el actual. `running` se apaga al terminar o cancelar.
#[derive(Debug)]
pub struct TaskSlot<T> {
    pending: Option<T>,
    running: bool,
}

impl<T> Default for TaskSlot<T> {
    fn default() -> Self {
        Self { pending: None, running: false }
    }
}

impl<T> TaskSlot<T> {
    /// Devuelve true si había otra tarea que queda sustituida
    pub fn start(&mut self, timer: T) -> bool {
        self.running = true;
        self.pending.replace(timer).is_some()
    }

    /// La tarea terminó sola. El temporizador se conserva: se está ejecutando.
    pub fn finish(&mut self) {
        self.running = false;
    }

    /// Devuelve true si había algo que cancelar
    pub fn cancel(&mut self) -> bool {
        self.running = false;
        self.pending.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Acción simulada de duración fija.
///
/// El `Timeout` pertenece al componente: una nueva ejecución sustituye a la
/// anterior y desmontar el componente la cancela.
pub struct UseSimulatedTaskHandle {
    pub running: bool,
    /// Arranca (o reinicia) la tarea; el callback se emite al terminar
    pub run: Callback<Callback<()>>,
    pub cancel: Callback<()>,
}

#[hook]
pub fn use_simulated_task(duration_ms: u32) -> UseSimulatedTaskHandle {
    let running = use_state(|| false);
    let slot = use_mut_ref(TaskSlot::<Timeout>::default);

    let run = {
        let running = running.clone();
        let slot = slot.clone();
        Callback::from(move |on_done: Callback<()>| {
            let running_done = running.clone();
            let slot_done = slot.clone();
            let timeout = Timeout::new(duration_ms, move || {
                slot_done.borrow_mut().finish();
                running_done.set(false);
                on_done.emit(());
            });
            if slot.borrow_mut().start(timeout) {
                log::debug!("🔁 [TASK] Tarea anterior sustituida");
            }
            running.set(true);
            log::debug!("⏳ [TASK] Tarea simulada de {} ms", duration_ms);
        })
    };

    let cancel = {
        let running = running.clone();
        let slot = slot.clone();
        Callback::from(move |_| {
            if slot.borrow_mut().cancel() {
                log::debug!("⏹️ [TASK] Tarea cancelada");
            }
            running.set(false);
        })
    };

    {
        let slot = slot.clone();
        use_effect_with((), move |_| {
            move || {
                slot.borrow_mut().cancel();
            }
        });
    }

    UseSimulatedTaskHandle {
        running: *running,
        run,
        cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Cuenta cuántas veces se suelta, como haría un Timeout al cancelarse
    struct Timer(Rc<Cell<u32>>);

    impl Drop for Timer {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_run_drops_the_previous_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = TaskSlot::default();

        assert!(!slot.start(Timer(dropped.clone())));
        assert_eq!(dropped.get(), 0);

        assert!(slot.start(Timer(dropped.clone())));
        assert_eq!(dropped.get(), 1);
        assert!(slot.is_running());
    }

    #[test]
    fn cancel_drops_the_timer_and_stops_running() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = TaskSlot::default();
        slot.start(Timer(dropped.clone()));

        assert!(slot.cancel());
        assert_eq!(dropped.get(), 1);
        assert!(!slot.is_running());
        assert!(!slot.cancel());
    }

    #[test]
    fn finish_stops_running_without_dropping_the_firing_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot = TaskSlot::default();
        slot.start(Timer(dropped.clone()));

        slot.finish();
        assert!(!slot.is_running());
        assert_eq!(dropped.get(), 0);
    }

    #[test]
    fn dropping_the_slot_drops_the_pending_timer() {
        let dropped = Rc::new(Cell::new(0));
        {
            let mut slot = TaskSlot::default();
            slot.start(Timer(dropped.clone()));
        }
        assert_eq!(dropped.get(), 1);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{click, mount_root, settle, wait_ms};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const DURATION_MS: u32 = 200;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        done: Callback<()>,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let task = use_simulated_task(DURATION_MS);
        let start = {
            let run = task.run.clone();
            let done = props.done.clone();
            Callback::from(move |_e: MouseEvent| run.emit(done.clone()))
        };
        let stop = task.cancel.reform(|_e: MouseEvent| ());
        html! {
            <>
                <button id="start" onclick={start}>{ if task.running { "running" } else { "idle" } }</button>
                <button id="stop" onclick={stop}>{"stop"}</button>
            </>
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let done = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (count, done)
    }

    #[wasm_bindgen_test]
    async fn restarting_fires_only_once() {
        let (count, done) = counter();
        let root = mount_root();
        let app = yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { done }).render();
        settle().await;

        click(&root, "#start");
        click(&root, "#start");
        settle().await;
        assert!(root.inner_html().contains("running"));

        wait_ms(DURATION_MS * 2).await;
        assert_eq!(count.get(), 1);
        assert!(root.inner_html().contains("idle"));
        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn cancelled_task_never_fires() {
        let (count, done) = counter();
        let root = mount_root();
        let app = yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { done }).render();
        settle().await;

        click(&root, "#start");
        settle().await;
        click(&root, "#stop");
        wait_ms(DURATION_MS * 2).await;
        assert_eq!(count.get(), 0);
        assert!(root.inner_html().contains("idle"));
        app.destroy();
    }

    #[wasm_bindgen_test]
    async fn unmounting_drops_the_pending_task() {
        let (count, done) = counter();
        let root = mount_root();
        let app = yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { done }).render();
        settle().await;

        click(&root, "#start");
        settle().await;
        app.destroy();
        wait_ms(DURATION_MS * 2).await;
        assert_eq!(count.get(), 0);
    }
}
