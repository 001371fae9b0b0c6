use yew::prelude::*;

use super::DialogControlProps;
use crate::components::{Dialog, Progress};
use crate::config::CONFIG;
use crate::data::accessibility::{AUDIO_GUIDES, AUDIO_LANGUAGES};
use crate::hooks::{use_simulated_task, use_toast};
use crate::viewmodels::contact_viewmodel::{download_notice, play_notice};

#[function_component(AudioDialog)]
pub fn audio_dialog(props: &DialogControlProps) -> Html {
    // Índice de la guía en reproducción
    let playing = use_state(|| None::<usize>);
    let playback = use_simulated_task(CONFIG.simulation_config.audio_playback_ms);
    let toast = use_toast();

    let on_stop = {
        let playing = playing.clone();
        let cancel = playback.cancel.clone();
        Callback::from(move |_e: MouseEvent| {
            cancel.emit(());
            playing.set(None);
            log::info!("⏹️ [AUDIO] Reproducción detenida");
        })
    };

    let close = {
        let cb = props.on_open_change.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(false))
    };

    let guides = AUDIO_GUIDES.iter().enumerate().map(|(index, guide)| {
        let on_play = {
            let playing = playing.clone();
            let run = playback.run.clone();
            let toast = toast.clone();
            Callback::from(move |_e: MouseEvent| {
                log::info!("▶️ [AUDIO] Reproduciendo {}", guide.file);
                toast.emit(play_notice(guide));
                playing.set(Some(index));
                let playing = playing.clone();
                run.emit(Callback::from(move |_: ()| playing.set(None)));
            })
        };
        let on_download = {
            let toast = toast.clone();
            Callback::from(move |_e: MouseEvent| toast.emit(download_notice(guide)))
        };
        let is_current = *playing == Some(index);

        html! {
            <div class="card card-compact" key={index}>
                <div class="card-row">
                    <div>
                        <h4>{guide.title}</h4>
                        <p class="text-sm text-muted">{guide.description}</p>
                        <p class="text-xs text-muted">{format!("Duration: {}", guide.duration)}</p>
                    </div>
                    <div class="button-row">
                        <button
                            class="btn btn-outline btn-sm"
                            aria-label={format!("Play {}", guide.title)}
                            disabled={playback.running}
                            onclick={on_play}
                        >
                            { if is_current { "⏸" } else { "▶" } }
                        </button>
                        <button
                            class="btn btn-outline btn-sm"
                            aria-label={format!("Download {}", guide.title)}
                            onclick={on_download}
                        >
                            {"⬇️"}
                        </button>
                    </div>
                </div>
                if is_current {
                    <Progress value={30} />
                    <div class="list-row text-xs text-muted">
                        <span>{"0:45"}</span>
                        <span>{guide.duration}</span>
                    </div>
                }
            </div>
        }
    });

    html! {
        <Dialog
            open={props.open}
            on_open_change={props.on_open_change.clone()}
            icon="🔊"
            title="Audio Guides & Instructions"
            description="Listen to comprehensive waste management guides in multiple languages"
            wide={true}
        >
            { for guides }

            <div class="callout">
                <h4>{"Language Options Available:"}</h4>
                <div class="chip-row">
                    { for AUDIO_LANGUAGES.iter().map(|lang| html! {
                        <span class="chip" key={lang.to_string()}>{*lang}</span>
                    })}
                </div>
            </div>

            <div class="dialog-actions dialog-actions-between">
                <button class="btn btn-outline" onclick={close}>{"Close"}</button>
                <button class="btn btn-primary" disabled={playing.is_none()} onclick={on_stop}>
                    {"⏹ Stop All Audio"}
                </button>
            </div>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn lists_guides_and_languages_with_nothing_playing() {
        let props = DialogControlProps { open: true, on_open_change: Callback::noop() };
        let rendered = LocalServerRenderer::<AudioDialog>::with_props(props).render().await;
        for guide in AUDIO_GUIDES.iter() {
            assert!(rendered.contains(guide.title));
        }
        assert!(rendered.contains("Punjabi"));
        assert!(rendered.contains("Stop All Audio"));
        assert!(!rendered.contains("0:45"));
    }
}
