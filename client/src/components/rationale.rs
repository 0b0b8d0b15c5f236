//! Collapsible "Why do we need this framework?" panel.

use leptos::prelude::*;

use viz::disclosure::PanelKey;
use viz::screen::ScreenState;

use crate::components::icons::{chevron, info_icon};
use crate::content::frameworks::{MISAPPREHENSIONS, RATIONALE, RATIONALE_CLOSING, RECOGNITIONS};

/// The rationale panel above the card grid. Independent of category state:
/// it stays open across card clicks.
#[component]
pub fn Rationale() -> impl IntoView {
    let screen = expect_context::<RwSignal<ScreenState>>();

    let open = move || screen.get().is_open(PanelKey::Rationale);
    let misapprehensions_open = move || screen.get().is_open(PanelKey::Misapprehensions);

    view! {
        <section class="rationale">
            <header
                class="rationale__header"
                on:click=move |_| screen.update(|s| s.toggle_panel(PanelKey::Rationale))
            >
                <h2 class="rationale__title">
                    <span class="rationale__title-icon">{info_icon()}</span>
                    "Why do we need this framework?"
                </h2>
                {move || chevron(open())}
            </header>

            <Show when=open>
                <div class="rationale__body">
                    {RATIONALE.iter().map(|p| view! { <p>{*p}</p> }).collect::<Vec<_>>()}

                    <div class="rationale__misapprehensions">
                        <header
                            class="rationale__sub-header"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                screen.update(|s| s.toggle_panel(PanelKey::Misapprehensions));
                            }
                        >
                            <h4>"Common misapprehensions this framework seeks to correct"</h4>
                            {move || chevron(misapprehensions_open())}
                        </header>
                        <Show when=misapprehensions_open>
                            <ul class="rationale__misapprehension-list">
                                {MISAPPREHENSIONS
                                    .iter()
                                    .map(|m| {
                                        view! {
                                            <li>
                                                <span class="rationale__misapprehension-term">{m.term}</span>
                                                " "
                                                {m.text}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </Show>
                    </div>

                    <div class="rationale__recognitions">
                        <h3>"Three Core Recognitions"</h3>
                        {RECOGNITIONS
                            .iter()
                            .map(|r| {
                                view! {
                                    <div class="rationale__recognition">
                                        <h4>{r.title}</h4>
                                        <p>{r.body}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <p class="rationale__closing">{RATIONALE_CLOSING}</p>
                </div>
            </Show>
        </section>
    }
}
