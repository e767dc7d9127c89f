use leptos::prelude::*;

use super::animate::run_animation;
use crate::motion::IntroSequence;

#[component]
pub fn IntroAnimation(intro: IntroSequence, on_finish: Callback<()>) -> impl IntoView {
    let (word, set_word) = signal(intro.current().map(str::to_string));
    run_animation(intro, move |frame: Option<String>| match frame {
        Some(w) => set_word.set(Some(w)),
        None => on_finish.run(()),
    });

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black text-white">
            <h1 class="text-5xl md:text-7xl lg:text-8xl font-bold bg-linear-to-r from-[#1cd8d2] via-[#00bf8f] to-[#302b63] bg-clip-text text-transparent">
                {move || word.get().unwrap_or_default()}
            </h1>
        </div>
    }
}
