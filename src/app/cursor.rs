use leptos::prelude::*;
use leptos_use::{use_media_query, use_mouse, UseMouseReturn};

const SIZE_PX: f64 = 80.0;

#[component]
pub fn CustomCursor() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    // touch screens have no cursor to follow
    let fine_pointer = use_media_query("(pointer: fine)");

    view! {
        <Show when=move || fine_pointer.get()>
            <div
                aria-hidden="true"
                class="pointer-events-none fixed top-0 left-0 z-[9999] rounded-full blur-3xl opacity-80 bg-linear-to-r from-[#1cd8d2] via-[#00bf8f] to-[#302b63]"
                style=move || {
                    format!(
                        "width: {SIZE_PX}px; height: {SIZE_PX}px; transform: translate({}px, {}px); transition: transform 100ms ease-out;",
                        x.get() - SIZE_PX / 2.0,
                        y.get() - SIZE_PX / 2.0,
                    )
                }
            />
        </Show>
    }
}
