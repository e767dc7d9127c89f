use leptos::{either::Either, html, prelude::*};
use leptos_use::{
    use_element_bounding, use_media_query, use_window_size, UseElementBoundingReturn,
    UseWindowSizeReturn,
};

use super::ContentError;
use crate::content::{Project, SiteContent};
use crate::motion::{scroll_progress, ViewportClass};

const COMPACT_QUERY: &str = "(max-width: 639px)";

#[component]
pub fn Projects(content: &'static SiteContent) -> impl IntoView {
    let selector = match content.slide_selector() {
        Ok(s) => s,
        Err(e) => {
            log::error!("projects section disabled: {e}");
            return Either::Right(view! { <ContentError message=e.to_string() /> });
        }
    };
    let slide_count = selector.slide_count();
    let selector = StoredValue::new(selector);
    let slides = content
        .slides()
        .into_iter()
        .filter_map(|slide| content.project_for(&slide).map(|p| (slide, p)))
        .collect::<Vec<_>>();

    let is_compact = use_media_query(COMPACT_QUERY);
    let viewport = Signal::derive(move || ViewportClass::from_is_compact(is_compact.get()));

    let scene_ref = NodeRef::<html::Section>::new();
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(scene_ref);
    let UseWindowSizeReturn {
        height: viewport_height,
        ..
    } = use_window_size();

    let (active, set_active) = signal(0usize);
    Effect::new(move |_| {
        let progress = scroll_progress(top.get(), height.get(), viewport_height.get());
        let mut changed = None;
        selector.update_value(|s| changed = s.on_scroll_progress(progress));
        if let Some(index) = changed {
            set_active.set(index);
        }
    });

    let active_project = move |f: fn(&Project) -> String| f(&content.projects[active.get()]);
    let compact = move || viewport.get() == ViewportClass::Compact;

    Either::Left(view! {
        <section
            node_ref=scene_ref
            id="projects"
            class="relative text-white"
            style=move || {
                format!(
                    "height: {}vh; background-color: {}; transition: background-color 400ms ease;",
                    100 * slide_count,
                    active_project(|p| p.bg_color.clone()),
                )
            }
        >
            <div class="sticky top-0 h-screen flex flex-col items-center justify-center">
                <h2 class=move || {
                    format!(
                        "text-3xl font-semibold z-10 text-center {}",
                        if compact() { "mt-4" } else { "mt-8" },
                    )
                }>"My Work"</h2>
                <div class=move || {
                    format!(
                        "relative w-full h-full flex flex-1 items-center justify-center {}",
                        if compact() { "-mt-4" } else { "" },
                    )
                }>
                    {slides
                        .into_iter()
                        .map(|(slide, p)| {
                            let i = slide.order;
                            let is_active = move || active.get() == i;
                            let title = p.title.clone();
                            view! {
                                <div
                                    data-slide=slide.id
                                    class=move || {
                                        format!(
                                            "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 transition-all duration-500 ease-in-out {}",
                                            if is_active() {
                                                "opacity-100 z-20"
                                            } else {
                                                "opacity-0 z-0 sm:z-10"
                                            },
                                        )
                                    }
                                    style="width: 85%; max-width: 1200px;"
                                >
                                    <Show when=is_active>
                                        <h3
                                            class="block text-[clamp(2rem,6vw,5rem)] font-semibold text-center text-white/95 sm:absolute sm:-top-20 sm:left-[-5%] sm:mb-0 italic slide-title"
                                            style=move || {
                                                format!(
                                                    "z-index: 5; text-align: {};",
                                                    if compact() { "center" } else { "left" },
                                                )
                                            }
                                        >
                                            {title.clone()}
                                        </h3>
                                    </Show>
                                    <div class=move || {
                                        format!(
                                            "relative w-full overflow-hidden bg-black/20 shadow-2xl h-[62vh] sm:h-[66vh] {}",
                                            if compact() {
                                                "mb-6 rounded-lg"
                                            } else {
                                                "mb-10 sm:mb-12 rounded-xl"
                                            },
                                        )
                                    }>
                                        <img
                                            src=move || p.image_for(viewport.get()).to_string()
                                            alt=p.title.clone()
                                            class="w-full h-full object-cover drop-shadow-xl md:drop-shadow-2xl"
                                            loading="lazy"
                                        />
                                        <div class="pointer-events-none absolute inset-0 bg-linear-to-b from-black/20 to-transparent" />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=move || {
                    format!("absolute {}", if compact() { "bottom-20" } else { "bottom-10" })
                }>
                    <a
                        href=move || active_project(|p| p.link.clone())
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-block rounded-lg text-black text-lg bg-white px-6 py-3 font-semibold hover:bg-gray-200 transition-all"
                        aria-label=move || active_project(|p| format!("View {}", p.title))
                    >
                        "View Project"
                    </a>
                </div>
            </div>
        </section>
    })
}
