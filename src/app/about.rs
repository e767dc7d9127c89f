use leptos::prelude::*;

use crate::content;

#[component]
pub fn About(about: content::About) -> impl IntoView {
    view! {
        <section id="about" class="relative w-full min-h-screen flex items-center bg-black px-6 py-20 md:px-20">
            <div class="mx-auto max-w-5xl w-full">
                <h2 class="text-4xl font-bold mb-10 bg-linear-to-r from-[#1cd8d2] via-[#00bf8f] to-[#302b63] bg-clip-text text-transparent fade-up">
                    {about.heading}
                </h2>
                <div class="space-y-4 text-lg text-gray-300 leading-relaxed">
                    {about.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
                <div class="mt-12 grid grid-cols-1 sm:grid-cols-3 gap-6">
                    {about
                        .stats
                        .into_iter()
                        .map(|s| {
                            view! {
                                <div class="rounded-xl border border-white/10 bg-white/5 p-6 text-center">
                                    <div class="text-4xl font-bold text-[#1cd8d2]">{s.value}</div>
                                    <div class="mt-2 text-sm text-gray-400">{s.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
