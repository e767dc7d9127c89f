use leptos::prelude::*;

use crate::content;

#[component]
pub fn Experience(entries: Vec<content::Experience>) -> impl IntoView {
    view! {
        <section id="experience" class="relative w-full bg-black px-6 py-20 md:px-20">
            <div class="mx-auto max-w-4xl">
                <h2 class="text-4xl font-bold mb-12 text-center">"Experience"</h2>
                <ol class="relative border-l border-white/20">
                    {entries
                        .into_iter()
                        .map(|e| {
                            view! {
                                <li class="mb-10 ml-6">
                                    <span class="absolute -left-1.5 mt-2 h-3 w-3 rounded-full bg-[#1cd8d2]" />
                                    <h3 class="text-xl font-semibold">
                                        {e.title} <span class="text-gray-400">" @ " {e.company}</span>
                                    </h3>
                                    <time class="block mb-2 text-sm text-gray-500">{e.period}</time>
                                    <p class="text-gray-300">{e.summary}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
