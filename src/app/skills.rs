use leptos::prelude::*;

use crate::content::SkillGroup;

#[component]
pub fn Skills(groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section id="skills" class="relative w-full bg-black px-6 py-20 md:px-20">
            <div class="mx-auto max-w-6xl">
                <h2 class="text-4xl font-bold mb-10 text-center">"Skills"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {groups
                        .into_iter()
                        .map(|g| {
                            view! {
                                <div class="rounded-2xl border border-white/10 bg-white/5 p-6">
                                    <h3 class="text-xl font-semibold mb-4 text-[#00bf8f]">{g.name}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {g
                                            .items
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <span class="rounded-full px-3 py-1 bg-white/10 text-sm hover:bg-white/20 transition-colors">
                                                        {s}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
