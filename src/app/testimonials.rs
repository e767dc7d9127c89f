use leptos::prelude::*;

use crate::content::Testimonial;

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id="testimonials" class="relative w-full bg-black px-6 py-20 md:px-20">
            <div class="mx-auto max-w-6xl">
                <h2 class="text-4xl font-bold mb-12 text-center">"What People Say"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {testimonials
                        .into_iter()
                        .map(|t| {
                            view! {
                                <figure class="rounded-2xl border border-white/10 bg-white/5 p-8">
                                    <blockquote class="text-lg italic text-gray-200">
                                        "“" {t.quote} "”"
                                    </blockquote>
                                    <figcaption class="mt-6 text-sm">
                                        <span class="font-semibold">{t.name}</span>
                                        <span class="text-gray-400">", " {t.role}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
