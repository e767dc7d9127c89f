use leptos::prelude::*;

use super::animate::run_animation;
use crate::content::{SiteContent, SocialLink};

#[component]
pub fn Home(content: &'static SiteContent) -> impl IntoView {
    view! {
        <section id="home" class="relative w-full h-screen overflow-hidden bg-black">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute -top-32 -left-32 w-[70vw] md:w-[40vw] max-w-[500px] h-[70vw] md:h-[40vw] max-h-[500px] bg-linear-to-r from-[#302b63] via-[#00bf8f] to-[#1cd8d2] opacity-20 blur-[140px] animate-pulse" />
                <div class="absolute bottom-0 right-0 w-[70vw] md:w-[40vw] max-w-[500px] h-[70vw] md:h-[40vw] max-h-[500px] bg-linear-to-r from-[#302b63] via-[#00bf8f] to-[#1cd8d2] opacity-20 blur-[140px] animate-pulse delay-500" />
            </div>
            <div class="relative z-10 mx-auto grid h-full max-w-7xl grid-cols-1 lg:grid-cols-2 px-4">
                <div class="flex flex-col justify-center text-center lg:text-left">
                    <div class="mx-auto w-full max-w-3xl lg:pr-24">
                        <div class="mb-3 min-h-[1.6rem] text-xl sm:text-2xl md:text-3xl lg:text-4xl font-semibold text-white tracking-wide fade-up">
                            <Typewriter content />
                        </div>
                        <h1 class="mb-6 text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold leading-tight bg-linear-to-r from-[#1cd8d2] via-[#00bf8f] to-[#302b63] bg-clip-text text-transparent drop-shadow-lg fade-up">
                            "Hello, I'm" <br />
                            <span class="block text-white text-5xl sm:text-6xl md:text-7xl lg:text-8xl">
                                {content.owner.clone()}
                            </span>
                        </h1>
                        <p class="mt-6 max-w-2xl text-base sm:text-lg md:text-xl text-gray-300 mx-auto lg:mx-0 fade-up delay-400">
                            {content.tagline.clone()}
                        </p>
                        <div class="mt-10 flex flex-wrap items-center justify-center lg:justify-start gap-6 fade-in delay-800">
                            <a
                                href="#projects"
                                class="rounded-full bg-linear-to-r from-[#1cd8d2] via-[#00bf8f] to-[#302b63] px-6 py-3 text-lg font-medium text-white shadow-lg transition-transform hover:scale-105"
                            >
                                "View My Work"
                            </a>
                            <a
                                href=content.resume_href.clone()
                                download=""
                                class="rounded-full bg-white px-6 py-3 text-lg font-medium text-black shadow-lg transition-transform hover:scale-105 hover:bg-gray-200"
                            >
                                "My Resume"
                            </a>
                        </div>
                        <Socials socials=content.socials.clone() />
                    </div>
                </div>
                <div class="relative hidden lg:block">
                    <div class="pointer-events-none absolute right-2 top-1/2 -translate-y-1/2 rounded-full blur-[38px] hero-glow" />
                    <img
                        src=content.avatar.clone()
                        alt=content.owner.clone()
                        class="pointer-events-none absolute right-[-30px] top-1/2 -translate-y-1/2 max-h-[90vh] object-contain select-none fade-up delay-200"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Typewriter(content: &'static SiteContent) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    match content.typewriter() {
        Ok(cycler) => run_animation(cycler, move |frame| set_text.set(frame)),
        Err(e) => log::error!("typewriter disabled: {e}"),
    }

    view! {
        <span>{move || text.get()}</span>
        <span
            aria-hidden="true"
            class="ml-1 inline-block w-0.5 animate-pulse bg-white align-middle"
            style="height: 1em"
        />
    }
}

#[component]
pub fn Socials(socials: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="mt-10 flex justify-center lg:justify-start gap-5 text-2xl md:text-3xl">
            {socials
                .into_iter()
                .map(|s| {
                    view! {
                        <a
                            href=s.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=s.label
                            class="text-white transition-transform hover:scale-125 hover:-translate-y-1 social-glow"
                        >
                            <i class=s.icon />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
