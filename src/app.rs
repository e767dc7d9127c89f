mod about;
mod animate;
mod contact;
mod cursor;
mod experience;
mod footer;
mod home;
mod intro;
mod navbar;
mod projects;
mod skills;
mod testimonials;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_content, SiteContent};

use about::About;
use contact::Contact;
use cursor::CustomCursor;
use experience::Experience;
use footer::Footer;
use home::Home;
use intro::IntroAnimation;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use testimonials::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let owner = site_content()
        .map(|c| c.owner.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match site_content() {
        Ok(content) => Either::Left(view! { <Portfolio content /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! { <ContentError message=e.to_string() /> })
        }
    }
}

#[component]
fn Portfolio(content: &'static SiteContent) -> impl IntoView {
    let (intro_done, set_intro_done) = signal(content.skips_intro());
    let on_finish = Callback::new(move |_| set_intro_done.set(true));

    view! {
        <Title text="Portfolio" />
        <CustomCursor />
        {move || {
            if intro_done.get() {
                Either::Right(
                    view! {
                        <div class="relative text-white gradient">
                            <Navbar owner=content.owner.clone() />
                            <Home content />
                            <About about=content.about.clone() />
                            <Skills groups=content.skills.clone() />
                            <Projects content />
                            <Experience entries=content.experience.clone() />
                            <Testimonials testimonials=content.testimonials.clone() />
                            <Contact content=content.contact.clone() />
                            <Footer owner=content.owner.clone() socials=content.socials.clone() />
                        </div>
                    },
                )
            } else {
                Either::Left(view! { <IntroAnimation intro=content.intro_sequence() on_finish /> })
            }
        }}
    }
}

#[component]
pub fn ContentError(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center text-white">
            <div class="p-6 rounded-md border border-red-500 bg-red-500/10 max-w-xl">
                <h1 class="text-xl font-bold mb-2">"Couldn't load this page"</h1>
                <pre class="whitespace-pre-wrap text-sm">{message}</pre>
            </div>
        </div>
    }
}
