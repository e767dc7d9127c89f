use leptos::prelude::*;

use super::home::Socials;
use crate::content::{build_year, SocialLink};

#[component]
pub fn Footer(owner: String, socials: Vec<SocialLink>) -> impl IntoView {
    let year = build_year().map(|y| format!("{y} ")).unwrap_or_default();
    view! {
        <footer class="relative w-full bg-black px-6 py-10 text-center text-gray-400 border-t border-white/10">
            <div class="flex justify-center">
                <Socials socials />
            </div>
            <p class="mt-6 text-sm">"© " {year} {owner} ". All rights reserved."</p>
        </footer>
    }
}
