use leptos::prelude::*;

const SECTIONS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar(owner: String) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let initials = owner
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect::<String>();

    let links = move |on_click: bool| {
        SECTIONS
            .iter()
            .map(|(id, label)| {
                view! {
                    <a
                        href=format!("#{id}")
                        class="hover:text-[#1cd8d2] transition-colors duration-200"
                        on:click=move |_| {
                            if on_click {
                                set_menu_open.set(false);
                            }
                        }
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 left-0 z-40 w-full backdrop-blur-md bg-black/40">
            <div class="mx-auto max-w-7xl px-4 py-4 flex items-center justify-between">
                <a href="#home" class="text-2xl font-bold tracking-wide">
                    {initials}
                </a>
                <div class="hidden md:flex gap-8 text-sm uppercase tracking-wider">{links(false)}</div>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col items-center gap-6 py-6 bg-black/90 text-lg">
                    {links(true)}
                </div>
            </Show>
        </nav>
    }
}
