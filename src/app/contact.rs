use leptos::{ev::SubmitEvent, prelude::*, web_sys::HtmlInputElement};

use crate::contact::{ContactForm, Field, FormState, Service, SubmitStatus};
use crate::content::ContactContent;

#[server]
pub async fn send_inquiry(form: ContactForm) -> Result<(), ServerFnError> {
    use crate::mail::{deliver, MailConfig};

    let config = MailConfig::from_env().map_err(|e| {
        tracing::error!("{e}");
        ServerFnError::new("Mail delivery is not configured")
    })?;
    deliver(&config, &form).await.map_err(|e| {
        tracing::warn!("couldn't deliver inquiry: {e}");
        ServerFnError::new(e.to_string())
    })
}

const INPUT_CLASS: &str = "p-3 rounded-md bg-white/10 border text-white focus:outline-none focus:border-blue-500";

#[component]
pub fn Contact(content: ContactContent) -> impl IntoView {
    let state = RwSignal::new(FormState::default());
    let send = ServerAction::<SendInquiry>::new();
    let status = Signal::derive(move || {
        SubmitStatus::from_outcome(send.pending().get(), send.value().get().as_ref())
    });

    Effect::new(move |_| {
        if let Some(Ok(())) = send.value().get() {
            state.update(|s| s.reset());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = state.try_update(|s| s.submit()).flatten() {
            send.dispatch(SendInquiry { form });
        }
    };

    view! {
        <section
            id="contact"
            class="w-full min-h-screen relative bg-black overflow-hidden text-white px-6 py-20 md:px-20 flex flex-col md:flex-row items-center gap-10"
        >
            <div class="relative z-10 w-full flex flex-col md:flex-row items-center gap-10">
                <div class="w-full md:w-1/2 flex justify-center slide-in-left">
                    <img
                        src=content.image
                        alt="Contact illustration"
                        class="w-72 md:w-140 rounded-2xl shadow-lg object-cover float"
                    />
                </div>
                <div class="w-full md:w-1/2 bg-white/5 p-8 rounded-2xl shadow-lg border border-white/10 slide-in-right">
                    <h2 class="text-3xl font-bold mb-6">{content.heading}</h2>
                    <form class="flex flex-col gap-5" on:submit=on_submit>
                        <TextField state field=Field::Name label="Your Name" placeholder="Your Name" kind="text" />
                        <TextField state field=Field::Email label="Your Email" placeholder="Your Email" kind="email" />
                        <div class="flex flex-col">
                            <label class="mb-1">"Service Needed " <span class="text-red-500">"*"</span></label>
                            <select
                                name="service"
                                class=move || field_class(state, Field::Service)
                                prop:value=move || state.with(|s| s.form.value(Field::Service).to_string())
                                on:change=edit_handler(state, Field::Service)
                            >
                                <option value="" disabled=true>"Select a service"</option>
                                {Service::all()
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <option class="text-black" value=s.as_str()>
                                                {s.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            <FieldError state field=Field::Service />
                        </div>
                        <Show when=move || state.with(|s| s.form.needs_budget())>
                            <TextField state field=Field::Budget label="Budget" placeholder="Project Budget" kind="text" />
                        </Show>
                        <div class="flex flex-col">
                            <label class="mb-1">"Enter Your idea " <span class="text-red-500">"*"</span></label>
                            <textarea
                                name="idea"
                                rows=5
                                placeholder="Your Message"
                                class=move || field_class(state, Field::Idea)
                                prop:value=move || state.with(|s| s.form.idea.clone())
                                on:input=edit_handler(state, Field::Idea)
                            />
                            <FieldError state field=Field::Idea />
                        </div>
                        {move || {
                            let status = status.get();
                            status
                                .message()
                                .map(|msg| view! { <p class=format!("text-sm {}", status.class())>{msg}</p> })
                        }}
                        <button
                            class="bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white py-3 rounded-md font-semibold transition hover:scale-105 active:scale-95"
                            disabled=move || status.get() == SubmitStatus::Sending
                            type="submit"
                        >
                            {move || {
                                if status.get() == SubmitStatus::Sending { "Sending..." } else { "Submit" }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

fn field_class(state: RwSignal<FormState>, field: Field) -> String {
    let border = if state.with(|s| s.errors.get(field).is_some()) {
        "border-red-500"
    } else {
        "border-gray-500"
    };
    format!("{INPUT_CLASS} {border}")
}

fn edit_handler(state: RwSignal<FormState>, field: Field) -> impl Fn(leptos::ev::Event) + Send + Sync + 'static {
    move |ev| {
        let value = event_target_value(&ev);
        let accepted = state.try_update(|s| s.edit(field, &value)).unwrap_or(false);
        if !accepted {
            // keep the DOM in step with the rejected edit
            let current = state.with_untracked(|s| s.form.value(field).to_string());
            event_target::<HtmlInputElement>(&ev).set_value(&current);
        }
    }
}

#[component]
fn TextField(
    state: RwSignal<FormState>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <label class="mb-1">{label} " " <span class="text-red-500">"*"</span></label>
            <input
                type=kind
                name=field.as_str()
                placeholder=placeholder
                class=move || field_class(state, field)
                prop:value=move || state.with(|s| s.form.value(field).to_string())
                on:input=edit_handler(state, field)
            />
            <FieldError state field />
        </div>
    }
}

#[component]
fn FieldError(state: RwSignal<FormState>, field: Field) -> impl IntoView {
    move || {
        state
            .with(|s| s.errors.get(field).map(str::to_string))
            .map(|msg| view! { <p class="text-red-500 text-sm">{msg}</p> })
    }
}
