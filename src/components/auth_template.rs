//! Auth Template Components
//!
//! Shared layout and form shell of the login, create-team and email pages.

use leptos::prelude::*;

/// Centered card with logo, heading and sub-heading
#[component]
pub fn AuthTemplate(
    #[prop(into)] header: String,
    #[prop(optional, into)] sub_header: String,
    children: Children,
) -> impl IntoView {
    view! {
        <main class="auth-template">
            <div class="auth-template-container">
                <div class="retroquest-logo">"RetroQuest"</div>
                <div class="auth-template-header">
                    <h2 class="auth-heading">{header}</h2>
                    <p class="auth-sub-heading">{sub_header}</p>
                </div>
                <div class="auth-template-content" data-testid="authTemplateContent">
                    {children()}
                </div>
            </div>
        </main>
    }
}

/// Form with error list and a submit button that stays disabled while
/// `disabled` holds or a request is in flight
#[component]
pub fn AuthForm(
    #[prop(into)] submit_text: String,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] errors: Signal<Vec<String>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() && !loading.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <form class="form" on:submit=submit>
            {children()}
            <Show when=move || errors.with(|e| !e.is_empty())>
                <div class="form-error-messages" data-testid="formErrorMessages">
                    <For
                        each=move || errors.get()
                        key=|message| message.clone()
                        children=|message| view! { <div class="form-error-message">{message}</div> }
                    />
                </div>
            </Show>
            <button
                type="submit"
                class="form-submit"
                data-testid="formSubmitButton"
                disabled=move || disabled.get() || loading.get()
            >
                {move || if loading.get() { "Loading...".to_string() } else { submit_text.clone() }}
            </button>
        </form>
    }
}

/// Labeled input bound to a signal, with its validation message shown after the first blur
#[component]
pub fn InputField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] test_id: String,
) -> impl IntoView {
    let (touched, set_touched) = signal(false);
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let shown_error = move || if touched.get() { error.get() } else { None };

    view! {
        <label class=move || if shown_error().is_some() { "input-field invalid" } else { "input-field" }>
            <span class="input-label">{label}</span>
            <input
                type=input_type
                data-testid=test_id
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| set_touched.set(true)
            />
            {move || shown_error().map(|message| view! { <span class="input-error">{message}</span> })}
        </label>
    }
}
