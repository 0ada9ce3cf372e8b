use bizdesk_client::AuthService;
use bizdesk_types::LoginPayload;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::browser::spawn;
use crate::components::form::{FormNotice, FormState, TextField};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let navigate = use_navigate();
    let form = FormState::new();
    let (pending, setPending) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let payload = LoginPayload {
            email: form.value_untracked("email").trim().to_string(),
            password: form.value_untracked("password"),
        };
        let auth = auth.clone();
        let navigate = navigate.clone();

        setPending.set(true);
        spawn(async move {
            let result = auth.login(&payload).await;
            setPending.set(false);
            match result {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(e) => form.apply(&e),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"A"</div>
                    <h1>"Login"</h1>
                    <p>"Welcome back! Please enter your details."</p>
                </div>

                <form on:submit=onSubmit novalidate>
                    <FormNotice form=form />
                    <TextField form=form name="email" label="Email" input_type="email" placeholder="Email" />
                    <TextField
                        form=form
                        name="password"
                        label="Password"
                        input_type="password"
                        placeholder="Password"
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>

                <p class="login-footer">"Don't have an account? " <a href="/signup">"Register"</a></p>
            </div>
        </div>
    }
}
