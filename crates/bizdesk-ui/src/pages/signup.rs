use bizdesk_client::AuthService;
use bizdesk_types::{field_errors, FieldErrors, RegisterPayload, REGISTER_ACCOUNT_FIELDS};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use validator::Validate;

use crate::browser::spawn;
use crate::components::form::{errors_for, FormNotice, FormState, TextField};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignupStep {
    Account,
    Business,
}

fn register_payload(form: &FormState) -> RegisterPayload {
    let text = |name: &str| form.value_untracked(name).trim().to_string();
    RegisterPayload {
        full_name: text("full_name"),
        email: text("email"),
        mobile_number: text("mobile_number"),
        password: form.value_untracked("password"),
        password_confirmation: form.value_untracked("password_confirmation"),
        business_name: text("business_name"),
        business_address: text("business_address"),
        business_email: text("business_email"),
        business_phone: text("business_phone"),
        br_number: text("br_number"),
    }
}

/// Problems that must be fixed before leaving the account step.
pub fn account_step_errors(payload: &RegisterPayload) -> FieldErrors {
    match payload.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => errors_for(field_errors(&e), &REGISTER_ACCOUNT_FIELDS),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let navigate = use_navigate();
    let form = FormState::new();
    let (step, setStep) = signal(SignupStep::Account);
    let (pending, setPending) = signal(false);

    let onNext = move |_: MouseEvent| {
        let errors = account_step_errors(&register_payload(&form));
        if errors.is_empty() {
            setStep.set(SignupStep::Business);
        } else {
            form.set_errors(errors);
        }
    };

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let payload = register_payload(&form);
        let auth = auth.clone();
        let navigate = navigate.clone();

        setPending.set(true);
        spawn(async move {
            let result = auth.register(&payload).await;
            setPending.set(false);
            match result {
                Ok(_) => navigate("/login", Default::default()),
                Err(e) => {
                    let accountFailed = e
                        .field_errors()
                        .is_some_and(|fields| !errors_for(fields.clone(), &REGISTER_ACCOUNT_FIELDS).is_empty());
                    if accountFailed {
                        setStep.set(SignupStep::Account);
                    }
                    form.apply(&e);
                }
            }
        });
    };

    let stepClass = move |target: SignupStep| {
        move || {
            if step.get() == target {
                "signup-step active"
            } else {
                "signup-step"
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card signup-card">
                <div class="login-header">
                    <h1>"Super Admin Registration"</h1>
                    <p>"Create your account and set up your business"</p>
                </div>

                <ol class="signup-steps">
                    <li class=stepClass(SignupStep::Account)>"Account Details"</li>
                    <li class=stepClass(SignupStep::Business)>"Business Identity"</li>
                </ol>

                <form on:submit=onSubmit novalidate>
                    <FormNotice form=form />
                    <div class="signup-panel" class:hidden=move || step.get() != SignupStep::Account>
                        <TextField form=form name="full_name" label="Full Name" placeholder="John Doe" />
                        <TextField
                            form=form
                            name="email"
                            label="Email Address"
                            input_type="email"
                            placeholder="john@example.com"
                        />
                        <TextField
                            form=form
                            name="mobile_number"
                            label="Mobile Number"
                            input_type="tel"
                            placeholder="0712345678"
                        />
                        <TextField form=form name="password" label="Password" input_type="password" />
                        <TextField
                            form=form
                            name="password_confirmation"
                            label="Confirm Password"
                            input_type="password"
                        />
                        <button type="button" class="btn btn-primary" on:click=onNext>
                            "Next"
                        </button>
                        <p class="login-footer">"Already have an account? " <a href="/login">"Login"</a></p>
                    </div>

                    <div class="signup-panel" class:hidden=move || step.get() != SignupStep::Business>
                        <TextField
                            form=form
                            name="business_name"
                            label="Business Name"
                            placeholder="My Awesome Business"
                        />
                        <TextField
                            form=form
                            name="business_address"
                            label="Business Address"
                            placeholder="123 Business St, City, Country"
                        />
                        <TextField
                            form=form
                            name="business_email"
                            label="Business Email"
                            input_type="email"
                            placeholder="contact@business.com"
                        />
                        <TextField
                            form=form
                            name="business_phone"
                            label="Business Phone"
                            input_type="tel"
                            placeholder="0112345678"
                        />
                        <TextField form=form name="br_number" label="BR Number" placeholder="BR-123456" />
                        <div class="form-actions">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| setStep.set(SignupStep::Account)
                            >
                                "Back"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                                {move || if pending.get() { "Setting up..." } else { "Complete Setup" }}
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
