use bizdesk_client::services::PROFILE_QUERY_KEY;
use bizdesk_client::{ProfileService, QueryCache};
use bizdesk_types::{
    optional_field, Business, ChangePasswordPayload, ProfileData, UpdateCompanyPayload,
    UpdatePersonalPayload, User,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::browser::spawn;
use crate::components::card::Card;
use crate::components::form::{FormNotice, FormState, FormValues, TextField};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Personal,
    Company,
    Security,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [ProfileTab::Personal, ProfileTab::Company, ProfileTab::Security];

    fn label(self) -> &'static str {
        match self {
            ProfileTab::Personal => "Personal Details",
            ProfileTab::Company => "Company Details",
            ProfileTab::Security => "Security",
        }
    }
}

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub fn personal_values(user: &User) -> FormValues {
    values(&[
        ("full_name", user.full_name.as_str()),
        ("email", user.email.as_str()),
        ("mobile_number", user.mobile_number.as_str()),
    ])
}

pub fn company_values(business: &Business) -> FormValues {
    values(&[
        ("business_name", business.business_name.as_str()),
        ("business_email", business.business_email.as_str()),
        ("business_phone", business.business_phone.as_str()),
        ("business_address", business.business_address.as_str()),
        ("tax_id", business.tax_id.as_deref().unwrap_or("")),
        ("website", business.website.as_deref().unwrap_or("")),
        ("br_number", business.br_number.as_str()),
    ])
}

pub fn company_payload(values: &FormValues) -> UpdateCompanyPayload {
    let text = |name: &str| {
        values
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };
    UpdateCompanyPayload {
        business_name: text("business_name"),
        business_email: text("business_email"),
        business_phone: text("business_phone"),
        business_address: text("business_address"),
        tax_id: optional_field(&text("tax_id")),
        website: optional_field(&text("website")),
        br_number: text("br_number"),
    }
}

/// Drops the cached profile so the page refetches it.
fn profile_changed(cache: &QueryCache, refresh: RwSignal<u32>) {
    cache.invalidate(PROFILE_QUERY_KEY);
    refresh.update(|n| *n += 1);
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let service = expect_context::<ProfileService>();
    let cache = expect_context::<QueryCache>();
    let (profile, setProfile) = signal(Option::<Result<ProfileData, String>>::None);
    let (tab, setTab) = signal(ProfileTab::Personal);
    let refresh = RwSignal::new(0u32);

    Effect::new(move |_| {
        refresh.track();
        let service = service.clone();
        let cache = cache.clone();
        spawn(async move {
            let result = cache
                .get_or_fetch(PROFILE_QUERY_KEY, || service.get_profile())
                .await;
            let loaded = match result {
                Ok(envelope) => envelope
                    .data
                    .ok_or_else(|| "Profile data is missing".to_string()),
                Err(e) => Err(e.message()),
            };
            setProfile.set(Some(loaded));
        });
    });

    view! {
        <div class="dashboard-header">
            <h1>"My Profile"</h1>
            <p class="subtitle">
                "Manage your personal details, company information, and account security."
            </p>
        </div>
        {move || match profile.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading profile..."
                    </div>
                }
                    .into_any()
            }
            Some(Err(message)) => {
                view! {
                    <div class="card">
                        <p class="login-error">"Failed to load profile: " {message}</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(data)) => {
                view! {
                    <div class="card">
                        <div class="tabs">
                            {ProfileTab::ALL
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <button
                                            class=move || {
                                                if tab.get() == item { "tab active" } else { "tab" }
                                            }
                                            on:click=move |_| setTab.set(item)
                                        >
                                            {item.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {move || match tab.get() {
                            ProfileTab::Personal => {
                                view! { <PersonalForm user=data.user.clone() refresh=refresh /> }
                                    .into_any()
                            }
                            ProfileTab::Company => {
                                view! { <CompanyForm business=data.business.clone() refresh=refresh /> }
                                    .into_any()
                            }
                            ProfileTab::Security => view! { <SecurityForm /> }.into_any(),
                        }}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn PersonalForm(user: User, refresh: RwSignal<u32>) -> impl IntoView {
    let service = expect_context::<ProfileService>();
    let cache = expect_context::<QueryCache>();
    let form = FormState::new();
    form.fill(personal_values(&user));
    let (pending, setPending) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = UpdatePersonalPayload {
            full_name: form.value_untracked("full_name").trim().to_string(),
            email: form.value_untracked("email").trim().to_string(),
            mobile_number: form.value_untracked("mobile_number").trim().to_string(),
        };
        let service = service.clone();
        let cache = cache.clone();

        setPending.set(true);
        spawn(async move {
            let result = service.update_personal(&payload).await;
            setPending.set(false);
            match result {
                Ok(_) => {
                    form.clear_notice();
                    profile_changed(&cache, refresh);
                }
                Err(e) => form.apply(&e),
            }
        });
    };

    view! {
        <form class="profile-form" on:submit=onSubmit novalidate>
            <FormNotice form=form />
            <TextField form=form name="full_name" label="Full Name" />
            <TextField form=form name="email" label="Email" input_type="email" />
            <TextField form=form name="mobile_number" label="Mobile Number" input_type="tel" />
            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                "Update Personal Info"
            </button>
        </form>
    }
}

#[component]
fn CompanyForm(business: Business, refresh: RwSignal<u32>) -> impl IntoView {
    let service = expect_context::<ProfileService>();
    let cache = expect_context::<QueryCache>();
    let form = FormState::new();
    form.fill(company_values(&business));
    let (pending, setPending) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = company_payload(&form.values_untracked());
        let service = service.clone();
        let cache = cache.clone();

        setPending.set(true);
        spawn(async move {
            let result = service.update_company(&payload).await;
            setPending.set(false);
            match result {
                Ok(_) => {
                    form.clear_notice();
                    profile_changed(&cache, refresh);
                }
                Err(e) => form.apply(&e),
            }
        });
    };

    view! {
        <form class="profile-form" on:submit=onSubmit novalidate>
            <FormNotice form=form />
            <div class="form-row">
                <TextField form=form name="business_name" label="Business Name" />
                <TextField form=form name="br_number" label="BR Number" />
            </div>
            <div class="form-row">
                <TextField form=form name="business_email" label="Business Email" input_type="email" />
                <TextField form=form name="business_phone" label="Business Phone" input_type="tel" />
            </div>
            <TextField form=form name="business_address" label="Address" />
            <div class="form-row">
                <TextField form=form name="tax_id" label="Tax ID" />
                <TextField form=form name="website" label="Website" input_type="url" />
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                "Update Company Info"
            </button>
        </form>
    }
}

#[component]
fn SecurityForm() -> impl IntoView {
    let service = expect_context::<ProfileService>();
    let form = FormState::new();
    let (pending, setPending) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = ChangePasswordPayload {
            current_password: form.value_untracked("current_password"),
            new_password: form.value_untracked("new_password"),
            new_password_confirmation: form.value_untracked("new_password_confirmation"),
        };
        let service = service.clone();

        setPending.set(true);
        spawn(async move {
            let result = service.change_password(&payload).await;
            setPending.set(false);
            match result {
                Ok(_) => form.reset(),
                Err(e) => form.apply(&e),
            }
        });
    };

    view! {
        <Card title="Change Password".to_string()>
            <form class="profile-form" on:submit=onSubmit novalidate>
                <FormNotice form=form />
                <TextField
                    form=form
                    name="current_password"
                    label="Current Password"
                    input_type="password"
                />
                <TextField form=form name="new_password" label="New Password" input_type="password" />
                <TextField
                    form=form
                    name="new_password_confirmation"
                    label="Confirm New Password"
                    input_type="password"
                />
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    "Change Password"
                </button>
            </form>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business() -> Business {
        Business {
            id: 9,
            business_name: "Perera Traders".into(),
            business_address: "12 Galle Road, Colombo".into(),
            website: None,
            business_email: "info@perera.lk".into(),
            business_phone: "0112345678".into(),
            tax_id: Some("TIN-88".into()),
            br_number: "PV-1022".into(),
            created_at: "2025-01-02T10:00:00Z".into(),
            updated_at: "2025-01-02T10:00:00Z".into(),
        }
    }

    #[test]
    fn test_company_form_round_trips_optional_fields() {
        let mut formValues = company_values(&business());
        assert_eq!(formValues.get("website").map(String::as_str), Some(""));

        formValues.insert("tax_id".into(), "   ".into());
        let payload = company_payload(&formValues);

        assert_eq!(payload.website, None);
        assert_eq!(payload.tax_id, None);
        assert_eq!(payload.business_name, "Perera Traders");
        assert_eq!(payload.br_number, "PV-1022");
    }

    #[test]
    fn test_personal_values_prefill_only_personal_fields() {
        let user = User {
            id: 4,
            full_name: "Nimal Perera".into(),
            email: "nimal@example.com".into(),
            mobile_number: "0712345678".into(),
            business_id: 9,
            created_at: String::new(),
            updated_at: String::new(),
            business: None,
        };

        let formValues = personal_values(&user);
        assert_eq!(formValues.len(), 3);
        assert_eq!(formValues.get("full_name").map(String::as_str), Some("Nimal Perera"));
    }
}
