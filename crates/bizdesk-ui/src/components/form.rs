use std::collections::BTreeMap;

use bizdesk_client::ApiError;
use bizdesk_types::FieldErrors;
use leptos::prelude::*;

pub type FormValues = BTreeMap<String, String>;

/// Form-level text for a failed submit that nothing else has reported.
///
/// The client already toasts rejections and network failures, and validation
/// failures are shown per field, so only the remaining kinds need a notice.
pub fn form_notice(error: &ApiError) -> Option<String> {
    match error {
        ApiError::Validation(_) | ApiError::Rejected { .. } | ApiError::Network(_) => None,
        ApiError::Decode(_) | ApiError::InvalidRequest(_) => Some(error.message()),
    }
}

/// Input values and per-field messages of one form.
#[derive(Clone, Copy)]
pub struct FormState {
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    notice: RwSignal<Option<String>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(FormValues::new()),
            errors: RwSignal::new(FieldErrors::new()),
            notice: RwSignal::new(None),
        }
    }

    pub fn value(&self, name: &str) -> String {
        self.values
            .with(|values| values.get(name).cloned().unwrap_or_default())
    }

    pub fn value_untracked(&self, name: &str) -> String {
        self.values
            .with_untracked(|values| values.get(name).cloned().unwrap_or_default())
    }

    pub fn values_untracked(&self) -> FormValues {
        self.values.get_untracked()
    }

    pub fn set(&self, name: &str, value: String) {
        self.values.update(|values| {
            values.insert(name.to_string(), value);
        });
        self.errors.update(|errors| {
            errors.remove(name);
        });
    }

    pub fn fill(&self, values: FormValues) {
        self.values.set(values);
        self.errors.set(FieldErrors::new());
        self.notice.set(None);
    }

    pub fn reset(&self) {
        self.fill(FormValues::new());
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.with(|errors| errors.get(name).cloned())
    }

    pub fn set_errors(&self, errors: FieldErrors) {
        self.errors.set(errors);
    }

    pub fn notice(&self) -> Option<String> {
        self.notice.get()
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }

    /// Shows a failed submit: field messages next to the inputs, anything else
    /// not already toasted as a form-level notice.
    pub fn apply(&self, error: &ApiError) {
        if let Some(fields) = error.field_errors() {
            self.errors.set(fields.clone());
        }
        self.notice.set(form_notice(error));
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps only the messages for the named fields.
pub fn errors_for(errors: FieldErrors, names: &[&str]) -> FieldErrors {
    errors
        .into_iter()
        .filter(|(field, _)| names.contains(&field.as_str()))
        .collect()
}

#[component]
pub fn TextField(
    form: FormState,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <input
                type=input_type
                id=name
                name=name
                placeholder=placeholder
                class:input-invalid=move || form.error(name).is_some()
                prop:value=move || form.value(name)
                on:input=move |ev| form.set(name, event_target_value(&ev))
            />
            {move || form.error(name).map(|message| view! { <div class="field-error">{message}</div> })}
        </div>
    }
}

#[component]
pub fn FormNotice(form: FormState) -> impl IntoView {
    move || form.notice().map(|message| view! { <div class="form-error">{message}</div> })
}
