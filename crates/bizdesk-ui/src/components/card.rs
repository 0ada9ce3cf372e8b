use leptos::prelude::*;

/// Card wrapper with a title header and optional subtitle.
#[component]
pub fn Card(
    title: String,
    #[prop(optional)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">{title}</div>
            {subtitle.map(|text| view! { <p class="card-subtitle">{text}</p> })}
            {children()}
        </div>
    }
}
