use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="card not-found">
            <p>"Page not found."</p>
            <a href="/dashboard">"Back to the dashboard"</a>
        </div>
    }
}
