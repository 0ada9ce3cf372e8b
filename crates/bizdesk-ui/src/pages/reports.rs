use leptos::prelude::*;

use crate::components::card::Card;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <div class="dashboard-header">
            <h1>"Reports"</h1>
        </div>
        <Card title="Reports".to_string()>
            <p>"View your Reports here."</p>
        </Card>
    }
}
