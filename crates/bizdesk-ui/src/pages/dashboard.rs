use bizdesk_client::ApiClient;
use bizdesk_types::MasterSection;
use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::header::FALLBACK_USER_NAME;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let (userName, setUserName) = signal(FALLBACK_USER_NAME.to_string());
    Effect::new(move |_| {
        if let Some(name) = client.session().display_name() {
            setUserName.set(name);
        }
    });

    view! {
        <div class="dashboard-header">
            <h1>"Dashboard"</h1>
            <p class="subtitle">{move || format!("Welcome back, {}", userName.get())}</p>
        </div>
        <div class="dashboard-grid">
            <Card title="Overview".to_string()>
                <p>"Welcome to the Dashboard!"</p>
            </Card>
            {MasterSection::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <Card title=section.title().to_string()>
                            <ul class="quick-links">
                                {section
                                    .resources()
                                    .map(|resource| {
                                        view! {
                                            <li>
                                                <a href=resource.path()>{resource.title}</a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}
