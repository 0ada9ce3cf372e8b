use bizdesk_types::MasterSection;
use leptos::prelude::*;

#[component]
pub fn MasterDataPage() -> impl IntoView {
    view! {
        <div class="dashboard-header">
            <h1>"Master Data"</h1>
            <p class="subtitle">"Manage the core data that drives your business operations."</p>
        </div>
        {MasterSection::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <section class="master-section">
                        <h2>{section.title()}</h2>
                        <div class="master-grid">
                            {section
                                .resources()
                                .map(|resource| {
                                    view! {
                                        <a class="card master-tile" href=resource.path()>
                                            <div>
                                                <strong>{resource.title}</strong>
                                                <p class="card-subtitle">{resource.description}</p>
                                            </div>
                                            <span class="tile-arrow">"\u{203A}"</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                }
            })
            .collect_view()}
    }
}
