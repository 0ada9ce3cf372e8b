use leptos::prelude::*;
use leptos_router::hooks::use_location;

const LINKS: [(&str, &str, &str); 3] = [
    ("/dashboard", "\u{25A3}", "Dashboard"),
    ("/master-data", "\u{26C1}", "Master Data"),
    ("/reports", "\u{2630}", "Reports"),
];

/// A sidebar link stays highlighted on its nested pages too.
pub fn is_active(currentPath: &str, href: &str) -> bool {
    currentPath == href
        || currentPath
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"A"</div>
                <span class="brand-text">"Admin Panel"</span>
            </div>
            <ul class="nav-links">
                {LINKS
                    .into_iter()
                    .map(|(href, icon, label)| {
                        let itemClass = move || {
                            if location.pathname.with(|path| is_active(path, href)) {
                                "nav-item active"
                            } else {
                                "nav-item"
                            }
                        };
                        view! {
                            <li class=itemClass>
                                <a href=href>
                                    <span class="nav-icon">{icon}</span>
                                    <span>{label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
