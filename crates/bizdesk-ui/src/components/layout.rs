use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::nav::Nav;

/// Sidebar, top bar and content area shared by every signed-in page.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <div class="main-column">
                <Header />
                <main class="main-content">{children()}</main>
            </div>
        </div>
    }
}
