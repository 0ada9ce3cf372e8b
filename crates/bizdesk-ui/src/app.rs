use bizdesk_client::{AuthService, ProfileService, QueryCache};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::browser::build_api_client;
use crate::components::layout::AppLayout;
use crate::components::toast::{ToastContext, ToastProvider};
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::master_data::MasterDataPage;
use crate::pages::master_resource::MasterResourcePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::reports::ReportsPage;
use crate::pages::signup::SignupPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bizdesk-console.css" />
        <Title text="Admin Panel" />
        <ToastProvider>
            <ApiProvider>
                <Router>
                    <Routes fallback=|| view! { <NotFoundPage /> }.into_any()>
                        <Route path=StaticSegment("login") view=LoginPage />
                        <Route path=StaticSegment("signup") view=SignupPage />
                        <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard" /> } />
                        <Route path=StaticSegment("dashboard") view=DashboardView />
                        <Route path=StaticSegment("master-data") view=MasterDataView />
                        <Route
                            path=(StaticSegment("master-data"), ParamSegment("resource"))
                            view=MasterResourceView
                        />
                        <Route path=StaticSegment("reports") view=ReportsView />
                        <Route path=StaticSegment("profile") view=ProfileView />
                    </Routes>
                </Router>
            </ApiProvider>
        </ToastProvider>
    }
}

/// Builds the API client once and shares it, with the services and query cache, via context.
#[component]
fn ApiProvider(children: Children) -> impl IntoView {
    let toasts = expect_context::<ToastContext>();
    let client = build_api_client(toasts);

    provide_context(AuthService::new(client.clone()));
    provide_context(ProfileService::new(client.clone()));
    provide_context(QueryCache::new());
    provide_context(client);

    children()
}

#[component]
fn DashboardView() -> impl IntoView {
    view! {
        <AppLayout>
            <DashboardPage />
        </AppLayout>
    }
}

#[component]
fn MasterDataView() -> impl IntoView {
    view! {
        <AppLayout>
            <MasterDataPage />
        </AppLayout>
    }
}

#[component]
fn MasterResourceView() -> impl IntoView {
    view! {
        <AppLayout>
            <MasterResourcePage />
        </AppLayout>
    }
}

#[component]
fn ReportsView() -> impl IntoView {
    view! {
        <AppLayout>
            <ReportsPage />
        </AppLayout>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    view! {
        <AppLayout>
            <ProfilePage />
        </AppLayout>
    }
}
