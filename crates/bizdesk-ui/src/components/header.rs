use bizdesk_client::{ApiClient, AuthService, QueryCache, LOGIN_PATH};
use chrono::{Local, NaiveDate};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

pub const FALLBACK_USER_NAME: &str = "Admin User";
pub const FALLBACK_BUSINESS_NAME: &str = "My Business Name";

/// e.g. "Monday, March 2, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Ends the session and forgets every cached query so the next user starts clean.
pub fn sign_out(auth: &AuthService, cache: &QueryCache) {
    auth.logout();
    cache.clear();
}

#[component]
pub fn Header() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = expect_context::<AuthService>();
    let cache = expect_context::<QueryCache>();
    let navigate = use_navigate();

    // the session lives in browser storage, so names are filled in after hydration
    let (userName, setUserName) = signal(FALLBACK_USER_NAME.to_string());
    let (businessName, setBusinessName) = signal(FALLBACK_BUSINESS_NAME.to_string());
    Effect::new(move |_| {
        let session = client.session();
        if let Some(name) = session.display_name() {
            setUserName.set(name);
        }
        let business = session
            .user()
            .and_then(|user| user.business)
            .map(|business| business.business_name)
            .filter(|name| !name.is_empty());
        if let Some(name) = business {
            setBusinessName.set(name);
        }
    });
    let today = format_long_date(Local::now().date_naive());

    let (menuOpen, setMenuOpen) = signal(false);

    let goToProfile = {
        let navigate = navigate.clone();
        move |_: MouseEvent| {
            setMenuOpen.set(false);
            navigate("/profile", Default::default());
        }
    };

    let logout = move |_: MouseEvent| {
        setMenuOpen.set(false);
        sign_out(&auth, &cache);
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <header class="top-bar">
            <strong class="business-name">{move || businessName.get()}</strong>
            <div class="top-bar-right">
                <span class="top-bar-date">{today}</span>
                <div class="user-menu">
                    <button
                        class="btn btn-ghost user-menu-trigger"
                        on:click=move |_| setMenuOpen.update(|open| *open = !*open)
                    >
                        <span class="avatar">"\u{263A}"</span>
                        <span>{move || userName.get()}</span>
                    </button>
                    <ul class=move || {
                        if menuOpen.get() { "user-menu-items open" } else { "user-menu-items" }
                    }>
                        <li>
                            <button class="btn btn-ghost" on:click=goToProfile>
                                "My Profile"
                            </button>
                        </li>
                        <li>
                            <button class="btn btn-ghost" on:click=logout>
                                "Logout"
                            </button>
                        </li>
                    </ul>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use bizdesk_client::services::PROFILE_QUERY_KEY;
    use bizdesk_client::{
        ClientConfig, ReqwestTransport, SessionContext, Storage, TracingNotifier,
    };
    use bizdesk_types::LoginData;

    use crate::browser::BrowserNavigator;

    #[test]
    fn test_sign_out_drops_session_and_cached_profile() {
        let session = SessionContext::new(Storage::in_memory());
        session.establish(&LoginData {
            access_token: Some("tok-1".into()),
            user: None,
        });
        let client = ApiClient::new(
            ClientConfig::from_lookup(|_| None),
            session,
            Arc::new(ReqwestTransport::new()),
            Arc::new(TracingNotifier),
            Arc::new(BrowserNavigator),
        );
        let auth = AuthService::new(client.clone());
        let cache = QueryCache::new();
        cache.insert(PROFILE_QUERY_KEY, &"previous user");

        sign_out(&auth, &cache);

        assert!(!client.session().is_authenticated());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_long_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
        assert_eq!(format_long_date(date), "Monday, March 2, 2026");
    }
}
