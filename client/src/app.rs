//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::identity::IdentityService;
use crate::net::api::ApiConfig;
use crate::pages::{history::HistoryPage, submit::SubmitPage};
use crate::state::auth::AuthState;
use crate::util::persistence::UidStore;

/// Collaborators built once at startup and shared with every view.
#[derive(Clone)]
pub struct Services {
    pub identity: Rc<dyn IdentityService>,
    pub store: Rc<dyn UidStore>,
}

impl Services {
    /// Browser bridge when hydrating, in-memory stand-ins on the server.
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self {
                identity: Rc::new(crate::identity::browser::BrowserIdentity),
                store: Rc::new(crate::util::persistence::BrowserUidStore),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {
                identity: Rc::new(crate::identity::memory::MemoryIdentity::default()),
                store: Rc::new(crate::util::persistence::MemoryUidStore::default()),
            }
        }
    }
}

/// Context handle for [`Services`]. Trait objects are `!Send`, so they live
/// in local arena storage and the handle itself is what gets captured.
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the service handle, API location, and auth state, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services: ServicesHandle = StoredValue::new_local(Services::for_environment());
    provide_context(services);
    provide_context(ApiConfig::from_build_env());
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Title text="Summary AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SubmitPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
            </Routes>
        </Router>
    }
}
