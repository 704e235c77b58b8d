//! Top navigation bar with page links and the account control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on both views. Sign-in and sign-out run through the shared
//! session flows; failures are logged and leave the bar usable.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::app::ServicesHandle;
use crate::net::api::ApiConfig;
use crate::state::auth::AuthState;

const SIGNED_IN_LINKS: &[(&str, &str)] = &[("/", "New"), ("/history", "History")];

/// Page links shown in the bar; signed-out visitors get none.
fn nav_links(signed_in: bool) -> &'static [(&'static str, &'static str)] {
    if signed_in { SIGNED_IN_LINKS } else { &[] }
}

/// Greeting shown next to the avatar.
fn greeting(display_name: &str) -> String {
    let name = display_name.trim();
    if name.is_empty() { "Hi there".to_owned() } else { format!("Hi, {name}") }
}

/// Fallback avatar glyph when the provider has no photo.
fn avatar_initial(display_name: &str) -> String {
    display_name
        .trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Navigation bar shown at the top of every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<ServicesHandle>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let menu_open = RwSignal::new(false);

    let on_sign_in = move |_| {
        if auth.with_untracked(|a| a.busy) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            auth.update(|a| a.busy = true);
            let services = services.get_value();
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let outcome =
                    crate::identity::session::sign_in(services.identity.as_ref(), services.store.as_ref(), &config)
                        .await;
                auth.update(|a| {
                    a.busy = false;
                    match outcome {
                        Ok(identity) => a.apply(crate::identity::SessionEvent::SignedIn(identity)),
                        Err(e) => leptos::logging::error!("sign-in failed: {e}"),
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (services, config);
        }
    };

    let on_sign_out = move |_| {
        menu_open.set(false);
        if auth.with_untracked(|a| a.busy) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            auth.update(|a| a.busy = true);
            let services = services.get_value();
            leptos::task::spawn_local(async move {
                let outcome = crate::identity::session::sign_out(services.identity.as_ref(), services.store.as_ref()).await;
                auth.update(|a| {
                    a.busy = false;
                    match outcome {
                        Ok(()) => a.apply(crate::identity::SessionEvent::SignedOut),
                        Err(e) => leptos::logging::error!("sign-out failed: {e}"),
                    }
                });
            });
        }
    };

    let account = move || auth.with(|a| a.identity.clone());

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__title">"Summary AI"</a>
            <span class="nav-bar__spacer"></span>
            {move || {
                nav_links(auth.with(|a| a.identity.is_some()))
                    .iter()
                    .map(|(href, label)| view! { <a href=*href class="nav-bar__link">{*label}</a> })
                    .collect_view()
            }}

            <Show
                when=move || auth.with(|a| a.identity.is_some())
                fallback=move || {
                    view! {
                        <button
                            class="btn btn--primary nav-bar__sign-in"
                            disabled=move || auth.with(|a| a.busy || a.loading)
                            on:click=on_sign_in
                        >
                            "Sign In"
                        </button>
                    }
                }
            >
                <span class="nav-bar__greeting">
                    {move || account().map(|i| greeting(&i.display_name)).unwrap_or_default()}
                </span>
                <button
                    class="nav-bar__avatar"
                    title="Account"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        account().map(|identity| {
                            if identity.photo_url.is_empty() {
                                leptos::either::Either::Left(avatar_initial(&identity.display_name))
                            } else {
                                leptos::either::Either::Right(view! {
                                    <img src=identity.photo_url alt=identity.display_name referrerpolicy="no-referrer"/>
                                })
                            }
                        })
                    }}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="nav-bar__menu" role="menu">
                        <a href="/" class="nav-bar__menu-item" on:click=move |_| menu_open.set(false)>"New"</a>
                        <a href="/history" class="nav-bar__menu-item" on:click=move |_| menu_open.set(false)>"History"</a>
                        <button
                            class="nav-bar__menu-item"
                            disabled=move || auth.with(|a| a.busy)
                            on:click=on_sign_out
                        >
                            "Sign Out"
                        </button>
                    </div>
                </Show>
            </Show>
        </nav>
    }
}
