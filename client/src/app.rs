use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Catalog};
use crate::offer_page::OfferPage;
use crate::routing::{self, CurrentRoute, Route};
use crate::spinner::Spinner;

#[derive(Debug, Clone, PartialEq)]
enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

fn remove_loading_shell() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(shell) = document.get_element_by_id("app-loading-shell") {
        shell.remove();
    }
}

fn start_catalog_load(catalog: RwSignal<Catalog>, status: RwSignal<LoadStatus>) {
    spawn_local(async move {
        match api::load_catalog().await {
            Ok(loaded) => {
                web_sys::console::info_1(
                    &format!(
                        "catalog loaded: {} offers, {} reviewed offers",
                        loaded.offers.len(),
                        loaded.reviews.len()
                    )
                    .into(),
                );
                catalog.set(loaded);
                status.set(LoadStatus::Ready);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Catalog fetch failed: {e}").into());
                status.set(LoadStatus::Failed(e));
            }
        }
    });
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--gray">
            <main class="page__main page__main--not-found">
                <div class="container">
                    <h1 class="not-found__title">"404. Page not found"</h1>
                    <a class="not-found__link" href="/">"Back to the main page"</a>
                </div>
            </main>
        </div>
    }
}

#[component]
fn LoadFailed(message: String) -> impl IntoView {
    view! {
        <div class="page page--gray">
            <main class="page__main">
                <div class="container">
                    <p class="load-error">{format!("Could not load offers: {message}")}</p>
                </div>
            </main>
        </div>
    }
}

/// Root application component. Provides the route and catalog via context.
#[component]
pub fn App() -> impl IntoView {
    let route: RwSignal<Route> = RwSignal::new(Route::parse(&routing::current_path()));
    let catalog: RwSignal<Catalog> = RwSignal::new(Catalog::default());
    let status: RwSignal<LoadStatus> = RwSignal::new(LoadStatus::Loading);

    provide_context(CurrentRoute(route));
    provide_context(catalog);

    routing::bind_popstate(route);
    start_catalog_load(catalog, status);

    Effect::new(move || {
        if status.get() != LoadStatus::Loading {
            remove_loading_shell();
        }
    });

    move || match (status.get(), route.get()) {
        (LoadStatus::Loading, _) => view! { <Spinner /> }.into_any(),
        (LoadStatus::Failed(message), _) => view! { <LoadFailed message=message /> }.into_any(),
        (LoadStatus::Ready, Route::Offer(offer_id)) => {
            view! { <OfferPage offer_id=offer_id /> }.into_any()
        }
        (LoadStatus::Ready, Route::NotFound) => view! { <NotFoundPage /> }.into_any(),
    }
}
