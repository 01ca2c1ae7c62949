use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use energy_dashboard::components::NavBar;
use energy_dashboard::models::page::Page;
use energy_dashboard::pages::{CountryPage, EnergyPage, ExplorerPage, LandingPage, PredictionPage};

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Page described by the address bar and the current history entry.
fn current_page() -> Page {
    let state = web_sys::window()
        .and_then(|w| w.history().ok())
        .and_then(|h| h.state().ok())
        .and_then(|state| state.as_string());
    Page::from_location(&current_path(), state).resolve()
}

/// Keeps the address bar and history state in step with the shown page.
fn sync_url(page: &Page, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let path = page.path();
    let state = page.history_state().map_or(JsValue::NULL, JsValue::from_str);
    let result = if replace {
        history.replace_state_with_url(&state, "", Some(&path))
    } else {
        history.push_state_with_url(&state, "", Some(&path))
    };
    if let Err(e) = result {
        gloo::console::warn!(&format!("Failed to update URL: {e:?}"));
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(current_page);

    // Direct loads of a guarded path land on the resolved page's URL
    {
        let page = page.clone();
        use_effect_with((), move |()| {
            if page.path() != current_path() {
                sync_url(&page, true);
            }
        });
    }

    {
        let page = page.clone();
        use_effect_with((), move |()| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    let next = current_page();
                    if next.path() != current_path() {
                        sync_url(&next, true);
                    }
                    page.set(next);
                })
            });
            move || drop(listener)
        });
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            let next = next.resolve();
            sync_url(&next, false);
            page.set(next);
        })
    };

    let content = match &*page {
        Page::Landing => html! { <LandingPage on_navigate={on_navigate.clone()} /> },
        Page::Country(Some(country)) => html! {
            <CountryPage country={country.clone()} on_navigate={on_navigate.clone()} />
        },
        Page::Country(None) => html! { <LandingPage on_navigate={on_navigate.clone()} /> },
        Page::Energy(kind) => html! { <EnergyPage kind={*kind} /> },
        Page::Prediction => html! { <PredictionPage /> },
        Page::Explorer => html! { <ExplorerPage /> },
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Green Vester"}</h1>
                <p class="subtitle">{"Invest in a Greener World"}</p>
            </header>

            <NavBar current={(*page).clone()} {on_navigate} />

            <main class="app-main">
                {content}
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
