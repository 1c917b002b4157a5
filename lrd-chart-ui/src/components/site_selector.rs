//! Dropdown selector for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;

/// Launch site dropdown.
/// Reads the options from AppState and updates selected_site on change.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let sites = state.sites.read().clone();
    let selected = (state.selected_site)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("site selection changed to {}", value);
        state.selected_site.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site-dropdown",
                style: "font-weight: bold; margin-right: 8px;",
                "Launch Site: "
            }
            select {
                id: "site-dropdown",
                title: "Select Launch Site",
                style: "min-width: 240px; padding: 4px;",
                onchange: on_change,
                for site in sites.iter() {
                    option {
                        value: "{site.value}",
                        selected: site.value == selected,
                        "{site.label}"
                    }
                }
            }
        }
    }
}
