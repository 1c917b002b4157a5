//! Startup failure panel.

use dioxus::prelude::*;
use lrd_core::dataset::LoadFailure;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub failure: LoadFailure,
}

/// Explains why the dashboard has no data: the dataset URL, the reason, and
/// whether an offline snapshot was available to fall back on.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let failure = &props.failure;
    let snapshot_note = if failure.snapshot_tried {
        "The embedded offline snapshot could not be used either."
    } else {
        "No offline snapshot was built in. Run `lrd-cli fetch` and rebuild to embed one."
    };

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Could not load launch records" }
            p {
                style: "margin: 6px 0; font-size: 13px; word-break: break-all;",
                "Source: {failure.url}"
            }
            p {
                style: "margin: 6px 0; font-size: 13px;",
                "{failure.message}"
            }
            p {
                style: "margin: 6px 0 0 0; font-size: 12px; color: #8E2424;",
                "{snapshot_note}"
            }
        }
    }
}
