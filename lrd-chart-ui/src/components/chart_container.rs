//! Chart container that reflects the chart's render status.

use crate::chart_status::ChartStatus;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    pub status: ChartStatus,
    #[props(default = 400)]
    pub min_height: u32,
}

/// D3 target div with a pending overlay, an empty-state message and a
/// caption counting what was drawn.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let caption = props.status.caption();
    let empty = matches!(props.status, ChartStatus::Empty { .. });

    rsx! {
        div {
            style: "{style}",
            if props.status.is_pending() {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Drawing chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
            if let Some(caption) = caption {
                p {
                    style: if empty { "margin: 4px 0; text-align: center; color: #999; font-style: italic;" } else { "margin: 4px 0; text-align: right; font-size: 12px; color: #666;" },
                    "{caption}"
                }
            }
        }
    }
}
