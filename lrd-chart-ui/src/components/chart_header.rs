//! Dashboard title banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Optional line under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered page title in the dashboard's brown heading colour.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px; text-align: center;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 40px; color: #503D36;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
