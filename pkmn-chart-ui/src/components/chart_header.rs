//! Chart header component with title and interaction hint.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// How to select on this chart (e.g., "Click a bar; shift-click to add")
    #[props(default = String::new())]
    pub hint: String,
}

/// Header for chart sections showing title and optional hint.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #aaa;",
                    "{props.hint}"
                }
            }
        }
    }
}
