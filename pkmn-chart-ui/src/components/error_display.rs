//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a fatal error (the dataset could not be loaded).
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #4a1c1c; color: #ffcdd2; border-radius: 4px; border: 1px solid #ef9a9a;",
            strong { "Dataset error: " }
            "{props.message}"
        }
    }
}
