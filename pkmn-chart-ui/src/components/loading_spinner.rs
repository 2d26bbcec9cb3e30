//! Loading indicator component.

use dioxus::prelude::*;

/// Shown until the embedded dataset has been parsed.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #aaa;",
            "Loading battle statistics..."
        }
    }
}
