//! Summary of the active selections with a reset button.

use crate::state::AppState;
use dioxus::prelude::*;
use pkmn_filter::{Dimension, SelectionChange};

/// Lists what is selected on each chart and offers "Clear selections".
#[component]
pub fn SelectionSummary() -> Element {
    let mut state = use_context::<AppState>();
    let selection = state.selection.read().clone();

    let mut parts: Vec<String> = Dimension::ALL
        .iter()
        .filter(|d| !selection.labels(**d).is_empty())
        .map(|d| {
            let labels: Vec<&str> = selection.labels(*d).iter().map(String::as_str).collect();
            format!("{}: {}", d.column(), labels.join(", "))
        })
        .collect();
    parts.extend(
        selection
            .ranges
            .iter()
            .map(|(stat, range)| format!("{}: {}-{}", stat, range.low, range.high)),
    );

    let on_clear = move |_: Event<MouseData>| {
        state.apply_change(&SelectionChange::Reset);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; font-size: 13px;",
            if parts.is_empty() {
                span { style: "color: #aaa;", "No active selections" }
            } else {
                for part in parts.iter() {
                    span {
                        style: "padding: 2px 8px; border-radius: 10px; background: #e6c339; color: #222;",
                        "{part}"
                    }
                }
                button {
                    style: "margin-left: auto; cursor: pointer;",
                    onclick: on_clear,
                    "Clear selections"
                }
            }
        }
    }
}
