//! Payload mass range slider with two handles.

use crate::state::AppState;
use dioxus::prelude::*;
use lrd_core::payload_range::{slider_marks, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};

/// Two range inputs sharing the 0-10000 kg track.
///
/// Handles move through [`PayloadRange::with_low`] and
/// [`PayloadRange::with_high`], so they cannot cross. The label shows the
/// selected range itself; the handles sit on the nearest track mark, so an
/// observed maximum of 9600 kg reads 9600 while its handle rests at 10000.
///
/// [`PayloadRange::with_low`]: lrd_core::payload_range::PayloadRange::with_low
/// [`PayloadRange::with_high`]: lrd_core::payload_range::PayloadRange::with_high
#[component]
pub fn PayloadRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let range = (state.payload)();
    let (low_handle, high_handle) = range.handle_positions();
    let low = range.low();
    let high = range.high();
    let marks = slider_marks();

    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let moved = (state.payload)().with_low(value);
            state.payload.set(moved);
        }
    };

    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            let moved = (state.payload)().with_high(value);
            state.payload.set(moved);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            p {
                style: "font-weight: bold; margin: 0 0 4px 0;",
                "Payload range (Kg): {low} - {high}"
            }
            datalist {
                id: "payload-marks",
                for mark in marks.iter() {
                    option { value: "{mark}", label: "{mark}" }
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px; max-width: 720px;",
                input {
                    id: "payload-slider-low",
                    r#type: "range",
                    min: "{SLIDER_MIN}",
                    max: "{SLIDER_MAX}",
                    step: "{SLIDER_STEP}",
                    list: "payload-marks",
                    value: "{low_handle}",
                    oninput: on_low_change,
                }
                input {
                    id: "payload-slider-high",
                    r#type: "range",
                    min: "{SLIDER_MIN}",
                    max: "{SLIDER_MAX}",
                    step: "{SLIDER_STEP}",
                    list: "payload-marks",
                    value: "{high_handle}",
                    oninput: on_high_change,
                }
                div {
                    style: "display: flex; justify-content: space-between; font-size: 11px; color: #666;",
                    for mark in marks.iter() {
                        span { "{mark}" }
                    }
                }
            }
        }
    }
}
