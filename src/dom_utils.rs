//! dom_utils.rs – thin helper layer for repetitive DOM operations so the
//! rest of the code base is not sprinkled with class-list plumbing.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

/// Toggle CSS classes so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Remove every child so the element can be cleanly re-rendered.
pub fn clear_children(el: &Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}

/// Current value of the `<input>` an event fired on; empty string when
/// the target is missing or of another type.
pub fn input_value(event: &Event) -> String {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
