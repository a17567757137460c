//! Viewport Queries

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Media query matching viewports narrower than `breakpoint_px`
pub fn narrow_query(breakpoint_px: u32) -> String {
    format!("(max-width: {}px)", breakpoint_px.saturating_sub(1))
}

/// Reactive "is narrow viewport" flag, updated on `matchMedia` change events.
/// Reports `false` when media queries are unavailable.
///
/// Binds a page-lifetime listener: call it once from the root component and
/// share the signal through `AppContext`.
pub fn use_is_narrow(breakpoint_px: u32) -> Signal<bool> {
    let (is_narrow, set_is_narrow) = signal(false);

    let query = narrow_query(breakpoint_px);
    let media = web_sys::window().and_then(|win| win.match_media(&query).ok().flatten());
    let Some(media) = media else {
        log::warn!("matchMedia unavailable; assuming wide viewport");
        return is_narrow.into();
    };
    set_is_narrow.set(media.matches());

    let cb = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
        set_is_narrow.set(ev.matches());
    });
    if media
        .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }

    is_narrow.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_query() {
        assert_eq!(narrow_query(900), "(max-width: 899px)");
        assert_eq!(narrow_query(0), "(max-width: 0px)");
    }
}
