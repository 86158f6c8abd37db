use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::Callback;

/// Normalized page scroll progress in [0, 1].
///
/// Returns 0.0 when the document has no scrollable overflow, so consumers
/// degrade to the "top of page" state instead of dividing by zero.
pub fn page_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

/// Scales page progress so the hero region sees the full [0, 1] sweep while
/// the user is still inside the first fifth of the page.
pub fn hero_progress(progress: f64) -> f64 {
    (progress * 5.0).min(1.0)
}

/// Owned subscription to the window `scroll` event.
///
/// Holding the value keeps the listener alive; dropping it detaches the
/// listener, so an effect cleanup that drops the tracker cannot leak the
/// closure across navigations.
pub struct ScrollTracker {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollTracker {
    pub fn attach(on_progress: Callback<f64>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let callback = Closure::wrap(Box::new(move || {
            if let Some(root) = document.document_element() {
                let progress = page_progress(
                    root.scroll_top() as f64,
                    root.scroll_height() as f64,
                    root.client_height() as f64,
                );
                on_progress.emit(progress);
            }
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        // Emit the initial position so consumers don't wait for the first event.
        callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL)
            .ok();

        Some(Self { window, callback })
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped_to_unit_range() {
        assert_eq!(page_progress(-50.0, 3000.0, 800.0), 0.0);
        assert_eq!(page_progress(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(page_progress(2200.0, 3000.0, 800.0), 1.0);
        assert_eq!(page_progress(9999.0, 3000.0, 800.0), 1.0);
        let mid = page_progress(1100.0, 3000.0, 800.0);
        assert!((mid - 0.5).abs() < 1e-9, "halfway scroll should be 0.5, got {}", mid);
    }

    #[test]
    fn test_no_overflow_degrades_to_zero() {
        assert_eq!(page_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(page_progress(100.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic_in_scroll_top() {
        let mut last = -1.0;
        for i in 0..=100 {
            let p = page_progress(i as f64 * 22.0, 3000.0, 800.0);
            assert!(p >= last, "progress must never decrease while scrolling down");
            last = p;
        }
    }

    #[test]
    fn test_hero_progress_saturates_after_first_fifth() {
        assert_eq!(hero_progress(0.0), 0.0);
        assert!((hero_progress(0.1) - 0.5).abs() < 1e-9);
        assert_eq!(hero_progress(0.2), 1.0);
        assert_eq!(hero_progress(1.0), 1.0);
    }
}
