use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

// Reveal window: a section starts appearing when its top crosses 85% of the
// viewport height and is fully revealed by 60%.
const WINDOW_ENTRY: f64 = 0.85;
const WINDOW_EXIT: f64 = 0.60;

/// Continuous scrub value in [0, 1] for a section whose bounding-box top sits
/// at `top` pixels from the viewport top. Not a one-shot trigger: scrolling
/// back up walks the same curve in reverse.
pub fn section_reveal(top: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 1.0;
    }
    let entry = viewport_height * WINDOW_ENTRY;
    let exit = viewport_height * WINDOW_EXIT;
    ((entry - top) / (entry - exit)).clamp(0.0, 1.0)
}

/// Visual parameters for a reveal value: fade in while sliding up from 100px.
pub fn reveal_transform(t: f64) -> (f64, f64) {
    (t, 100.0 * (1.0 - t))
}

/// Drives every `.animate-section` element from the live scroll position.
///
/// Owns its `scroll` and `resize` listeners; both are removed on drop so a
/// torn-down view leaves no dangling observers. Resize re-samples all section
/// measurements, which is what invalidates cached-looking positions.
pub struct SectionAnimator {
    window: web_sys::Window,
    scroll_cb: Closure<dyn FnMut()>,
    resize_cb: Closure<dyn FnMut()>,
}

impl SectionAnimator {
    pub fn attach() -> Option<Self> {
        let window = web_sys::window()?;

        let scroll_cb = Closure::wrap(Box::new(apply_to_sections) as Box<dyn FnMut()>);
        let resize_cb = Closure::wrap(Box::new(apply_to_sections) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
            .ok()?;
        window
            .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            .ok()?;

        // Initial pass so above-the-fold sections don't stay hidden.
        scroll_cb
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL)
            .ok();

        Some(Self {
            window,
            scroll_cb,
            resize_cb,
        })
    }
}

fn apply_to_sections() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let Ok(sections) = document.query_selector_all(".animate-section") else {
        return;
    };
    for i in 0..sections.length() {
        let Some(node) = sections.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let top = element.get_bounding_client_rect().top();
        let (opacity, translate_y) = reveal_transform(section_reveal(top, viewport));
        let style = element.style();
        let _ = style.set_property("opacity", &format!("{:.3}", opacity));
        let _ = style.set_property("transform", &format!("translateY({:.1}px)", translate_y));
    }
}

impl Drop for SectionAnimator {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll_cb.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn test_section_hidden_before_entry() {
        assert_eq!(section_reveal(900.0, VIEWPORT), 0.0);
        assert_eq!(section_reveal(850.0, VIEWPORT), 0.0);
    }

    #[test]
    fn test_section_fully_revealed_past_exit() {
        assert_eq!(section_reveal(600.0, VIEWPORT), 1.0);
        assert_eq!(section_reveal(0.0, VIEWPORT), 1.0);
        assert_eq!(section_reveal(-400.0, VIEWPORT), 1.0);
    }

    #[test]
    fn test_reveal_is_continuous_inside_window() {
        let quarter = section_reveal(787.5, VIEWPORT);
        let half = section_reveal(725.0, VIEWPORT);
        assert!((quarter - 0.25).abs() < 1e-9, "got {}", quarter);
        assert!((half - 0.5).abs() < 1e-9, "got {}", half);
    }

    #[test]
    fn test_reveal_monotonic_as_section_rises() {
        let mut last = -1.0;
        let mut top = 900.0;
        while top > 500.0 {
            let t = section_reveal(top, VIEWPORT);
            assert!(t >= last, "reveal must not regress while scrolling down");
            last = t;
            top -= 10.0;
        }
    }

    #[test]
    fn test_zero_viewport_degrades_to_visible() {
        assert_eq!(section_reveal(100.0, 0.0), 1.0);
    }

    #[test]
    fn test_reveal_transform_endpoints() {
        assert_eq!(reveal_transform(0.0), (0.0, 100.0));
        assert_eq!(reveal_transform(1.0), (1.0, 0.0));
        let (opacity, y) = reveal_transform(0.5);
        assert!((opacity - 0.5).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }
}
