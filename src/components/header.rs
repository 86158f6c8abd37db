use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Fixed site header for the home page. Picks up a solid backdrop once the
/// user scrolls past the top of the hero.
#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
            <div class="header-content">
                <a href="/" class="header-logo">{"ephileo"}</a>
                <nav class="header-nav">
                    <a href="#projects" class="header-link">{"Projects"}</a>
                    <a href="#about" class="header-link">{"About"}</a>
                    <a href="#contact" class="header-link">{"Contact"}</a>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    transition: background 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .site-header.scrolled {
                    background: rgba(0, 0, 8, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom-color: rgba(255, 255, 255, 0.08);
                }
                .header-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                }
                .header-nav {
                    display: flex;
                    gap: 1.5rem;
                }
                .header-link {
                    color: #a1a1aa;
                    font-size: 0.9rem;
                    transition: color 0.2s ease;
                }
                .header-link:hover {
                    color: #fff;
                }
                "#}
            </style>
        </header>
    }
}
