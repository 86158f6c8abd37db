use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectPageProps {
    pub slug: String,
}

/// Not-found fallback shared by the project and legal pages: rendered
/// content with a single way back home, never a hard 404.
#[function_component(ProjectNotFound)]
pub fn project_not_found() -> Html {
    html! {
        <div class="not-found-page">
            <div class="not-found-inner">
                <h1>{"Project not found"}</h1>
                <Link<Route> to={Route::Home} classes="not-found-link">
                    {"Go back home"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    background: #000000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .not-found-inner {
                    text-align: center;
                }
                .not-found-inner h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .not-found-link {
                    color: #a1a1aa;
                    transition: color 0.2s ease;
                }
                .not-found-link:hover {
                    color: #ffffff;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let Some(project) = catalog::get_project(&props.slug) else {
        return html! { <ProjectNotFound /> };
    };

    html! {
        <div class="project-page">
            <header class="project-page-header">
                <div class="project-header-inner">
                    <Link<Route> to={Route::Home} classes="back-link">
                        {"← Back home"}
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="wordmark">
                        {"ephileo"}
                    </Link<Route>>
                </div>
            </header>

            <main class="project-main">
                <span
                    class="project-chip"
                    style={format!(
                        "background-color: {}20; color: {};",
                        project.color, project.accent_color
                    )}
                >
                    { project.name }
                </span>
                <h1>{ project.tagline }</h1>
                <p class="project-description">{ project.description }</p>
                {
                    if let Some(icon) = project.icon {
                        html! {
                            <div
                                class="project-hero-banner"
                                style={format!(
                                    "background: linear-gradient(135deg, {}33, {}22);",
                                    project.color, project.accent_color
                                )}
                            >
                                <img src={icon} alt={project.name} />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="project-legal-links">
                    <Link<Route> to={Route::Privacy { slug: project.id.to_string() }}>
                        {"Privacy Policy"}
                    </Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Terms { slug: project.id.to_string() }}>
                        {"Terms & Conditions"}
                    </Link<Route>>
                </div>
            </main>

            <footer class="project-page-footer">
                <Link<Route> to={Route::Home} classes="wordmark">{"ephileo"}</Link<Route>>
                <p>{ format!("© {} Ephileo. All rights reserved.", chrono::Utc::now().format("%Y")) }</p>
            </footer>

            <style>
                {r#"
                .project-page {
                    min-height: 100vh;
                    background: #000000;
                }
                .project-page-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #27272a;
                }
                .project-header-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .back-link {
                    color: #a1a1aa;
                    transition: color 0.2s ease;
                }
                .back-link:hover {
                    color: #ffffff;
                }
                .wordmark {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .project-main {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .project-chip {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.85rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }
                .project-main h1 {
                    font-size: clamp(2rem, 6vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .project-description {
                    color: #a1a1aa;
                    font-size: 1.1rem;
                    line-height: 1.8;
                    max-width: 40rem;
                    margin-bottom: 3rem;
                }
                .project-hero-banner {
                    border-radius: 1.5rem;
                    padding: 3rem;
                    display: flex;
                    justify-content: center;
                    margin-bottom: 3rem;
                }
                .project-hero-banner img {
                    max-height: 12rem;
                    border-radius: 1rem;
                }
                .project-legal-links {
                    color: #71717a;
                    font-size: 0.9rem;
                }
                .project-legal-links a {
                    color: #a1a1aa;
                    transition: color 0.2s ease;
                }
                .project-legal-links a:hover {
                    color: #ffffff;
                }
                .project-page-footer {
                    border-top: 1px solid #27272a;
                    padding: 2rem 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .project-page-footer p {
                    color: #71717a;
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </div>
    }
}
