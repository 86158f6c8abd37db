use yew::prelude::*;
use yew_router::prelude::*;

use crate::animator::SectionAnimator;
use crate::catalog;
use crate::components::contact::ContactForm;
use crate::components::header::Header;
use crate::components::project_card::ProjectCard;
use crate::scene::renderer::PinScene;
use crate::scroll::ScrollTracker;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let progress = use_state(|| 0.0f64);

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

    // Hero controller: one tracker feeds the scene fade, one animator scrubs
    // the content sections. Dropping the handles on unmount is what detaches
    // their listeners.
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = ScrollTracker::attach(Callback::from(move |p: f64| {
                    progress.set(p);
                }));
                let animator = SectionAnimator::attach();
                move || {
                    drop(tracker);
                    drop(animator);
                }
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Header />

            <section class="hero-section">
                <PinScene progress={*progress} />
                <div class="hero-copy">
                    <h1>{"ephileo"}</h1>
                    <p class="hero-strapline">{"build products people love"}</p>
                    <p class="hero-hint">
                        {"Scroll down to explore our projects."}
                    </p>
                </div>
                <div class="scroll-indicator">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </section>

            <section id="projects" class="projects-section">
                <div class="section-inner">
                    <div class="section-heading animate-section">
                        <span class="section-badge projects-badge">{"Featured Work"}</span>
                        <h2>{"Our Projects"}</h2>
                        <p>{"Beautifully designed applications that bring joy to people's lives"}</p>
                    </div>
                    <div class="project-grid">
                        {
                            catalog::projects().iter().enumerate().map(|(index, project)| {
                                html! {
                                    <ProjectCard key={project.id} {project} {index} />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="about" class="about-section">
                <div class="section-inner narrow">
                    <div class="section-heading animate-section">
                        <span class="section-badge about-badge">{"Our Story"}</span>
                        <h2>{"About Ephileo"}</h2>
                    </div>
                    <div class="about-card animate-section">
                        <p>
                            {"At Ephileo, we believe in crafting digital experiences that \
                              resonate with users on a deeper level. Every application we \
                              build is designed with intention, focusing on beautiful \
                              aesthetics and intuitive interactions that make people \
                              genuinely enjoy using our products."}
                        </p>
                        <p>
                            {"From engaging games that bring friends together to apps that \
                              simplify everyday life, we're dedicated to building products \
                              people love."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact-section">
                <div class="section-inner narrow">
                    <div class="section-heading animate-section">
                        <span class="section-badge contact-badge">{"Let's Connect"}</span>
                        <h2>{"Get in Touch"}</h2>
                        <p>{"Have a question or want to work together? Send us a message."}</p>
                    </div>
                    <div class="animate-section">
                        <ContactForm />
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <div class="footer-mark">{"E"}</div>
                        <p>{ format!("© {} Ephileo. All rights reserved.", chrono::Utc::now().format("%Y")) }</p>
                    </div>
                    <div class="footer-links">
                        {
                            catalog::projects().iter().map(|project| {
                                html! {
                                    <Link<Route>
                                        key={project.id}
                                        to={Route::Privacy { slug: project.id.to_string() }}
                                        classes="footer-link"
                                    >
                                        { format!("{} Privacy", project.name) }
                                    </Link<Route>>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .home-page {
                    background: #000008;
                    min-height: 100vh;
                }
                .hero-section {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-copy {
                    position: absolute;
                    top: 15%;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1.5rem;
                    pointer-events: none;
                }
                .hero-copy h1 {
                    font-size: clamp(3.5rem, 10vw, 6rem);
                    font-weight: 800;
                    letter-spacing: -0.03em;
                    margin-bottom: 1rem;
                    background: linear-gradient(90deg, #ffffff, #dbeafe, #ffffff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-strapline {
                    font-size: clamp(1.1rem, 3vw, 1.5rem);
                    color: #a1a1aa;
                    margin-bottom: 2rem;
                }
                .hero-hint {
                    font-size: 0.85rem;
                    color: #71717a;
                    max-width: 26rem;
                    margin: 0 auto;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid #52525b;
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                    z-index: 10;
                }
                .scroll-indicator-dot {
                    width: 0.375rem;
                    height: 0.375rem;
                    margin-top: 0.5rem;
                    background: #ffffff;
                    border-radius: 50%;
                    animation: scroll-bounce 1.5s ease-in-out infinite;
                }
                @keyframes scroll-bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(1rem); }
                }
                .projects-section {
                    position: relative;
                    z-index: 10;
                    padding: 8rem 1.5rem;
                    background: linear-gradient(to bottom, #000008, #0a0a1a, #000001);
                }
                .about-section {
                    position: relative;
                    z-index: 10;
                    padding: 8rem 1.5rem;
                    background: linear-gradient(to bottom, #000001, rgba(88, 28, 135, 0.15), #000008);
                }
                .contact-section {
                    position: relative;
                    z-index: 10;
                    padding: 8rem 1.5rem;
                }
                .section-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .section-inner.narrow {
                    max-width: 44rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: clamp(2rem, 5vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1rem;
                    background: linear-gradient(90deg, #ffffff, #dbeafe, #ffffff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .section-heading p {
                    color: #a1a1aa;
                    font-size: 1.1rem;
                    max-width: 40rem;
                    margin: 0 auto;
                }
                .section-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.85rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }
                .projects-badge {
                    background: rgba(59, 130, 246, 0.1);
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    color: #60a5fa;
                }
                .about-badge {
                    background: rgba(139, 92, 246, 0.1);
                    border: 1px solid rgba(139, 92, 246, 0.2);
                    color: #a78bfa;
                }
                .contact-badge {
                    background: rgba(16, 185, 129, 0.1);
                    border: 1px solid rgba(16, 185, 129, 0.2);
                    color: #34d399;
                }
                .animate-section {
                    opacity: 0;
                    transform: translateY(100px);
                    /* Short lag smooths the scrub and lets per-card
                       transition-delay stagger the gallery reveal. */
                    transition: opacity 0.4s ease-out, transform 0.4s ease-out;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 1.5rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .project-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .project-card-banner {
                    height: 10rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .project-card-banner img {
                    max-height: 6rem;
                    border-radius: 1rem;
                }
                .project-card-monogram {
                    font-size: 3rem;
                    font-weight: 800;
                }
                .project-card-body {
                    padding: 1.5rem;
                }
                .project-card-body h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.25rem;
                }
                .project-card-tagline {
                    color: #d4d4d8;
                    font-size: 0.95rem;
                    margin-bottom: 0.75rem;
                }
                .project-card-description {
                    color: #a1a1aa;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }
                .about-card {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                }
                .about-card p {
                    color: #d4d4d8;
                    font-size: 1.05rem;
                    line-height: 1.8;
                }
                .about-card p + p {
                    margin-top: 1.5rem;
                }
                .contact-card {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                }
                .form-field {
                    margin-bottom: 1.5rem;
                }
                .form-field label {
                    display: block;
                    font-size: 0.9rem;
                    color: #d4d4d8;
                    margin-bottom: 0.5rem;
                }
                .form-field input,
                .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    font-size: 1rem;
                    font-family: inherit;
                    resize: none;
                    transition: border-color 0.2s ease;
                }
                .form-field input:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: rgba(16, 185, 129, 0.5);
                }
                .form-field input:disabled,
                .form-field textarea:disabled {
                    opacity: 0.5;
                }
                .form-status {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }
                .form-status.success {
                    background: rgba(16, 185, 129, 0.1);
                    border: 1px solid rgba(16, 185, 129, 0.3);
                    color: #6ee7b7;
                }
                .form-status.error {
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.3);
                    color: #fca5a5;
                }
                .submit-button {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #10b981, #06b6d4);
                    color: #ffffff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: filter 0.2s ease;
                }
                .submit-button:hover:not(:disabled) {
                    filter: brightness(1.1);
                }
                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .button-spinner {
                    display: inline-block;
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #ffffff;
                    border-radius: 50%;
                    vertical-align: -0.15rem;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .site-footer {
                    position: relative;
                    z-index: 10;
                    padding: 3rem 1.5rem;
                    background: #000000;
                }
                .footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .footer-brand p {
                    color: #a1a1aa;
                    font-size: 0.85rem;
                }
                .footer-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    font-size: 0.85rem;
                }
                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .footer-link {
                    color: #71717a;
                    font-size: 0.85rem;
                    transition: color 0.2s ease;
                }
                .footer-link:hover {
                    color: #34d399;
                }
                "#}
            </style>
        </div>
    }
}
