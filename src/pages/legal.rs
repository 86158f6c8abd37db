use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{self, Project};
use crate::pages::project::ProjectNotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub slug: String,
}

fn last_updated() -> String {
    chrono::Utc::now().format("%B %-d, %Y").to_string()
}

#[derive(Properties, PartialEq)]
struct LegalShellProps {
    project: &'static Project,
    title: &'static str,
    children: Children,
}

/// Shared chrome for the per-project legal pages: sticky back-header, the
/// project chip in its own colors, the legal copy, footer.
#[function_component(LegalShell)]
fn legal_shell(props: &LegalShellProps) -> Html {
    let project = props.project;

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

    html! {
        <div class="legal-page">
            <header class="legal-header">
                <div class="legal-header-inner">
                    <Link<Route>
                        to={Route::Project { slug: project.id.to_string() }}
                        classes="back-link"
                    >
                        { format!("← Back to {}", project.name) }
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="wordmark">{"ephileo"}</Link<Route>>
                </div>
            </header>

            <main class="legal-main">
                <span
                    class="legal-chip"
                    style={format!(
                        "background-color: {}20; color: {};",
                        project.color, project.accent_color
                    )}
                >
                    { project.name }
                </span>
                <h1>{ props.title }</h1>
                <p class="legal-updated">{ format!("Last updated: {}", last_updated()) }</p>
                <div class="legal-content">
                    { for props.children.iter() }
                </div>
                <div class="legal-links">
                    <Link<Route> to={Route::Terms { slug: project.id.to_string() }}>
                        {"Terms & Conditions"}
                    </Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy { slug: project.id.to_string() }}>
                        {"Privacy Policy"}
                    </Link<Route>>
                </div>
            </main>

            <footer class="legal-footer">
                <Link<Route> to={Route::Home} classes="wordmark">{"ephileo"}</Link<Route>>
                <p>{ format!("© {} Ephileo. All rights reserved.", chrono::Utc::now().format("%Y")) }</p>
            </footer>

            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    background: #000000;
                }
                .legal-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #27272a;
                }
                .legal-header-inner {
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
                .legal-main {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .legal-chip {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.85rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }
                .legal-main h1 {
                    font-size: clamp(2rem, 6vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                .legal-updated {
                    color: #a1a1aa;
                    margin-bottom: 2rem;
                }
                .legal-content section {
                    margin-bottom: 3rem;
                }
                .legal-content h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .legal-content h3 {
                    font-size: 1.2rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .legal-content p {
                    color: #a1a1aa;
                    line-height: 1.8;
                    margin-bottom: 1rem;
                }
                .legal-content ul {
                    color: #a1a1aa;
                    line-height: 1.8;
                    padding-left: 1.5rem;
                }
                .legal-content li {
                    margin-bottom: 0.5rem;
                }
                .legal-content a {
                    color: #ffffff;
                    text-decoration: underline;
                }
                .legal-links {
                    color: #71717a;
                    font-size: 0.9rem;
                }
                .legal-links a {
                    color: #a1a1aa;
                }
                .legal-links a:hover {
                    color: #ffffff;
                }
                .legal-footer {
                    border-top: 1px solid #27272a;
                    padding: 2rem 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .legal-footer p {
                    color: #71717a;
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(props: &LegalProps) -> Html {
    let Some(project) = catalog::get_project(&props.slug) else {
        return html! { <ProjectNotFound /> };
    };
    let name = project.name;

    html! {
        <LegalShell {project} title="Privacy Policy">
            <section>
                <h2>{"1. Introduction"}</h2>
                <p>
                    { format!(
                        "Ephileo (\"we\", \"our\", or \"us\") is committed to protecting your \
                         privacy. This Privacy Policy explains how we collect, use, disclose, \
                         and safeguard your information when you use {}. Please read this \
                         policy carefully to understand our practices regarding your personal \
                         data.",
                        name
                    ) }
                </p>
            </section>

            <section>
                <h2>{"2. Information We Collect"}</h2>
                <p>{"We may collect information about you in various ways, including:"}</p>
                <h3>{"Personal Data"}</h3>
                <p>
                    {"Information you voluntarily provide, such as your name, email address, \
                      and any other information you choose to share when creating an account \
                      or contacting us."}
                </p>
                <h3>{"Usage Data"}</h3>
                <p>
                    { format!(
                        "Information automatically collected when you use {}, including \
                         device information, operating system, usage patterns, and \
                         interaction data to improve our services.",
                        name
                    ) }
                </p>
                <h3>{"Analytics Data"}</h3>
                <p>
                    { format!(
                        "We may use analytics services to collect aggregated, anonymized data \
                         about app usage to help us understand how users interact with {} and \
                         improve our services.",
                        name
                    ) }
                </p>
            </section>

            <section>
                <h2>{"3. How We Use Your Information"}</h2>
                <p>{"We use the information we collect to:"}</p>
                <ul>
                    <li>{ format!("Provide, maintain, and improve {}", name) }</li>
                    <li>{"Personalize your experience and deliver relevant content"}</li>
                    <li>{"Respond to your comments, questions, and support requests"}</li>
                    <li>{"Monitor and analyze usage trends and preferences"}</li>
                    <li>{"Detect, prevent, and address technical issues and security threats"}</li>
                    <li>{"Send you updates, newsletters, and promotional materials (with your consent)"}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Data Sharing and Disclosure"}</h2>
                <p>
                    {"We do not sell, trade, or rent your personal information to third \
                      parties. We may share your information only in the following \
                      circumstances:"}
                </p>
                <ul>
                    <li>{ format!("With service providers who assist us in operating {}", name) }</li>
                    <li>{"To comply with legal obligations or respond to lawful requests"}</li>
                    <li>{"To protect our rights, privacy, safety, or property"}</li>
                    <li>{"In connection with a merger, acquisition, or sale of assets"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Data Security"}</h2>
                <p>
                    {"We implement appropriate technical and organizational measures to \
                      protect your personal data against unauthorized access, alteration, \
                      disclosure, or destruction. However, no method of transmission over \
                      the Internet or electronic storage is 100% secure, and we cannot \
                      guarantee absolute security."}
                </p>
            </section>

            <section>
                <h2>{"6. Your Rights"}</h2>
                <p>
                    {"Depending on your location, you may have certain rights regarding \
                      your personal data, including:"}
                </p>
                <ul>
                    <li>{"The right to access your personal data"}</li>
                    <li>{"The right to correct inaccurate or incomplete data"}</li>
                    <li>{"The right to delete your personal data"}</li>
                    <li>{"The right to restrict or object to processing"}</li>
                    <li>{"The right to data portability"}</li>
                    <li>{"The right to withdraw consent"}</li>
                </ul>
            </section>

            <section>
                <h2>{"7. Children's Privacy"}</h2>
                <p>
                    { format!(
                        "{} is not intended for children under the age of 13. We do not \
                         knowingly collect personal information from children under 13. If \
                         we discover that we have collected personal information from a \
                         child under 13, we will promptly delete that information.",
                        name
                    ) }
                </p>
            </section>

            <section>
                <h2>{"8. Changes to This Policy"}</h2>
                <p>
                    {"We may update this Privacy Policy from time to time. We will notify \
                      you of any changes by posting the new policy on this page and updating \
                      the \"Last updated\" date. We encourage you to review this policy \
                      periodically for any changes."}
                </p>
            </section>

            <section>
                <h2>{"9. Contact Us"}</h2>
                <p>
                    {"If you have any questions about this Privacy Policy or our data \
                      practices, please contact us at "}
                    <a href="mailto:privacy@ephileo.com">{"privacy@ephileo.com"}</a>
                </p>
            </section>
        </LegalShell>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions(props: &LegalProps) -> Html {
    let Some(project) = catalog::get_project(&props.slug) else {
        return html! { <ProjectNotFound /> };
    };
    let name = project.name;

    html! {
        <LegalShell {project} title="Terms & Conditions">
            <section>
                <h2>{"1. Acceptance of Terms"}</h2>
                <p>
                    { format!(
                        "By accessing or using {} (\"the Application\"), you agree to be \
                         bound by these Terms and Conditions. If you do not agree to these \
                         terms, please do not use the Application. These terms apply to all \
                         users, including visitors, registered users, and contributors.",
                        name
                    ) }
                </p>
            </section>

            <section>
                <h2>{"2. Use License"}</h2>
                <p>
                    { format!(
                        "Ephileo grants you a limited, non-exclusive, non-transferable \
                         license to use {} for personal, non-commercial purposes subject to \
                         the following conditions:",
                        name
                    ) }
                </p>
                <ul>
                    <li>{"You may not copy, modify, or distribute the Application without prior written consent"}</li>
                    <li>{"You may not reverse engineer, decompile, or disassemble the Application"}</li>
                    <li>{"You may not use the Application for any illegal or unauthorized purpose"}</li>
                    <li>{"You may not remove any proprietary notices or labels on the Application"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. User Accounts"}</h2>
                <p>
                    { format!(
                        "If {} requires you to create an account, you are responsible for \
                         maintaining the confidentiality of your account credentials and for \
                         all activities that occur under your account. You agree to notify \
                         us immediately of any unauthorized use of your account. We reserve \
                         the right to terminate accounts that violate these terms.",
                        name
                    ) }
                </p>
            </section>

            <section>
                <h2>{"4. Intellectual Property"}</h2>
                <p>
                    { format!(
                        "All content, features, and functionality of {}, including but not \
                         limited to text, graphics, logos, and software, are the property of \
                         Ephileo or its content suppliers and are protected by intellectual \
                         property laws.",
                        name
                    ) }
                </p>
            </section>

            <section>
                <h2>{"5. Termination"}</h2>
                <p>
                    {"We reserve the right to suspend or terminate your access to the \
                      Application at our discretion, without notice, for conduct that we \
                      believe violates these Terms or is harmful to other users."}
                </p>
            </section>

            <section>
                <h2>{"6. Limitation of Liability"}</h2>
                <p>
                    { format!(
                        "{} is provided \"as is\" without warranties of any kind. Ephileo \
                         will not be liable for any damages arising from the use or \
                         inability to use the Application.",
                        name
                    ) }
                </p>
            </section>

            <section>
                <h2>{"7. Changes to Terms"}</h2>
                <p>
                    {"We may update these Terms from time to time. Continued use of the \
                      Application after any such changes constitutes your acceptance of the \
                      new Terms."}
                </p>
            </section>

            <section>
                <h2>{"8. Governing Law"}</h2>
                <p>
                    {"These Terms are governed by and construed in accordance with the laws \
                      of the jurisdiction in which Ephileo operates."}
                </p>
            </section>

            <section>
                <h2>{"9. Contact Us"}</h2>
                <p>
                    {"For questions or concerns regarding these Terms, please contact us at "}
                    <a href="mailto:legal@ephileo.com">{"legal@ephileo.com"}</a>
                </p>
            </section>
        </LegalShell>
    }
}
