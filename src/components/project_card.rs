use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Project;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    /// Catalog index; drives the staggered reveal delay.
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let delay = props.index as f64 * 0.1;

    html! {
        <div
            class="project-card animate-section"
            style={format!("transition-delay: {:.1}s;", delay)}
        >
            <Link<Route> to={Route::Project { slug: project.id.to_string() }}>
                <div
                    class="project-card-banner"
                    style={format!(
                        "background: linear-gradient(135deg, {}33, {}22);",
                        project.color, project.accent_color
                    )}
                >
                    {
                        if let Some(icon) = project.icon {
                            html! { <img src={icon} alt={project.name} loading="lazy" /> }
                        } else {
                            html! {
                                <span
                                    class="project-card-monogram"
                                    style={format!("color: {};", project.accent_color)}
                                >
                                    { project.name.chars().next().unwrap_or('?').to_string() }
                                </span>
                            }
                        }
                    }
                </div>
                <div class="project-card-body">
                    <h3 style={format!("color: {};", project.accent_color)}>
                        { project.name }
                    </h3>
                    <p class="project-card-tagline">{ project.tagline }</p>
                    <p class="project-card-description">{ project.description }</p>
                </div>
            </Link<Route>>
        </div>
    }
}
