use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod animator;
mod catalog;
mod config;
mod scroll;

mod scene {
    pub mod geometry;
    pub mod motion;
    pub mod renderer;
}

mod components {
    pub mod contact;
    pub mod header;
    pub mod project_card;
}

mod pages {
    pub mod home;
    pub mod legal;
    pub mod project;
}

use pages::{
    home::Home,
    legal::{PrivacyPolicy, TermsAndConditions},
    project::ProjectPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects/:slug")]
    Project { slug: String },
    #[at("/projects/:slug/privacy")]
    Privacy { slug: String },
    #[at("/projects/:slug/terms")]
    Terms { slug: String },
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Project { slug } => {
            info!("Rendering Project page");
            html! { <ProjectPage {slug} /> }
        }
        Route::Privacy { slug } => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy {slug} /> }
        }
        Route::Terms { slug } => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions {slug} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
