use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

mod anim;
mod config;
mod dom;
mod effects;
mod engine;
mod error;
mod scope;
mod text;
mod pages {
    pub mod landing;
}

use config::PageConfig;
use engine::Engine;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
struct AppProps {
    engine: Engine,
    config: Rc<PageConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    info!("Rendering Landing page");
    html! {
        <Landing engine={props.engine.clone()} config={props.config.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let engine = match Engine::init() {
        Ok(engine) => engine,
        Err(e) => {
            warn!("Cannot start: {}", e);
            return;
        }
    };
    let config = Rc::new(PageConfig::from_document(engine.document()));
    yew::Renderer::<App>::with_props(AppProps { engine, config }).render();
}
