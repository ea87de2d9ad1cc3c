use std::rc::Rc;

use log::warn;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config::PageConfig;
use crate::engine::Engine;
use crate::text::{decompose, render_animated};

struct Stat {
    value: &'static str,
    suffix: Option<&'static str>,
    label: &'static str,
}

const STATS: [Stat; 3] = [
    Stat {
        value: "01",
        suffix: None,
        label: "Rank",
    },
    Stat {
        value: "9.8",
        suffix: Some("s"),
        label: "Quarter Mile",
    },
    Stat {
        value: "MAX",
        suffix: None,
        label: "Output",
    },
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub engine: Engine,
    pub config: Rc<PageConfig>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let root_ref = use_node_ref();
    let wrapper_ref = use_node_ref();
    let car_ref = use_node_ref();

    // Effects live exactly as long as the page is mounted
    {
        let engine = props.engine.clone();
        let config = props.config.clone();
        let root_ref = root_ref.clone();
        let wrapper_ref = wrapper_ref.clone();
        let car_ref = car_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = root_ref.cast::<Element>().and_then(|root| {
                    match engine.mount(
                        &config,
                        &root,
                        wrapper_ref.cast::<Element>(),
                        car_ref.cast::<HtmlElement>(),
                    ) {
                        Ok(mounted) => Some(mounted),
                        Err(e) => {
                            warn!("Landing animations disabled: {}", e);
                            None
                        }
                    }
                });
                move || drop(mounted)
            },
            (),
        );
    }

    let words = decompose(&props.config.headline);
    let wrapper_style = format!("height: {}vh;", props.config.scroll_span * 100.0);

    html! {
        <main ref={root_ref} class="landing-root">
            <div ref={wrapper_ref} class="scroll-wrapper" style={wrapper_style}>
                <div class="pinned-viewport">

                    <div class="hero-content">
                        <h1 class="headline">
                            { render_animated(&words) }
                        </h1>
                    </div>

                    <div class="stats-bar">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat-card">
                                <p class="stat-value">
                                    {stat.value}
                                    {
                                        if let Some(suffix) = stat.suffix {
                                            html! { <span class="stat-suffix">{suffix}</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </p>
                                <p class="stat-label">{stat.label}</p>
                            </div>
                        }) }
                    </div>

                    <div ref={car_ref} class="car">
                        <div class="car-frame">
                            <div class="car-glow"></div>
                            <img
                                src={props.config.car_image_url.clone()}
                                alt="Racing Car"
                                class="car-image"
                            />
                        </div>
                    </div>

                    <div class="scroll-cue">
                        <div class="scroll-cue-line"></div>
                        <span class="scroll-cue-label">{"Scroll"}</span>
                    </div>
                </div>
            </div>

            <section class="after-section">
                <div class="after-content">
                    <h2 class="after-title">
                        {"The Future"}<br />{"is Electric."}
                    </h2>
                    <button class="explore-button">{"EXPLORE SPECS"}</button>
                </div>
            </section>

            <style>
                {r#"
                body {
                    margin: 0;
                }

                .landing-root {
                    background: #09090b;
                    color: #ffffff;
                    font-family: system-ui, -apple-system, sans-serif;
                }

                .landing-root ::selection {
                    background: #f97316;
                }

                .scroll-wrapper {
                    position: relative;
                }

                .pinned-viewport {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1rem;
                    box-sizing: border-box;
                }

                .hero-content {
                    padding: 1rem 0;
                    text-align: center;
                    z-index: 0;
                }

                .headline {
                    margin: 0;
                    font-size: 7vw;
                    font-weight: 900;
                    text-transform: uppercase;
                    line-height: 1;
                    letter-spacing: -0.025em;
                    color: #27272a;
                    user-select: none;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                }

                .word-wrap {
                    display: inline-block;
                    white-space: nowrap;
                    margin-right: 0.5em;
                    overflow: hidden;
                }

                .char {
                    display: inline-block;
                }

                .stats-bar {
                    position: absolute;
                    bottom: 6rem;
                    display: flex;
                    gap: 2.5rem;
                    z-index: 20;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    background: rgba(9, 9, 11, 0.5);
                    backdrop-filter: blur(4px);
                }

                .stat-value {
                    margin: 0;
                    font-size: 2.25rem;
                    font-weight: 700;
                    font-family: ui-monospace, monospace;
                    letter-spacing: -0.05em;
                    color: #ffffff;
                }

                .stat-suffix {
                    color: #f97316;
                    font-size: 1.25rem;
                }

                .stat-label {
                    margin: 0;
                    font-size: 10px;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #71717a;
                }

                .car {
                    position: absolute;
                    left: -40%;
                    width: 500px;
                    z-index: 10;
                    pointer-events: none;
                }

                .car-frame {
                    position: relative;
                }

                .car-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 9999px;
                    background: rgba(249, 115, 22, 0.1);
                    filter: blur(120px);
                }

                .car-image {
                    position: relative;
                    width: 100%;
                    height: auto;
                    filter: drop-shadow(0 40px 60px rgba(0, 0, 0, 0.9));
                }

                .scroll-cue {
                    position: absolute;
                    bottom: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    opacity: 0.3;
                }

                .scroll-cue-line {
                    width: 1px;
                    height: 3rem;
                    background: #ffffff;
                }

                .scroll-cue-label {
                    font-size: 10px;
                    letter-spacing: 0.8em;
                    text-transform: uppercase;
                }

                .after-section {
                    position: relative;
                    z-index: 30;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f4f4f5;
                    box-shadow: 0 -20px 50px rgba(0, 0, 0, 0.3);
                }

                .after-content {
                    text-align: center;
                }

                .after-title {
                    margin: 0;
                    font-size: 3.75rem;
                    font-weight: 900;
                    font-style: italic;
                    text-transform: uppercase;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    color: #18181b;
                }

                .explore-button {
                    margin-top: 2rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: #ea580c;
                    color: #ffffff;
                    font-weight: 700;
                    cursor: pointer;
                    transition: transform 0.15s ease, background 0.15s ease;
                }

                .explore-button:hover {
                    background: #c2410c;
                    transform: scale(1.05);
                }

                .explore-button:active {
                    transform: scale(0.95);
                }

                @media (min-width: 768px) {
                    .headline {
                        font-size: 8vw;
                    }

                    .stats-bar {
                        gap: 8rem;
                    }

                    .stat-value {
                        font-size: 3rem;
                    }

                    .car {
                        width: 900px;
                    }

                    .after-title {
                        font-size: 6rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
