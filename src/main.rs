use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod lead;
mod pages {
    pub mod landing;
}
mod components {
    pub mod request_form;
}

use pages::landing::Landing;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 10;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(15, 15, 20, 0.9);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1.25rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: bold;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-logo i {
                    color: #7EB2FF;
                    margin-right: 0.5rem;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-cta {
                    padding: 0.6rem 1.4rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    color: #fff;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        padding: 1.5rem 2rem;
                        background: rgba(15, 15, 20, 0.97);
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    <i class="fa-solid fa-bolt"></i>
                    {"ContentGenius AI"}
                </a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="#services" class="nav-link" onclick={close_menu.clone()}>{"Services"}</a>
                    <a href="#pricing" class="nav-link" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <a href="#contact" class="nav-link" onclick={close_menu.clone()}>{"Contact"}</a>
                    <a href="#contact" onclick={close_menu}>
                        <button class="nav-cta">{"Get Started"}</button>
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
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
