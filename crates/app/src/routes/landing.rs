use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdAnchor, LdFilm, LdHeart, LdShip, LdUser, LdUtensils};
use dioxus_free_icons::Icon;
use shared_types::PortalConfig;
use shared_ui::{Button, ButtonVariant};

use crate::auth::use_auth;
use crate::routes::Route;

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let config: PortalConfig = use_context();
    let brand = config.portal.brand;
    let year = chrono::Local::now().format("%Y").to_string();

    let signed_in = auth.is_authenticated();
    let go_in = move |_: MouseEvent| {
        if signed_in {
            navigator().push(Route::Dashboard {});
        } else {
            navigator().push(Route::Login {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            header { class: "landing-hero",
                div { class: "landing-bar",
                    div { class: "landing-brand",
                        Icon::<LdShip> { icon: LdShip, width: 32, height: 32 }
                        span { "{brand}" }
                    }
                    Button { variant: ButtonVariant::Ghost, class: "landing-bar-action", onclick: go_in,
                        if signed_in { "Go to Dashboard" } else { "Sign In" }
                    }
                }
                div { class: "landing-hero-body",
                    h1 { "Cruise Ship Services at Your Fingertips" }
                    p { "Access all ship amenities and services through our convenient online platform" }
                    Button { class: "landing-hero-action", onclick: go_in,
                        if signed_in { "Access Services" } else { "Sign In to Get Started" }
                    }
                }
            }

            section { class: "landing-features",
                h2 { "Everything You Need in One Place" }
                div { class: "landing-feature-grid",
                    Feature {
                        icon: rsx! { Icon::<LdUtensils> { icon: LdUtensils, width: 32, height: 32 } },
                        title: "Dining & Catering",
                        body: "Order meals, snacks, and beverages directly to your room with our convenient catering service",
                    }
                    Feature {
                        icon: rsx! { Icon::<LdFilm> { icon: LdFilm, width: 32, height: 32 } },
                        title: "Entertainment",
                        body: "Book resort experiences, movie tickets, and party venues for the perfect cruise entertainment",
                    }
                    Feature {
                        icon: rsx! { Icon::<LdHeart> { icon: LdHeart, width: 32, height: 32 } },
                        title: "Health & Wellness",
                        body: "Schedule beauty salon appointments and fitness center sessions to feel your best at sea",
                    }
                }
            }

            section { class: "landing-cta",
                h2 { "Ready to Enhance Your Cruise Experience?" }
                p { "Sign in with your voyager credentials to access all services available on your cruise" }
                div { class: "landing-cta-actions",
                    Button { onclick: move |_| { navigator().push(Route::Login {}); },
                        Icon::<LdUser> { icon: LdUser, width: 20, height: 20 }
                        "Sign In"
                    }
                    a { class: "button", "data-style": "outline", href: "#",
                        Icon::<LdAnchor> { icon: LdAnchor, width: 20, height: 20 }
                        "Learn More"
                    }
                }
            }

            footer { class: "landing-footer",
                div { class: "landing-brand",
                    Icon::<LdShip> { icon: LdShip, width: 24, height: 24 }
                    span { "{brand}" }
                }
                div { class: "landing-copyright", "© {year} {brand}. All rights reserved." }
            }
        }
    }
}

#[component]
fn Feature(icon: Element, title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "landing-feature",
            div { class: "landing-feature-icon", {icon} }
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}
