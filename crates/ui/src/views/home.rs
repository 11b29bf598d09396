use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let year = Utc::now().year();

    rsx! {
        div { class: "page home-page",
            header { class: "home-header",
                h1 { class: "home-title", "OUROBORUS AI" }
                p { class: "home-tagline",
                    "Infinite cycles of innovation. The central hub for intelligent applications."
                }
            }
            div { class: "home-grid",
                Link { to: Route::DrivingTest {}, class: "home-card home-card--cyan",
                    span { class: "home-card-icon", "🚗" }
                    h2 { class: "home-card-title", "Driving Test" }
                    p { class: "home-card-blurb",
                        "Master your driving theory exam with our interactive simulator based on real questions."
                    }
                    span { class: "home-card-cta", "Start Simulation →" }
                }
                Link { to: Route::LostAnimals {}, class: "home-card home-card--purple",
                    span { class: "home-card-icon", "🐾" }
                    h2 { class: "home-card-title", "Lost Animals" }
                    p { class: "home-card-blurb",
                        "Reuniting pets with their families. Post alerts and search the community database."
                    }
                    span { class: "home-card-cta", "Find a Friend →" }
                }
                Link { to: Route::Services {}, class: "home-card home-card--emerald",
                    span { class: "home-card-icon", "✨" }
                    h2 { class: "home-card-title", "Services" }
                    p { class: "home-card-blurb",
                        "Premium Web Design & Marketing Solutions. Elevate your digital presence."
                    }
                    span { class: "home-card-cta", "Explore Services →" }
                }
            }
            footer { class: "home-footer", "© {year} Ouroborus AI. All rights reserved." }
        }
    }
}
