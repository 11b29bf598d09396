use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn ServicesView() -> Element {
    rsx! {
        div { class: "page services-page",
            Link { to: Route::Home {}, class: "back-link back-link--emerald", "← Back to Hub" }

            header { class: "services-header",
                h1 { class: "services-title", "Digital Solutions" }
                p { class: "services-tagline",
                    "Elevate your brand with premium web design and data-driven marketing strategies."
                }
            }

            div { class: "services-grid",
                div { class: "services-card services-card--emerald",
                    span { class: "services-card-icon", "🎨" }
                    h2 { class: "services-card-title", "Web Design & Development" }
                    ul { class: "services-list",
                        li { "✓ Custom UI/UX Design" }
                        li { "✓ React & Next.js Applications" }
                        li { "✓ Responsive & Mobile-First" }
                        li { "✓ Performance Optimization" }
                    }
                    button { class: "btn btn-outline btn-outline--emerald", r#type: "button",
                        "View Portfolio"
                    }
                }
                div { class: "services-card services-card--cyan",
                    span { class: "services-card-icon", "📈" }
                    h2 { class: "services-card-title", "Digital Marketing" }
                    ul { class: "services-list",
                        li { "✓ SEO Strategy & Audit" }
                        li { "✓ Social Media Management" }
                        li { "✓ Content Creation" }
                        li { "✓ Analytics & Reporting" }
                    }
                    button { class: "btn btn-outline btn-outline--cyan", r#type: "button",
                        "Get a Quote"
                    }
                }
            }

            div { class: "services-contact",
                h2 { "Ready to start your project?" }
                p { class: "services-contact-blurb",
                    "Contact us today for a free consultation. Let's build something infinite together."
                }
                div { class: "services-contact-row",
                    input {
                        class: "services-contact-input",
                        r#type: "email",
                        placeholder: "Enter your email",
                    }
                    button { class: "btn btn-primary btn-pill", r#type: "button", "Let's Talk" }
                }
            }
        }
    }
}
