use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{DrivingTestView, HomeView, LostAnimalsView, ServicesView};

// Every page paints its own full-screen chrome and links back to the hub,
// so there is no shared layout shell.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", HomeView)] Home {},
    #[route("/driving-test", DrivingTestView)] DrivingTest {},
    #[route("/lost-animals", LostAnimalsView)] LostAnimals {},
    #[route("/services", ServicesView)] Services {},
}
