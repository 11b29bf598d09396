mod home;
mod lost_animals;
mod services_page;
mod state;

pub use driving_test::DrivingTestView;
pub use home::HomeView;
pub use lost_animals::LostAnimalsView;
pub use services_page::ServicesView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
