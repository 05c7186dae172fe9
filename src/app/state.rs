//! Application State — zentrale Datenhaltung.

mod animation;
mod app_state;
mod fractal;
mod view;

pub use animation::AnimationState;
pub use app_state::AppState;
pub use fractal::FractalState;
pub use view::ViewState;
