// Application layer: page controllers, navigation, contact workflow and HTML rendering.

pub mod contact_service;
pub mod navigation;
pub mod pages;
pub mod render;

pub use contact_service::ContactService;
pub use navigation::{NavLink, Navigation};
