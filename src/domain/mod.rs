// Domain layer: view models and ports (interfaces) to the CMS and the contact store.

pub mod model;
pub mod ports;
