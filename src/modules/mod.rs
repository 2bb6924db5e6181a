pub mod navigation;
pub mod profiles;
pub mod properties;
