//! Property generation.

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use facilityhub_models::{Property, PropertyId};

/// 1x1 transparent PNG.
pub const PLACEHOLDER_LOGO: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

pub fn generate_properties(count: usize, with_logos: bool) -> Vec<Property> {
    (0..count)
        .map(|_| {
            let city: String = CityName().fake();
            let street: String = StreetName().fake();
            let building: String = BuildingNumber().fake();
            let zip: String = ZipCode().fake();
            let company: String = CompanyName().fake();

            Property {
                id: PropertyId::new(),
                name: format!("{company} {city} Tower"),
                address: Some(format!("{building} {street}, {city} {zip}")),
                logo: with_logos.then(|| PLACEHOLDER_LOGO.to_string()),
            }
        })
        .collect()
}
