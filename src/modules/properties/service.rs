use facilityhub_core::AppError;
use facilityhub_models::{Property, PropertyId};
use facilityhub_nav::PropertySource;
use tracing::instrument;

use crate::utils::errors::source_error;

pub struct PropertyService;

impl PropertyService {
    #[instrument(skip(properties))]
    pub async fn get_property(
        properties: &dyn PropertySource,
        id: PropertyId,
    ) -> Result<Property, AppError> {
        properties.property(id).await.map_err(source_error)
    }
}
