use facilityhub_core::AppError;
use facilityhub_models::{UserId, UserProfile};
use facilityhub_nav::{ProfileSource, Session, SourceError};
use tracing::{debug, instrument};

use crate::utils::errors::source_error;

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip(profiles), fields(caller = %session.user_id))]
    pub async fn get_profile(
        profiles: &dyn ProfileSource,
        session: &Session,
        user_id: UserId,
    ) -> Result<UserProfile, AppError> {
        let result = profiles.profile(session, user_id).await;

        let outcome = match &result {
            Ok(_) => "found",
            Err(SourceError::NotFound { .. }) => "not_found",
            Err(_) => "error",
        };
        facilityhub_observability::track_profile_lookup(outcome);
        debug!(%user_id, outcome, "Profile lookup");

        result.map_err(source_error)
    }
}
