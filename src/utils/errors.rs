use facilityhub_core::AppError;
use facilityhub_nav::SourceError;
use tracing::error;

/// Maps a profile/property collaborator failure to an HTTP error.
pub fn source_error(err: SourceError) -> AppError {
    match err {
        SourceError::NotFound { what } => {
            AppError::not_found(anyhow::anyhow!("{} not found", capitalize(what)))
        }
        SourceError::Unauthorized => AppError::unauthorized("Not authorized"),
        other => {
            error!(error = %other, "Collaborator failure");
            AppError::internal(other)
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_source_error_status() {
        let err = source_error(SourceError::NotFound { what: "profile" });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "Profile not found");

        assert_eq!(
            source_error(SourceError::Unauthorized).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            source_error(SourceError::Storage("pool timed out".into())).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
