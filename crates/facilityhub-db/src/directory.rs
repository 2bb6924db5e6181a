use async_trait::async_trait;
use facilityhub_models::{Property, PropertyId, ProfileRow, UserId, UserProfile};
use facilityhub_nav::{ProfileSource, PropertySource, Session, SourceError};
use sqlx::PgPool;
use tracing::{error, instrument};

/// Profiles and properties stored in PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

fn storage_error(what: &'static str, e: sqlx::Error) -> SourceError {
    match e {
        sqlx::Error::RowNotFound => SourceError::NotFound { what },
        other => {
            error!(error = %other, what, "Database error");
            SourceError::Storage(other.to_string())
        }
    }
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self, property), fields(property.id = %property.id, db.operation = "UPSERT", db.table = "properties"))]
    pub async fn upsert_property(&self, property: &Property) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO properties (id, name, address, logo) VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE
             SET name = EXCLUDED.name, address = EXCLUDED.address, logo = EXCLUDED.logo,
                 updated_at = NOW()",
        )
        .bind(property.id)
        .bind(&property.name)
        .bind(&property.address)
        .bind(&property.logo)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self, profile), fields(user.id = %profile.id, db.operation = "UPSERT", db.table = "users"))]
    pub async fn upsert_profile(&self, profile: &UserProfile) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (id, first_name, last_name, email, user_role, user_type, property_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO UPDATE
             SET first_name = EXCLUDED.first_name, last_name = EXCLUDED.last_name,
                 email = EXCLUDED.email, user_role = EXCLUDED.user_role,
                 user_type = EXCLUDED.user_type, property_id = EXCLUDED.property_id,
                 updated_at = NOW()",
        )
        .bind(profile.id)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.email)
        .bind(&profile.user_role)
        .bind(profile.user_type.as_str())
        .bind(profile.property_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        sqlx::query("DELETE FROM properties")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileSource for PgDirectory {
    #[instrument(skip(self, _session), fields(db.operation = "SELECT", db.table = "users"))]
    async fn profile(&self, _session: &Session, user_id: UserId) -> Result<UserProfile, SourceError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, first_name, last_name, email, user_role, user_type, property_id
             FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("profile", e))?;

        UserProfile::try_from(row).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PropertySource for PgDirectory {
    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "properties"))]
    async fn property(&self, id: PropertyId) -> Result<Property, SourceError> {
        sqlx::query_as::<_, Property>("SELECT id, name, address, logo FROM properties WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("property", e))
    }
}
