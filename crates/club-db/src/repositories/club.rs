//! PostgreSQL implementation of ClubRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{Club, Membership};
use club_core::error::DomainError;
use club_core::traits::{ClubRepository, RepoResult};
use club_core::value_objects::Snowflake;

use crate::models::ClubModel;

use super::error::{club_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of ClubRepository
#[derive(Clone)]
pub struct PgClubRepository {
    pool: PgPool,
}

impl PgClubRepository {
    /// Create a new PgClubRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Club>> {
        let result = sqlx::query_as::<_, ClubModel>(
            r#"
            SELECT id, name, location, description, created_at, updated_at
            FROM clubs
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Club::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Club>> {
        let result = sqlx::query_as::<_, ClubModel>(
            r#"
            SELECT id, name, location, description, created_at, updated_at
            FROM clubs
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Club::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM clubs WHERE name = $1)
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, after: Option<Snowflake>) -> RepoResult<Vec<Club>> {
        let limit = limit.clamp(1, 100);

        let results = match after {
            Some(after_id) => {
                sqlx::query_as::<_, ClubModel>(
                    r#"
                    SELECT id, name, location, description, created_at, updated_at
                    FROM clubs
                    WHERE id < $1
                    ORDER BY id DESC
                    LIMIT $2
                    "#,
                )
                .bind(after_id.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ClubModel>(
                    r#"
                    SELECT id, name, location, description, created_at, updated_at
                    FROM clubs
                    ORDER BY id DESC
                    LIMIT $1
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Club::from).collect())
    }

    #[instrument(skip(self, club, owner))]
    async fn create(&self, club: &Club, owner: &Membership) -> RepoResult<()> {
        // Club row and founding owner row commit together or not at all.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO clubs (id, name, location, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(club.id.into_inner())
        .bind(&club.name)
        .bind(&club.location)
        .bind(&club.description)
        .bind(club.created_at)
        .bind(club.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ClubNameTaken))?;

        sqlx::query(
            r#"
            INSERT INTO memberships (club_id, user_id, role, joined_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(owner.club_id.into_inner())
        .bind(owner.user_id.into_inner())
        .bind(owner.role.code())
        .bind(owner.joined_at)
        .bind(owner.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateOwner))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, club))]
    async fn update(&self, club: &Club) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE clubs
            SET name = $2, location = $3, description = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(club.id.into_inner())
        .bind(&club.name)
        .bind(&club.location)
        .bind(&club.description)
        .bind(club.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ClubNameTaken))?;

        if result.rows_affected() == 0 {
            return Err(club_not_found(club.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Membership rows go with the club via ON DELETE CASCADE.
        let result = sqlx::query(
            r#"
            DELETE FROM clubs WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(club_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgClubRepository>();
    }
}
