//! PostgreSQL implementation of MembershipRepository (the ledger)

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::Membership;
use club_core::error::DomainError;
use club_core::traits::{MembershipRepository, RepoResult};
use club_core::value_objects::{RoleTag, Snowflake};

use crate::models::MembershipModel;

use super::error::{map_db_error, membership_not_found};

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new PgMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode_rows(rows: Vec<MembershipModel>) -> RepoResult<Vec<Membership>> {
    rows.into_iter().map(Membership::try_from).collect()
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        club_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Membership>> {
        let result = sqlx::query_as::<_, MembershipModel>(
            r#"
            SELECT club_id, user_id, role, joined_at, updated_at
            FROM memberships
            WHERE club_id = $1 AND user_id = $2
            "#,
        )
        .bind(club_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Membership::try_from).transpose()
    }

    #[instrument(skip(self, membership))]
    async fn upsert(&self, membership: &Membership) -> RepoResult<()> {
        // The composite primary key turns a second insert for the same pair
        // into a role overwrite; joined_at keeps its original value.
        sqlx::query(
            r#"
            INSERT INTO memberships (club_id, user_id, role, joined_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (club_id, user_id)
            DO UPDATE SET role = EXCLUDED.role, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(membership.club_id.into_inner())
        .bind(membership.user_id.into_inner())
        .bind(membership.role.code())
        .bind(membership.joined_at)
        .bind(membership.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The partial unique owner index rejects a second OWN row.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return DomainError::DuplicateOwner;
                }
            }
            map_db_error(e)
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, club_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM memberships WHERE club_id = $1 AND user_id = $2
            "#,
        )
        .bind(club_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(membership_not_found());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_role(
        &self,
        club_id: Snowflake,
        role: RoleTag,
    ) -> RepoResult<Vec<Membership>> {
        let results = sqlx::query_as::<_, MembershipModel>(
            r#"
            SELECT club_id, user_id, role, joined_at, updated_at
            FROM memberships
            WHERE club_id = $1 AND role = $2
            ORDER BY joined_at, user_id
            "#,
        )
        .bind(club_id.into_inner())
        .bind(role.code())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        decode_rows(results)
    }

    #[instrument(skip(self))]
    async fn find_by_club(&self, club_id: Snowflake) -> RepoResult<Vec<Membership>> {
        let results = sqlx::query_as::<_, MembershipModel>(
            r#"
            SELECT club_id, user_id, role, joined_at, updated_at
            FROM memberships
            WHERE club_id = $1
            ORDER BY joined_at, user_id
            "#,
        )
        .bind(club_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        decode_rows(results)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Membership>> {
        let results = sqlx::query_as::<_, MembershipModel>(
            r#"
            SELECT club_id, user_id, role, joined_at, updated_at
            FROM memberships
            WHERE user_id = $1
            ORDER BY joined_at DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        decode_rows(results)
    }

    #[instrument(skip(self))]
    async fn count_by_club(&self, club_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM memberships WHERE club_id = $1
            "#,
        )
        .bind(club_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn transfer_ownership(
        &self,
        club_id: Snowflake,
        from: Snowflake,
        to: Snowflake,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Demote the old owner first so the partial unique owner index never
        // sees two OWN rows inside the transaction. Both updates are
        // conditional on the role still holding: a concurrent transfer or
        // demotion makes rows_affected come back 0 and the whole swap
        // aborts (rollback on drop) with no partial write.
        let demoted = sqlx::query(
            r#"
            UPDATE memberships
            SET role = $1, updated_at = NOW()
            WHERE club_id = $2 AND user_id = $3 AND role = $4
            "#,
        )
        .bind(RoleTag::Officer.code())
        .bind(club_id.into_inner())
        .bind(from.into_inner())
        .bind(RoleTag::Owner.code())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if demoted.rows_affected() != 1 {
            return Err(DomainError::OwnershipTransferConflict);
        }

        let promoted = sqlx::query(
            r#"
            UPDATE memberships
            SET role = $1, updated_at = NOW()
            WHERE club_id = $2 AND user_id = $3 AND role = $4
            "#,
        )
        .bind(RoleTag::Owner.code())
        .bind(club_id.into_inner())
        .bind(to.into_inner())
        .bind(RoleTag::Officer.code())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if promoted.rows_affected() != 1 {
            return Err(DomainError::OwnershipTransferConflict);
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_club(&self, club_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM memberships WHERE club_id = $1
            "#,
        )
        .bind(club_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMembershipRepository>();
    }
}
