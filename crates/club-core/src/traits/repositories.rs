//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The membership repository is the ledger
//! contract: every role read and write in the system goes through it.

use async_trait::async_trait;

use crate::entities::{Club, Membership, User};
use crate::error::DomainError;
use crate::value_objects::{RoleTag, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by unique handle
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a handle is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Club Repository
// ============================================================================

#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Find club by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Club>>;

    /// Find club by unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Club>>;

    /// Check if a club name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// List clubs for the directory, newest first, keyset-paginated by id
    async fn list(&self, limit: i64, after: Option<Snowflake>) -> RepoResult<Vec<Club>>;

    /// Create a club together with its founding Owner membership row.
    /// Both writes happen in a single atomic unit: a club is never visible
    /// without an owner.
    async fn create(&self, club: &Club, owner: &Membership) -> RepoResult<()>;

    /// Update an existing club
    async fn update(&self, club: &Club) -> RepoResult<()>;

    /// Delete a club; all of its membership rows go with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Membership Repository (the ledger)
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Point lookup of the row for a (club, user) pair.
    /// `None` means no row, which is distinct from a `Banned` row.
    async fn find(&self, club_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<Membership>>;

    /// Insert-or-update the row for a pair. A second upsert for an existing
    /// pair overwrites the role tag; it never duplicates the row.
    async fn upsert(&self, membership: &Membership) -> RepoResult<()>;

    /// Delete the row for a pair entirely
    async fn delete(&self, club_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;

    /// All rows in a club holding exactly the given role, insertion order
    async fn find_by_role(&self, club_id: Snowflake, role: RoleTag)
        -> RepoResult<Vec<Membership>>;

    /// All rows in a club, insertion order
    async fn find_by_club(&self, club_id: Snowflake) -> RepoResult<Vec<Membership>>;

    /// All rows for a user across clubs
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Membership>>;

    /// Number of rows in a club
    async fn count_by_club(&self, club_id: Snowflake) -> RepoResult<i64>;

    /// Atomic two-row ownership swap: `from` goes Owner -> Officer and `to`
    /// goes Officer -> Owner in one transaction. Each update is conditional
    /// on the role still holding at commit time; if either precondition has
    /// been lost, nothing is written and
    /// [`DomainError::OwnershipTransferConflict`] is returned.
    async fn transfer_ownership(
        &self,
        club_id: Snowflake,
        from: Snowflake,
        to: Snowflake,
    ) -> RepoResult<()>;

    /// Remove every row for a club, returning the number deleted
    async fn delete_by_club(&self, club_id: Snowflake) -> RepoResult<u64>;
}
