//! Club permission policy
//!
//! Pure decision table mapping (requester's role, requested action) to
//! allow/deny. Stateless: callers look the role up first and pass `None`
//! when no membership row exists, which is a distinct standing from
//! `Banned`.

use std::fmt;

use crate::value_objects::RoleTag;

/// Guarded club operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClubAction {
    ViewApplicants,
    AcceptApplicant,
    RejectApplicant,
    ViewMembers,
    ViewFeed,
    SearchMembers,
    BanMember,
    UnbanMember,
    PromoteMember,
    RemoveMember,
    ViewOfficers,
    DemoteOfficer,
    TransferOwnership,
    EditClub,
    DeleteClub,
    Apply,
    WithdrawApplication,
}

impl ClubAction {
    /// Identifier used in error messages and logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::ViewApplicants => "view_applicants",
            Self::AcceptApplicant => "accept_applicant",
            Self::RejectApplicant => "reject_applicant",
            Self::ViewMembers => "view_members",
            Self::ViewFeed => "view_feed",
            Self::SearchMembers => "search_members",
            Self::BanMember => "ban_member",
            Self::UnbanMember => "unban_member",
            Self::PromoteMember => "promote_member",
            Self::RemoveMember => "remove_member",
            Self::ViewOfficers => "view_officers",
            Self::DemoteOfficer => "demote_officer",
            Self::TransferOwnership => "transfer_ownership",
            Self::EditClub => "edit_club",
            Self::DeleteClub => "delete_club",
            Self::Apply => "apply",
            Self::WithdrawApplication => "withdraw_application",
        }
    }
}

impl fmt::Display for ClubAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decide whether a requester with the given standing may perform `action`.
///
/// `role` is `None` when the requester holds no membership row in the club
/// (an outsider). Outsiders may only apply; banned users may do nothing at
/// all, including re-applying, until the ban row is removed.
pub fn is_allowed(role: Option<RoleTag>, action: ClubAction) -> bool {
    let Some(role) = role else {
        return matches!(action, ClubAction::Apply);
    };

    if role == RoleTag::Banned {
        return false;
    }

    match action {
        // Applicant management and member discipline: officers and the owner
        ClubAction::ViewApplicants
        | ClubAction::AcceptApplicant
        | ClubAction::RejectApplicant
        | ClubAction::BanMember
        | ClubAction::UnbanMember
        | ClubAction::PromoteMember
        | ClubAction::RemoveMember => role.is_management(),

        // Read access to the club roster: any accepted participant
        ClubAction::ViewMembers | ClubAction::ViewFeed | ClubAction::SearchMembers => {
            role.is_participant()
        }

        // Officer administration and club lifecycle: owner only
        ClubAction::ViewOfficers
        | ClubAction::DemoteOfficer
        | ClubAction::TransferOwnership
        | ClubAction::EditClub
        | ClubAction::DeleteClub => role == RoleTag::Owner,

        // Applying requires having no standing at all
        ClubAction::Apply => false,

        // Only a pending applicant can withdraw
        ClubAction::WithdrawApplication => role == RoleTag::Applicant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [ClubAction; 17] = [
        ClubAction::ViewApplicants,
        ClubAction::AcceptApplicant,
        ClubAction::RejectApplicant,
        ClubAction::ViewMembers,
        ClubAction::ViewFeed,
        ClubAction::SearchMembers,
        ClubAction::BanMember,
        ClubAction::UnbanMember,
        ClubAction::PromoteMember,
        ClubAction::RemoveMember,
        ClubAction::ViewOfficers,
        ClubAction::DemoteOfficer,
        ClubAction::TransferOwnership,
        ClubAction::EditClub,
        ClubAction::DeleteClub,
        ClubAction::Apply,
        ClubAction::WithdrawApplication,
    ];

    #[test]
    fn test_outsider_may_only_apply() {
        for action in ALL_ACTIONS {
            let expected = action == ClubAction::Apply;
            assert_eq!(is_allowed(None, action), expected, "action {action}");
        }
    }

    #[test]
    fn test_banned_denied_everything() {
        for action in ALL_ACTIONS {
            assert!(
                !is_allowed(Some(RoleTag::Banned), action),
                "banned user allowed {action}"
            );
        }
    }

    #[test]
    fn test_applicant_may_only_withdraw() {
        for action in ALL_ACTIONS {
            let expected = action == ClubAction::WithdrawApplication;
            assert_eq!(
                is_allowed(Some(RoleTag::Applicant), action),
                expected,
                "action {action}"
            );
        }
    }

    #[test]
    fn test_member_has_read_access_only() {
        let member = Some(RoleTag::Member);
        assert!(is_allowed(member, ClubAction::ViewMembers));
        assert!(is_allowed(member, ClubAction::ViewFeed));
        assert!(is_allowed(member, ClubAction::SearchMembers));

        assert!(!is_allowed(member, ClubAction::ViewApplicants));
        assert!(!is_allowed(member, ClubAction::BanMember));
        assert!(!is_allowed(member, ClubAction::PromoteMember));
        assert!(!is_allowed(member, ClubAction::ViewOfficers));
        assert!(!is_allowed(member, ClubAction::DeleteClub));
        assert!(!is_allowed(member, ClubAction::Apply));
        assert!(!is_allowed(member, ClubAction::WithdrawApplication));
    }

    #[test]
    fn test_officer_manages_members_but_not_officers() {
        let officer = Some(RoleTag::Officer);
        assert!(is_allowed(officer, ClubAction::ViewApplicants));
        assert!(is_allowed(officer, ClubAction::AcceptApplicant));
        assert!(is_allowed(officer, ClubAction::RejectApplicant));
        assert!(is_allowed(officer, ClubAction::BanMember));
        assert!(is_allowed(officer, ClubAction::UnbanMember));
        assert!(is_allowed(officer, ClubAction::PromoteMember));
        assert!(is_allowed(officer, ClubAction::ViewMembers));

        assert!(!is_allowed(officer, ClubAction::ViewOfficers));
        assert!(!is_allowed(officer, ClubAction::DemoteOfficer));
        assert!(!is_allowed(officer, ClubAction::TransferOwnership));
        assert!(!is_allowed(officer, ClubAction::DeleteClub));
    }

    #[test]
    fn test_owner_allowed_everything_but_apply_and_withdraw() {
        let owner = Some(RoleTag::Owner);
        for action in ALL_ACTIONS {
            let expected =
                !matches!(action, ClubAction::Apply | ClubAction::WithdrawApplication);
            assert_eq!(is_allowed(owner, action), expected, "action {action}");
        }
    }
}
