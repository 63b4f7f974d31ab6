//! Static capability policy over the user's flags.
//!
//! Authorization is a pure function of (capability, flags, ownership);
//! there is no per-user grant storage. Staff implicitly hold every
//! capability.

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;

/// An action gated by the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Create a new hotel listing.
    CreateHotel,
    /// Edit or delete a specific hotel.
    ManageHotel,
    /// Create, edit or delete rooms of a specific hotel.
    ManageRoom,
    /// Edit or delete a specific review.
    ManageReview,
    /// List and decide owner upgrade requests.
    AdministerOwnerRequests,
}

/// The caller's identity flags, as carried in the token claims.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub is_owner: bool,
    pub is_staff: bool,
}

/// Whether the actor holds the capability.
///
/// `owns_resource` is the ownership relation for the target: the hotel
/// is theirs, the review is theirs. Capabilities that are not tied to
/// a resource ignore it.
pub fn is_allowed(actor: Actor, capability: Capability, owns_resource: bool) -> bool {
    if actor.is_staff {
        return true;
    }
    match capability {
        Capability::CreateHotel => actor.is_owner,
        Capability::ManageHotel | Capability::ManageRoom => actor.is_owner && owns_resource,
        Capability::ManageReview => owns_resource,
        Capability::AdministerOwnerRequests => false,
    }
}

/// [`is_allowed`] as a guard returning `Forbidden`.
pub fn authorize(actor: Actor, capability: Capability, owns_resource: bool) -> AppResult<()> {
    if is_allowed(actor, capability, owns_resource) {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "You do not have permission to perform this action",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUEST: Actor = Actor {
        is_owner: false,
        is_staff: false,
    };
    const OWNER: Actor = Actor {
        is_owner: true,
        is_staff: false,
    };
    const STAFF: Actor = Actor {
        is_owner: false,
        is_staff: true,
    };

    #[test]
    fn test_guests_cannot_create_hotels() {
        assert!(!is_allowed(GUEST, Capability::CreateHotel, false));
        assert!(is_allowed(OWNER, Capability::CreateHotel, false));
    }

    #[test]
    fn test_owners_manage_only_their_hotels() {
        assert!(is_allowed(OWNER, Capability::ManageHotel, true));
        assert!(!is_allowed(OWNER, Capability::ManageHotel, false));
        assert!(!is_allowed(GUEST, Capability::ManageHotel, true));
    }

    #[test]
    fn test_review_author_can_manage_own_review() {
        assert!(is_allowed(GUEST, Capability::ManageReview, true));
        assert!(!is_allowed(GUEST, Capability::ManageReview, false));
    }

    #[test]
    fn test_staff_hold_every_capability() {
        assert!(is_allowed(STAFF, Capability::AdministerOwnerRequests, false));
        assert!(is_allowed(STAFF, Capability::ManageHotel, false));
        assert!(is_allowed(STAFF, Capability::ManageReview, false));
    }

    #[test]
    fn test_only_staff_administer_owner_requests() {
        assert!(!is_allowed(OWNER, Capability::AdministerOwnerRequests, false));
        assert!(!is_allowed(GUEST, Capability::AdministerOwnerRequests, false));
    }
}
