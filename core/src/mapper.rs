//! Status Mapper
//!
//! The store keeps one status field, but `confirmed` (buyer language) and
//! `scheduled` (seller language) name the same underlying state. This is the
//! only place that ambiguity is resolved.

use crate::vocabulary::{RawStatus, Role, Status};
use serde::{Serialize, Serializer};
use std::fmt;

/// The role-resolved status used to place a step within a flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayStatus(RawStatus);

impl DisplayStatus {
    pub fn known(&self) -> Option<Status> {
        self.0.known()
    }

    pub fn is(&self, status: Status) -> bool {
        self.0.is(status)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn raw(&self) -> &RawStatus {
        &self.0
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DisplayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Resolve a stored status into the status shown to `role`.
///
/// Never fails. Unrecognized statuses pass through unchanged.
pub fn resolve(raw: &RawStatus, role: Role) -> DisplayStatus {
    match raw.known() {
        Some(Status::Confirmed | Status::Scheduled) => DisplayStatus(RawStatus::Known(match role {
            Role::Buyer => Status::Confirmed,
            Role::Seller => Status::Scheduled,
        })),
        _ => DisplayStatus(raw.clone()),
    }
}

/// Inverse of [`resolve`]: every known status that resolves to `display` for some role.
pub fn aliases(display: &DisplayStatus) -> &'static [Status] {
    const ALIASED: [Status; 2] = [Status::Confirmed, Status::Scheduled];
    const KNOWN: &[Status] = &Status::ALL;

    match display.known() {
        Some(Status::Confirmed | Status::Scheduled) => &ALIASED,
        Some(status) => KNOWN
            .iter()
            .find(|s| **s == status)
            .map(std::slice::from_ref)
            .unwrap_or(&[]),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed_and_scheduled_collapse_by_role() {
        for raw in [Status::Confirmed, Status::Scheduled] {
            let raw = RawStatus::from(raw);
            assert!(resolve(&raw, Role::Buyer).is(Status::Confirmed));
            assert!(resolve(&raw, Role::Seller).is(Status::Scheduled));
        }
    }

    #[test]
    fn test_other_statuses_pass_through() {
        for status in Status::ALL
            .into_iter()
            .filter(|s| !matches!(s, Status::Confirmed | Status::Scheduled))
        {
            for role in Role::ALL {
                assert!(resolve(&status.into(), role).is(status));
            }
        }

        let odd = RawStatus::parse("awaiting_parts");
        assert_eq!(resolve(&odd, Role::Seller).raw(), &odd);
    }

    #[test]
    fn test_resolution_round_trips_through_aliases() {
        for status in Status::ALL {
            for role in Role::ALL {
                let display = resolve(&status.into(), role);
                assert!(aliases(&display).contains(&status));

                let buyer_sees_confirmed = role == Role::Buyer && display.is(Status::Confirmed);
                let aliased = matches!(status, Status::Confirmed | Status::Scheduled);
                if role == Role::Buyer {
                    assert_eq!(buyer_sees_confirmed, aliased);
                }
            }
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for status in Status::ALL {
            for role in Role::ALL {
                let once = resolve(&status.into(), role);
                let twice = resolve(once.raw(), role);
                assert_eq!(once, twice);
            }
        }
    }
}
