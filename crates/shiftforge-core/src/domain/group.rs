//! Friend groups for the pairing rule.

use super::person::PersonId;

/// Minimum number of members in a friend group.
pub const MIN_GROUP_SIZE: usize = 2;

/// Maximum number of members in a friend group.
pub const MAX_GROUP_SIZE: usize = 3;

/// People who must work exactly the same shifts.
///
/// The first member is the reference: every other member's `works`
/// indicator is tied to the reference's indicator for every shift.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FriendGroup {
    members: Vec<PersonId>,
}

impl FriendGroup {
    /// Creates a group from raw person indices.
    pub fn new(members: impl IntoIterator<Item = usize>) -> Self {
        Self {
            members: members.into_iter().map(PersonId).collect(),
        }
    }

    pub fn members(&self) -> &[PersonId] {
        &self.members
    }

    /// Returns the member every other member is tied to.
    pub fn reference(&self) -> Option<PersonId> {
        self.members.first().copied()
    }

    /// Returns the members other than the reference.
    pub fn followers(&self) -> &[PersonId] {
        self.members.get(1..).unwrap_or(&[])
    }

    /// Checks the group's shape against a roster of `roster_size` people.
    ///
    /// Returns a description of the first problem found.
    pub fn check(&self, roster_size: usize) -> Result<(), String> {
        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&self.members.len()) {
            return Err(format!(
                "friend group {:?} must have {}-{} members, found {}",
                self.members,
                MIN_GROUP_SIZE,
                MAX_GROUP_SIZE,
                self.members.len()
            ));
        }
        for (i, member) in self.members.iter().enumerate() {
            if member.0 >= roster_size {
                return Err(format!(
                    "friend group {:?} references unknown person {}",
                    self.members, member
                ));
            }
            if self.members[..i].contains(member) {
                return Err(format!(
                    "friend group {:?} lists person {} twice",
                    self.members, member
                ));
            }
        }
        Ok(())
    }
}
