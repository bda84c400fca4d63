/// Access level granted to an identity on a list.
///
/// `Owner` is the creator of the list. `Shared` is anyone named by a
/// list share (by user id or invited email). Shared users can edit the
/// list and its items; only the owner can delete, share or unshare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAccess {
    Owner,
    Shared,
}

impl ListAccess {
    pub fn can_read(&self) -> bool {
        true
    }

    /// Item CRUD, rename and market re-association.
    pub fn can_edit(&self) -> bool {
        matches!(self, ListAccess::Owner | ListAccess::Shared)
    }

    /// Delete, share and unshare.
    pub fn can_manage(&self) -> bool {
        matches!(self, ListAccess::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_holds_every_capability() {
        assert!(ListAccess::Owner.can_read());
        assert!(ListAccess::Owner.can_edit());
        assert!(ListAccess::Owner.can_manage());
    }

    #[test]
    fn shared_user_can_edit_but_not_manage() {
        assert!(ListAccess::Shared.can_read());
        assert!(ListAccess::Shared.can_edit());
        assert!(!ListAccess::Shared.can_manage());
    }
}
