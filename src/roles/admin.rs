use crate::record::{AccountStatus, ProfileEdit, Record, User};

/// Account moderation rights.
///
/// Targets are resolved by the caller; these methods only mutate the record
/// they are given and return the confirmation to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    id: String,
}

impl Admin {
    /// Moderation rights of `user`, if they are an administrator.
    pub fn of(user: &User) -> Option<Self> {
        match user {
            User::Admin(account) => Some(Self {
                id: account.id.clone(),
            }),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ban_account(&self, target: &mut User) -> &'static str {
        self.set_status(target, AccountStatus::Banned);
        "Account banned successfully."
    }

    pub fn unban_account(&self, target: &mut User) -> &'static str {
        self.set_status(target, AccountStatus::Active);
        "Account unbanned successfully."
    }

    /// Marks the account deleted. The record stays in the directory.
    pub fn delete_account(&self, target: &mut User) -> &'static str {
        self.set_status(target, AccountStatus::Deleted);
        "Account deleted successfully."
    }

    pub fn change_password(&self, target: &mut User, new_password: &str) -> &'static str {
        target.edit_profile(&ProfileEdit::password(new_password));
        tracing::info!(admin = %self.id, target = target.id(), "password changed");
        "Password changed successfully."
    }

    fn set_status(&self, target: &mut User, status: AccountStatus) {
        let previous = target.status();
        target.set_status(status);
        tracing::info!(
            admin = %self.id,
            target = target.id(),
            from = %previous,
            to = %status,
            "account status changed"
        );
    }
}
