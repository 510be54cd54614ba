use std::fmt;

use serde::{Deserialize, Serialize};

use super::Record;

/// What an account may do. Fixed when the account is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Librarian,
    Patron,
}

impl Role {
    /// Maps the sign-up selector: 1 is Admin, 2 is Librarian, anything else
    /// (including unreadable input) is Patron.
    pub fn from_selector(choice: Option<u32>) -> Self {
        match choice {
            Some(1) => Role::Admin,
            Some(2) => Role::Librarian,
            _ => Role::Patron,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Librarian => write!(f, "Librarian"),
            Role::Patron => write!(f, "User"),
        }
    }
}

/// Moderation state. Any state can move to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    #[default]
    Active,
    Banned,
    Deleted,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "Active"),
            AccountStatus::Banned => write!(f, "Banned"),
            AccountStatus::Deleted => write!(f, "Deleted"),
        }
    }
}

/// Fields shared by every kind of user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    password: String,
    pub age: u32,
    pub gender: String,
    pub status: AccountStatus,
}

/// Requested profile changes. Empty strings and a zero age leave the
/// corresponding field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEdit {
    pub name: String,
    pub password: String,
    pub age: u32,
    pub gender: String,
}

impl ProfileEdit {
    /// Edit touching only the password.
    pub fn password(new_password: &str) -> Self {
        Self {
            password: new_password.to_string(),
            ..Self::default()
        }
    }
}

/// A user account, tagged by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum User {
    Admin(Account),
    Librarian(Account),
    Patron(Account),
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: &str,
        email: &str,
        password: &str,
        age: u32,
        gender: &str,
        role: Role,
    ) -> Self {
        let account = Account {
            id: id.into(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            age,
            gender: gender.to_string(),
            status: AccountStatus::Active,
        };

        match role {
            Role::Admin => User::Admin(account),
            Role::Librarian => User::Librarian(account),
            Role::Patron => User::Patron(account),
        }
    }

    pub fn account(&self) -> &Account {
        match self {
            User::Admin(account) | User::Librarian(account) | User::Patron(account) => account,
        }
    }

    fn account_mut(&mut self) -> &mut Account {
        match self {
            User::Admin(account) | User::Librarian(account) | User::Patron(account) => account,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            User::Admin(_) => Role::Admin,
            User::Librarian(_) => Role::Librarian,
            User::Patron(_) => Role::Patron,
        }
    }

    pub fn name(&self) -> &str {
        &self.account().name
    }

    pub fn email(&self) -> &str {
        &self.account().email
    }

    pub fn status(&self) -> AccountStatus {
        self.account().status
    }

    pub fn is_active(&self) -> bool {
        self.status() == AccountStatus::Active
    }

    /// Exact, case-sensitive comparison against the stored password.
    pub fn authenticate(&self, candidate: &str) -> bool {
        self.account().password == candidate
    }

    pub fn set_status(&mut self, status: AccountStatus) {
        self.account_mut().status = status;
    }

    pub fn edit_profile(&mut self, edit: &ProfileEdit) {
        let account = self.account_mut();
        if !edit.name.is_empty() {
            account.name = edit.name.clone();
        }
        if !edit.password.is_empty() {
            account.password = edit.password.clone();
        }
        if edit.age > 0 {
            account.age = edit.age;
        }
        if !edit.gender.is_empty() {
            account.gender = edit.gender.clone();
        }
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";
    const ID_PREFIX: &'static str = "U";

    fn id(&self) -> &str {
        &self.account().id
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.account();
        writeln!(f, "User ID: {}", account.id)?;
        writeln!(f, "Name: {}", account.name)?;
        writeln!(f, "Email: {}", account.email)?;
        writeln!(f, "Age: {}", account.age)?;
        writeln!(f, "Gender: {}", account.gender)?;
        writeln!(f, "Role: {}", self.role())?;
        write!(f, "Status: {}", account.status)
    }
}
