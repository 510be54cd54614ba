//! Sign-up and login against the directory, independent of any console.

use std::fmt;

use crate::directory::{Directory, DirectoryError, RecordStore};
use crate::record::{AccountStatus, Record, Role, User};

/// Everything a sign-up form collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub gender: String,
    pub role: Role,
}

/// Why a login was refused. The console shows every credential or status
/// failure the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    InvalidCredentials,
    Inactive(AccountStatus),
    /// The scan itself failed; not a credentials problem.
    Directory(DirectoryError),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "no account matches those credentials"),
            LoginError::Inactive(status) => write!(f, "account is {}", status),
            LoginError::Directory(err) => write!(f, "directory error: {}", err),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<DirectoryError> for LoginError {
    fn from(err: DirectoryError) -> Self {
        LoginError::Directory(err)
    }
}

/// Creates the account under a fresh identifier. Duplicate emails are allowed.
pub fn sign_up(directory: &mut Directory, form: NewAccount) -> Result<User, DirectoryError> {
    let id = directory.fresh_id::<User>()?;
    let user = User::new(
        id,
        &form.name,
        &form.email,
        &form.password,
        form.age,
        &form.gender,
        form.role,
    );
    directory.insert_record(&user)?;
    tracing::info!(id = user.id(), role = %user.role(), "account created");
    Ok(user)
}

/// First account (in sign-up order) whose email and password both match,
/// provided it is active.
pub fn log_in(directory: &Directory, email: &str, password: &str) -> Result<User, LoginError> {
    let found = directory
        .find_first::<User>(&|user| user.email() == email && user.authenticate(password))?;

    let Some(found) = found else {
        tracing::debug!("login rejected");
        return Err(LoginError::InvalidCredentials);
    };

    let user = found.data;
    if !user.is_active() {
        tracing::debug!("login rejected");
        return Err(LoginError::Inactive(user.status()));
    }

    tracing::info!(id = user.id(), "login succeeded");
    Ok(user)
}
