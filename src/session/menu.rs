//! Numbered menus and how their choices decode.

pub const MAIN_MENU: &str = "=== Library Management System ===\n\
1. Sign Up\n\
2. Login\n\
3. Exit";

pub const ROLE_SELECT: &str = "Select role:\n\
1. Admin\n\
2. Librarian\n\
3. User";

pub const ADMIN_MENU: &str = "\n=== Admin Menu ===\n\
1. View All Users\n\
2. Ban User\n\
3. Unban User\n\
4. Delete User\n\
5. Change User Password\n\
6. Edit Own Profile\n\
7. Logout";

pub const LIBRARIAN_MENU: &str = "\n=== Librarian Menu ===\n\
1. Add Book\n\
2. View All Books\n\
3. Edit Own Profile\n\
4. Logout";

pub const PATRON_MENU: &str = "\n=== User Menu ===\n\
1. View Available Books\n\
2. Edit Profile\n\
3. Logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    SignUp,
    Login,
    Exit,
}

impl MainChoice {
    pub fn from_choice(choice: Option<u32>) -> Option<Self> {
        match choice? {
            1 => Some(Self::SignUp),
            2 => Some(Self::Login),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Admin actions aimed at another account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moderation {
    Ban,
    Unban,
    Delete,
    ChangePassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminChoice {
    ViewUsers,
    Moderate(Moderation),
    EditProfile,
    Logout,
}

impl AdminChoice {
    pub fn from_choice(choice: Option<u32>) -> Option<Self> {
        match choice? {
            1 => Some(Self::ViewUsers),
            2 => Some(Self::Moderate(Moderation::Ban)),
            3 => Some(Self::Moderate(Moderation::Unban)),
            4 => Some(Self::Moderate(Moderation::Delete)),
            5 => Some(Self::Moderate(Moderation::ChangePassword)),
            6 => Some(Self::EditProfile),
            7 => Some(Self::Logout),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibrarianChoice {
    AddBook,
    ViewBooks,
    EditProfile,
    Logout,
}

impl LibrarianChoice {
    pub fn from_choice(choice: Option<u32>) -> Option<Self> {
        match choice? {
            1 => Some(Self::AddBook),
            2 => Some(Self::ViewBooks),
            3 => Some(Self::EditProfile),
            4 => Some(Self::Logout),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatronChoice {
    ViewBooks,
    EditProfile,
    Logout,
}

impl PatronChoice {
    pub fn from_choice(choice: Option<u32>) -> Option<Self> {
        match choice? {
            1 => Some(Self::ViewBooks),
            2 => Some(Self::EditProfile),
            3 => Some(Self::Logout),
            _ => None,
        }
    }
}
