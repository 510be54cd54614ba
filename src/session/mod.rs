//! Session - the interactive menu controller.
//!
//! A [`Session`] owns the [`Directory`] and a [`Console`]. The logged-in user
//! is tracked by identifier only and re-read from the directory whenever it
//! is needed, so edits made through any menu show up immediately.
//!
//! ## Example
//!
//! ```
//! use library_desk::{Directory, SequentialIds, Session, SessionConfig};
//!
//! let script = "1\nAlice\na@x.com\npw\n30\nF\n3\n3\n";
//! let directory = Directory::new(Box::new(SequentialIds::new()));
//! let mut session = Session::new(directory, script.as_bytes(), Vec::new(), SessionConfig::plain());
//! session.run().unwrap();
//!
//! let (directory, _output) = session.into_parts();
//! assert_eq!(directory.users().unwrap().len(), 1);
//! ```

mod console;
mod menu;

use std::io::{BufRead, Write};

use crate::access::{self, LoginError, NewAccount};
use crate::config::SessionConfig;
use crate::directory::{Directory, DirectoryError, RecordStore, Versioned};
use crate::error::SessionError;
use crate::record::{Book, ProfileEdit, Record, Role, User};
use crate::roles::{Admin, Librarian};

pub use console::Console;
pub use menu::{AdminChoice, LibrarianChoice, MainChoice, Moderation, PatronChoice};

const SEPARATOR: &str = "---------------";

pub struct Session<R, W> {
    directory: Directory,
    console: Console<R, W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(directory: Directory, input: R, output: W, config: SessionConfig) -> Self {
        Self {
            directory,
            console: Console::new(input, output),
            config,
        }
    }

    pub fn into_parts(self) -> (Directory, W) {
        (self.directory, self.console.into_output())
    }

    /// Runs the main menu until Exit is chosen or input runs out.
    pub fn run(&mut self) -> Result<(), SessionError> {
        match self.main_loop() {
            Err(SessionError::InputClosed) => {
                tracing::info!("console input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_loop(&mut self) -> Result<(), SessionError> {
        loop {
            self.clear()?;
            self.console.say(menu::MAIN_MENU)?;
            let choice = self.console.prompt_choice("Choose an option: ")?;

            match MainChoice::from_choice(choice) {
                Some(MainChoice::SignUp) => self.sign_up()?,
                Some(MainChoice::Login) => self.log_in()?,
                Some(MainChoice::Exit) => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                None => self.console.say("Invalid option!")?,
            }
            self.pause()?;
        }
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        if self.config.clear_screen {
            self.console.clear()?;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SessionError> {
        if self.config.pause {
            self.console.pause()?;
        }
        Ok(())
    }

    fn sign_up(&mut self) -> Result<(), SessionError> {
        self.console.say("=== Sign Up ===")?;
        let name = self.console.prompt("Enter name: ")?;
        let email = self.console.prompt("Enter email: ")?;
        let password = self.console.prompt("Enter password: ")?;
        let age = self.console.prompt_number("Enter age: ")?;
        let gender = self.console.prompt("Enter gender (M/F): ")?;

        self.console.say(menu::ROLE_SELECT)?;
        let role = Role::from_selector(self.console.prompt_choice("Choice: ")?);

        let form = NewAccount {
            name,
            email,
            password,
            age,
            gender,
            role,
        };
        let user = access::sign_up(&mut self.directory, form)?;

        self.console.say("Account created successfully!")?;
        self.console.say(&format!("Your user ID: {}", user.id()))?;
        Ok(())
    }

    fn log_in(&mut self) -> Result<(), SessionError> {
        self.console.say("=== Login ===")?;
        let email = self.console.prompt("Enter email: ")?;
        let password = self.console.prompt("Enter password: ")?;

        match access::log_in(&self.directory, &email, &password) {
            Ok(user) => {
                self.console.say("Login successful!")?;
                self.user_session(user.id())
            }
            Err(LoginError::Directory(err)) => Err(err.into()),
            Err(LoginError::InvalidCredentials | LoginError::Inactive(_)) => {
                self.console
                    .say("Invalid credentials or account is not active!")
            }
        }
    }

    fn current_user(&self, id: &str) -> Result<Versioned<User>, SessionError> {
        self.directory
            .get_record::<User>(id)?
            .ok_or_else(|| {
                DirectoryError::NotFound {
                    collection: User::COLLECTION.to_string(),
                    id: id.to_string(),
                }
                .into()
            })
    }

    /// Role menu, re-entered until the user confirms the logout.
    fn user_session(&mut self, user_id: &str) -> Result<(), SessionError> {
        loop {
            self.clear()?;
            let user = self.current_user(user_id)?.data;
            self.console
                .say(&format!("=== Welcome {} ===", user.name()))?;

            if let Some(admin) = Admin::of(&user) {
                self.admin_menu(&admin)?;
            } else if let Some(librarian) = Librarian::of(&user) {
                self.librarian_menu(&librarian)?;
            } else {
                self.patron_menu(user_id)?;
            }

            let answer = self
                .console
                .prompt("\nDo you want to logout? (y/n): ")?;
            if answer.trim_start().starts_with(['y', 'Y']) {
                tracing::info!(id = user_id, "logged out");
                return Ok(());
            }
        }
    }

    fn admin_menu(&mut self, admin: &Admin) -> Result<(), SessionError> {
        loop {
            self.console.say(menu::ADMIN_MENU)?;
            let choice = self.console.prompt_choice("Choose an option: ")?;

            match AdminChoice::from_choice(choice) {
                Some(AdminChoice::Logout) => return Ok(()),
                Some(AdminChoice::ViewUsers) => self.view_users()?,
                Some(AdminChoice::Moderate(action)) => self.moderate(admin, action)?,
                Some(AdminChoice::EditProfile) => self.edit_profile(admin.id())?,
                None => self.console.say("Invalid option!")?,
            }
            self.pause()?;
        }
    }

    fn librarian_menu(&mut self, librarian: &Librarian) -> Result<(), SessionError> {
        loop {
            self.console.say(menu::LIBRARIAN_MENU)?;
            let choice = self.console.prompt_choice("Choose an option: ")?;

            match LibrarianChoice::from_choice(choice) {
                Some(LibrarianChoice::Logout) => return Ok(()),
                Some(LibrarianChoice::AddBook) => self.add_book(librarian)?,
                Some(LibrarianChoice::ViewBooks) => self.view_books()?,
                Some(LibrarianChoice::EditProfile) => self.edit_profile(librarian.id())?,
                None => self.console.say("Invalid option!")?,
            }
            self.pause()?;
        }
    }

    fn patron_menu(&mut self, user_id: &str) -> Result<(), SessionError> {
        loop {
            self.console.say(menu::PATRON_MENU)?;
            let choice = self.console.prompt_choice("Choose an option: ")?;

            match PatronChoice::from_choice(choice) {
                Some(PatronChoice::Logout) => return Ok(()),
                Some(PatronChoice::ViewBooks) => self.view_books()?,
                Some(PatronChoice::EditProfile) => self.edit_profile(user_id)?,
                None => self.console.say("Invalid option!")?,
            }
            self.pause()?;
        }
    }

    fn view_users(&mut self) -> Result<(), SessionError> {
        self.console.say("\n=== All Users ===")?;
        for user in self.directory.users()? {
            self.console.say(&user.to_string())?;
            self.console.say(SEPARATOR)?;
        }
        Ok(())
    }

    fn view_books(&mut self) -> Result<(), SessionError> {
        self.console.say("\n=== All Books ===")?;
        for book in self.directory.books()? {
            self.console.say(&book.to_string())?;
            self.console.say(SEPARATOR)?;
        }
        Ok(())
    }

    fn moderate(&mut self, admin: &Admin, action: Moderation) -> Result<(), SessionError> {
        let target_id = self.console.prompt("Enter user ID: ")?;

        let Some(Versioned {
            data: mut target,
            version,
        }) = self.directory.get_record::<User>(&target_id)?
        else {
            tracing::debug!(admin = admin.id(), ?action, "moderation target not found");
            return self.console.say("User not found!");
        };

        let confirmation = match action {
            Moderation::Ban => admin.ban_account(&mut target),
            Moderation::Unban => admin.unban_account(&mut target),
            Moderation::Delete => admin.delete_account(&mut target),
            Moderation::ChangePassword => {
                let new_password = self.console.prompt("Enter new password: ")?;
                admin.change_password(&mut target, &new_password)
            }
        };

        self.directory.update_record(&target, version)?;
        self.console.say(confirmation)
    }

    fn edit_profile(&mut self, user_id: &str) -> Result<(), SessionError> {
        let name = self
            .console
            .prompt("Enter new name (or press Enter to skip): ")?;
        let password = self
            .console
            .prompt("Enter new password (or press Enter to skip): ")?;
        // Zero or negative means skip.
        let age: i64 = self
            .console
            .prompt_number("Enter new age (or 0 to skip): ")?;
        let gender = self
            .console
            .prompt("Enter new gender (or press Enter to skip): ")?;

        let Versioned {
            data: mut user,
            version,
        } = self.current_user(user_id)?;
        user.edit_profile(&ProfileEdit {
            name,
            password,
            age: u32::try_from(age).unwrap_or(0),
            gender,
        });
        self.directory.update_record(&user, version)?;
        tracing::info!(id = user_id, "profile updated");

        self.console.say("Profile updated successfully!")
    }

    fn add_book(&mut self, librarian: &Librarian) -> Result<(), SessionError> {
        let title = self.console.prompt("Enter book name: ")?;
        let genre = self.console.prompt("Enter genre: ")?;
        let copies = self.console.prompt_number("Enter number of copies: ")?;

        let id = self.directory.fresh_id::<Book>()?;
        let book = librarian.add_book(id, &title, &genre, copies);
        self.directory.insert_record(&book)?;

        self.console.say("Book added successfully!")
    }
}
