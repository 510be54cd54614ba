
use library_desk::{AccountStatus, Book, Record, RecordStore, Role, SessionConfig, User};
use script::{empty_directory, enrol, run, run_with};

const GENERIC_FAILURE: &str = "Invalid credentials or account is not active!";

#[test]
fn patron_signs_up_and_reaches_patron_menu() {
    let outcome = run(
        empty_directory(),
        &[
            "1", "Alice", "a@x.com", "pw", "30", "F", "3", // sign up as patron
            "2", "a@x.com", "pw", // log in
            "3", "y", // logout
            "3", // exit
        ],
    );

    assert!(outcome.output.contains("Account created successfully!"));
    assert!(outcome.output.contains("Your user ID: U1"));
    assert!(outcome.output.contains("Login successful!"));
    assert!(outcome.output.contains("=== Welcome Alice ==="));
    assert!(outcome.output.contains("=== User Menu ==="));
    assert!(outcome.output.trim_end().ends_with("Goodbye!"));

    let alice = outcome.user("U1");
    assert_eq!(alice.role(), Role::Patron);
    assert_eq!(alice.status(), AccountStatus::Active);
    assert_eq!(alice.account().age, 30);
    assert_eq!(alice.account().gender, "F");
}

#[test]
fn role_selector_picks_variant() {
    let outcome = run(
        empty_directory(),
        &[
            "1", "Root", "root@x.com", "pw", "40", "M", "1", //
            "1", "Lib", "lib@x.com", "pw", "35", "F", "2", //
            "1", "Pat", "pat@x.com", "pw", "20", "M", "nonsense", //
            "3",
        ],
    );

    let roles: Vec<Role> = outcome
        .directory
        .users()
        .unwrap()
        .iter()
        .map(User::role)
        .collect();
    assert_eq!(roles, [Role::Admin, Role::Librarian, Role::Patron]);
}

#[test]
fn banned_patron_cannot_log_in() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Root", "root@x.com", "rootpw", Role::Admin);
    let alice = enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);

    let outcome = run(
        directory,
        &[
            "2", "root@x.com", "rootpw", // admin logs in
            "2", alice.as_str(), // ban
            "7", "y", // logout
            "2", "a@x.com", "pw", // patron tries
            "3",
        ],
    );

    assert!(outcome.output.contains("Account banned successfully."));
    assert_eq!(outcome.count("Login successful!"), 1);
    assert_eq!(outcome.count(GENERIC_FAILURE), 1);
    assert_eq!(outcome.user(&alice).status(), AccountStatus::Banned);
}

#[test]
fn wrong_password_and_unknown_email_share_the_message() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);

    let outcome = run(
        directory,
        &["2", "a@x.com", "PW", "2", "nobody@x.com", "pw", "3"],
    );

    assert_eq!(outcome.count(GENERIC_FAILURE), 2);
    assert!(!outcome.output.contains("Login successful!"));
}

#[test]
fn librarian_adds_book_and_lists_it() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Lib", "lib@x.com", "pw", Role::Librarian);

    let outcome = run(
        directory,
        &[
            "2", "lib@x.com", "pw", //
            "1", "Dune", "Sci-Fi", "3", // add book
            "2", // view all books
            "4", "y", "3",
        ],
    );

    assert!(outcome.output.contains("Book added successfully!"));
    assert!(outcome.output.contains("=== All Books ==="));
    assert!(outcome
        .output
        .contains("Title: Dune\nGenre: Sci-Fi\nCopies: 3\n---------------"));

    let books = outcome.directory.books().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id(), "B2");
    assert_eq!(books[0].copies(), 3);
}

#[test]
fn patron_sees_books_but_cannot_add() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);
    directory
        .insert_record(&Book::new("B100", "Emma", "Classic", 0))
        .unwrap();

    let outcome = run(
        directory,
        &["2", "a@x.com", "pw", "1", "4", "3", "y", "3"],
    );

    assert!(outcome.output.contains("Title: Emma"));
    assert!(outcome.output.contains("Copies: 0"));
    // 4 is not a patron option
    assert_eq!(outcome.count("Invalid option!"), 1);
    assert_eq!(outcome.directory.books().unwrap().len(), 1);
}

#[test]
fn banning_unknown_user_changes_nothing() {
    let mut directory = empty_directory();
    let root = enrol(&mut directory, "Root", "root@x.com", "pw", Role::Admin);
    let alice = enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);
    let before = directory.users().unwrap();

    let outcome = run(
        directory,
        &["2", "root@x.com", "pw", "2", "U999999", "7", "y", "3"],
    );

    assert!(outcome.output.contains("User not found!"));
    assert!(!outcome.output.contains("Account banned successfully."));
    assert_eq!(outcome.directory.users().unwrap(), before);
    for id in [&root, &alice] {
        let stored = outcome.directory.get_record::<User>(id).unwrap().unwrap();
        assert_eq!(stored.version, 1);
    }
}

#[test]
fn deleted_account_can_be_unbanned_back_to_active() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Root", "root@x.com", "pw", Role::Admin);
    let alice = enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);

    let outcome = run(
        directory,
        &[
            "2", "root@x.com", "pw", //
            "4", alice.as_str(), // delete
            "3", alice.as_str(), // unban
            "7", "y", //
            "2", "a@x.com", "pw", "3", "y", // deleted-then-unbanned patron logs in
            "3",
        ],
    );

    assert!(outcome.output.contains("Account deleted successfully."));
    assert!(outcome.output.contains("Account unbanned successfully."));
    assert_eq!(outcome.count("Login successful!"), 2);
    assert_eq!(outcome.user(&alice).status(), AccountStatus::Active);
    // delete only flips the status
    assert_eq!(outcome.directory.users().unwrap().len(), 2);
}

#[test]
fn admin_changes_password() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Root", "root@x.com", "pw", Role::Admin);
    let alice = enrol(&mut directory, "Alice", "a@x.com", "old", Role::Patron);

    let outcome = run(
        directory,
        &[
            "2", "root@x.com", "pw", //
            "5", alice.as_str(), "new", //
            "7", "y", //
            "2", "a@x.com", "old", // rejected
            "2", "a@x.com", "new", "3", "y", // accepted
            "3",
        ],
    );

    assert!(outcome.output.contains("Enter new password: "));
    assert!(outcome.output.contains("Password changed successfully."));
    assert_eq!(outcome.count(GENERIC_FAILURE), 1);
    assert_eq!(outcome.count("Login successful!"), 2);

    let stored = outcome.user(&alice);
    assert!(stored.authenticate("new"));
    assert_eq!(stored.name(), "Alice");
}

#[test]
fn admin_lists_every_user() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Root", "root@x.com", "pw", Role::Admin);
    enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);

    let outcome = run(
        directory,
        &["2", "root@x.com", "pw", "1", "7", "y", "3"],
    );

    assert!(outcome.output.contains("=== All Users ==="));
    let root_at = outcome.output.find("User ID: U1").unwrap();
    let alice_at = outcome.output.find("User ID: U2").unwrap();
    assert!(root_at < alice_at);
    assert_eq!(outcome.count("Status: Active\n---------------"), 2);
}

#[test]
fn profile_edit_updates_only_given_fields() {
    let mut directory = empty_directory();
    let alice = enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);

    let outcome = run(
        directory,
        &[
            "2", "a@x.com", "pw", //
            "2", "Alicia", "", "0", "", // new name only
            "3", "n", // decline logout, menu comes back
            "3", "y", //
            "3",
        ],
    );

    assert!(outcome.output.contains("Profile updated successfully!"));
    assert!(outcome.output.contains("=== Welcome Alice ==="));
    assert!(outcome.output.contains("=== Welcome Alicia ==="));

    let stored = outcome.user(&alice);
    assert_eq!(stored.name(), "Alicia");
    assert_eq!(stored.email(), "a@x.com");
    assert_eq!(stored.account().age, 30);
    assert_eq!(stored.account().gender, "F");
    assert!(stored.authenticate("pw"));
}

#[test]
fn declining_logout_reenters_role_menu() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Lib", "lib@x.com", "pw", Role::Librarian);

    let outcome = run(
        directory,
        &["2", "lib@x.com", "pw", "4", "n", "4", "N", "4", "Y", "3"],
    );

    assert_eq!(outcome.count("=== Welcome Lib ==="), 3);
    assert_eq!(outcome.count("=== Librarian Menu ==="), 3);
    assert_eq!(outcome.count("Do you want to logout? (y/n): "), 3);
}

#[test]
fn bad_menu_input_is_an_invalid_option() {
    let outcome = run(empty_directory(), &["9", "abc", "", "3"]);

    assert_eq!(outcome.count("Invalid option!"), 3);
    assert_eq!(outcome.count("=== Library Management System ==="), 4);
}

#[test]
fn non_numeric_age_is_asked_again() {
    let outcome = run(
        empty_directory(),
        &["1", "Bob", "b@x.com", "pw", "old", "41", "M", "3", "3"],
    );

    assert_eq!(outcome.count("Please enter a number."), 1);
    assert_eq!(outcome.user("U1").account().age, 41);
}

#[test]
fn negative_copies_are_stored() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Lib", "lib@x.com", "pw", Role::Librarian);

    let outcome = run(
        directory,
        &["2", "lib@x.com", "pw", "1", "Ghost", "Horror", "-2", "4", "y", "3"],
    );

    assert_eq!(outcome.directory.books().unwrap()[0].copies(), -2);
}

#[test]
fn end_of_input_ends_session_quietly() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);

    // Input stops while the patron menu is waiting.
    let outcome = run(directory, &["2", "a@x.com", "pw"]);

    assert!(outcome.output.contains("=== User Menu ==="));
    assert!(!outcome.output.contains("Goodbye!"));
}

#[test]
fn interactive_mode_clears_and_pauses() {
    let outcome = run_with(
        empty_directory(),
        &["7", "", "3"],
        SessionConfig::default(),
    );

    assert!(outcome.output.starts_with(&"\n".repeat(50)));
    assert_eq!(outcome.count("Press Enter to continue..."), 1);
    assert_eq!(outcome.count("=== Library Management System ==="), 2);
    assert!(outcome.output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn admin_edits_own_profile() {
    let mut directory = empty_directory();
    let root = enrol(&mut directory, "Root", "root@x.com", "pw", Role::Admin);

    let outcome = run(
        directory,
        &[
            "2", "root@x.com", "pw", //
            "6", "Boss", "", "0", "", // new name only
            "7", "n", // menu comes back under the new name
            "7", "y", //
            "3",
        ],
    );

    assert!(outcome.output.contains("Profile updated successfully!"));
    assert!(outcome.output.contains("=== Welcome Boss ==="));
    let stored = outcome.user(&root);
    assert_eq!(stored.name(), "Boss");
    assert_eq!(stored.role(), Role::Admin);
    assert!(stored.authenticate("pw"));
}

#[test]
fn librarian_edits_own_profile() {
    let mut directory = empty_directory();
    let lib = enrol(&mut directory, "Lib", "lib@x.com", "pw", Role::Librarian);

    let outcome = run(
        directory,
        &[
            "2", "lib@x.com", "pw", //
            "3", "", "secret", "52", "M", //
            "4", "y", //
            "2", "lib@x.com", "pw", // old password rejected
            "2", "lib@x.com", "secret", "4", "y", //
            "3",
        ],
    );

    assert!(outcome.output.contains("Profile updated successfully!"));
    assert_eq!(outcome.count(GENERIC_FAILURE), 1);
    assert_eq!(outcome.count("=== Librarian Menu ==="), 3);

    let stored = outcome.user(&lib);
    assert_eq!(stored.name(), "Lib");
    assert_eq!(stored.account().age, 52);
    assert_eq!(stored.account().gender, "M");
}

#[test]
fn every_moderation_reports_unknown_user() {
    let mut directory = empty_directory();
    enrol(&mut directory, "Root", "root@x.com", "pw", Role::Admin);
    let alice = enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);
    let before = directory.users().unwrap();

    let outcome = run(
        directory,
        &[
            "2", "root@x.com", "pw", //
            "3", "U999999", // unban
            "4", "U999999", // delete
            "5", "U999999", // change password
            "7", "y", //
            "3",
        ],
    );

    assert_eq!(outcome.count("User not found!"), 3);
    // an unknown target is rejected before a new password is asked for
    assert!(!outcome.output.contains("Enter new password: "));
    assert!(!outcome.output.contains("successfully."));
    assert_eq!(outcome.directory.users().unwrap(), before);
    let stored = outcome.directory.get_record::<User>(&alice).unwrap().unwrap();
    assert_eq!(stored.version, 1);
}

#[test]
fn admin_who_bans_themselves_keeps_session_until_logout() {
    let mut directory = empty_directory();
    let root = enrol(&mut directory, "Root", "root@x.com", "pw", Role::Admin);

    let outcome = run(
        directory,
        &[
            "2", "root@x.com", "pw", //
            "2", root.as_str(), // ban self
            "1", // still in the admin menu
            "7", "y", //
            "2", "root@x.com", "pw", // now refused
            "3",
        ],
    );

    assert!(outcome.output.contains("Account banned successfully."));
    assert!(outcome.output.contains("Status: Banned"));
    assert_eq!(outcome.count("=== Admin Menu ==="), 3);
    assert_eq!(outcome.count("Login successful!"), 1);
    assert_eq!(outcome.count(GENERIC_FAILURE), 1);
    assert_eq!(outcome.user(&root).status(), AccountStatus::Banned);
}

#[test]
fn negative_age_in_profile_edit_is_skipped() {
    let mut directory = empty_directory();
    let alice = enrol(&mut directory, "Alice", "a@x.com", "pw", Role::Patron);

    let outcome = run(
        directory,
        &["2", "a@x.com", "pw", "2", "", "", "-1", "", "3", "y", "3"],
    );

    assert!(!outcome.output.contains("Please enter a number."));
    assert!(outcome.output.contains("Profile updated successfully!"));
    assert_eq!(outcome.user(&alice).account().age, 30);
}
