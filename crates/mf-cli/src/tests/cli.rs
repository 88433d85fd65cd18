use crate::{Cli, Commands};

use clap::Parser;
use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_sign_in_args_when_parsed_then_sign_in_command() {
    let cli = Cli::try_parse_from([
        "mefit",
        "sign-in",
        "--email",
        "user@mefit.com",
        "--password",
        "user123",
    ])
    .unwrap();

    assert_that!(
        cli.command,
        eq(&Commands::SignIn {
            email: "user@mefit.com".to_string(),
            password: "user123".to_string(),
        })
    );
    assert_that!(cli.pretty, eq(false));
}

#[test]
fn given_sign_up_flags_when_parsed_then_capabilities_set() {
    let cli = Cli::try_parse_from([
        "mefit",
        "sign-up",
        "--email",
        "new@mefit.com",
        "--first-name",
        "New",
        "--last-name",
        "Member",
        "--contributor",
        "--pretty",
    ])
    .unwrap();

    assert_that!(
        cli.command,
        eq(&Commands::SignUp {
            email: "new@mefit.com".to_string(),
            first_name: "New".to_string(),
            last_name: "Member".to_string(),
            contributor: true,
            admin: false,
        })
    );
    assert_that!(cli.pretty, eq(true));
}

#[test]
fn given_sign_in_without_password_when_parsed_then_error() {
    let result = Cli::try_parse_from(["mefit", "sign-in", "--email", "user@mefit.com"]);

    assert!(result.is_err());
}
