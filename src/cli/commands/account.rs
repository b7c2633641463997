//! Landing, signup, login and logout subcommands.

use clap::{Arg, Command};

pub const ARG_ROLE: &str = "role";
pub const ARG_USERNAME: &str = "username";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_ADMIN_CODE: &str = "admin-code";

fn role_arg() -> Arg {
    Arg::new(ARG_ROLE)
        .help("Account type")
        .value_parser(["client", "admin"])
        .required(true)
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email address")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long("password")
        .help("Account password")
        .env("BOOKSTALL_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .subcommand(
            Command::new("home").about("Open the landing page, or go home when signed in"),
        )
        .subcommand(Command::new("nav").about("Show the navigation available to this session"))
        .subcommand(
            Command::new("signup")
                .about("Create a client or admin account")
                .arg(role_arg())
                .arg(
                    Arg::new(ARG_USERNAME)
                        .short('u')
                        .long("username")
                        .help("Display name, at least 3 characters")
                        .required(true),
                )
                .arg(email_arg())
                .arg(password_arg())
                .arg(
                    Arg::new(ARG_CONFIRM_PASSWORD)
                        .long("confirm-password")
                        .help("Repeat the password")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_ADMIN_CODE)
                        .long("admin-code")
                        .help("Admin registration code (admin accounts only)")
                        .env("BOOKSTALL_ADMIN_CODE")
                        .hide_env_values(true),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session")
                .arg(role_arg())
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(Command::new("logout").about("Forget the stored session"))
}
