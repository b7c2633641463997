use super::books::{with_listing_args, ARG_BOOK_ID};
use clap::{Arg, Command};

pub const ARG_REVIEW_ACTION: &str = "review-action";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.subcommand(
        Command::new("admin")
            .about("Moderation tools for admin accounts")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(
                Command::new("dashboard").about("Catalogue, pending reviews and statistics"),
            )
            .subcommand(
                Command::new("review")
                    .about("Approve or reject a pending book")
                    .arg(Arg::new(ARG_BOOK_ID).help("Book id").required(true))
                    .arg(
                        Arg::new(ARG_REVIEW_ACTION)
                            .help("Decision")
                            .value_parser(["approve", "reject"])
                            .required(true),
                    ),
            )
            .subcommand(with_listing_args(
                Command::new("add-book").about("Add a book to the catalogue"),
            )),
    )
}
