//! Catalogue, purchase and listing subcommands for clients.

use clap::{Arg, Command};

pub const ARG_SEARCH: &str = "search";
pub const ARG_BOOK_ID: &str = "book-id";
pub const ARG_QUANTITY: &str = "quantity";
pub const ARG_TITLE: &str = "title";
pub const ARG_AUTHOR: &str = "author";
pub const ARG_DESCRIPTION: &str = "description";
pub const ARG_PRICE: &str = "price";

/// Fields of a new listing, shared with `admin add-book`. Values stay text
/// so the listing form reports bad numbers like any other field error.
#[must_use]
pub fn with_listing_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_TITLE)
                .long("title")
                .help("Book title")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_AUTHOR)
                .long("author")
                .help("Book author")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_DESCRIPTION)
                .long("description")
                .help("Short description")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_PRICE)
                .long("price")
                .help("Unit price")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_QUANTITY)
                .long("quantity")
                .help("Copies for sale")
                .default_value(""),
        )
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .subcommand(
            Command::new("books")
                .about("Browse available books")
                .arg(
                    Arg::new(ARG_SEARCH)
                        .short('s')
                        .long("search")
                        .help("Only show books whose title or author contains this text")
                        .default_value(""),
                ),
        )
        .subcommand(
            Command::new("buy")
                .about("Buy copies of an available book")
                .arg(Arg::new(ARG_BOOK_ID).help("Book id").required(true))
                .arg(
                    Arg::new(ARG_QUANTITY)
                        .short('q')
                        .long("quantity")
                        .help("Copies to buy")
                        .default_value("1"),
                ),
        )
        .subcommand(with_listing_args(
            Command::new("sell").about("Submit a book for approval"),
        ))
        .subcommand(Command::new("my-books").about("List your submitted books"))
        .subcommand(
            Command::new("dashboard").about("Your listings, purchases and statistics"),
        )
}
