use super::render::{admin_stats_lines, Report};
use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use bookstall_client::api::ReviewAction;
use bookstall_client::forms::BookForm;
use bookstall_client::pages::admin_dashboard::{self, AdminDashboard};

#[derive(Debug)]
pub enum Command {
    Dashboard,
    Review {
        book_id: String,
        action: ReviewAction,
    },
    AddBook(BookForm),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// # Errors
/// Returns an error if the API client cannot be built.
pub async fn execute(args: Args) -> Result<Report> {
    let api = args.globals.api_client()?;
    let session = args.globals.session();

    let report = match args.command {
        Command::Dashboard => Report::from_flow(
            admin_dashboard::load(&api, &session).await,
            |report, dashboard| render_dashboard(report, dashboard, Sections::All),
        ),
        Command::Review { book_id, action } => Report::from_flow(
            admin_dashboard::review(&api, &session, &book_id, action).await,
            |report, dashboard| render_dashboard(report, dashboard, Sections::All),
        ),
        // The review queue is not reloaded after adding a book.
        Command::AddBook(form) => Report::from_flow(
            admin_dashboard::add_book(&api, &session, &form).await,
            |report, dashboard| render_dashboard(report, dashboard, Sections::WithoutQueue),
        ),
    };
    Ok(report)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Sections {
    All,
    WithoutQueue,
}

fn render_dashboard(report: &mut Report, dashboard: AdminDashboard, sections: Sections) {
    report.heading("Statistics");
    for line in admin_stats_lines(&dashboard.stats) {
        report.line(line);
    }
    if sections == Sections::All {
        report.heading("Pending Review");
        report.books(&dashboard.pending, "No books waiting for review");
    }
    report.heading("Available Books");
    report.books(&dashboard.books, "No books available");
}
