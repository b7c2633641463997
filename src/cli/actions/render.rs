//! Plain-text rendering of flow results. Every action builds a `Report`;
//! the runner prints it and turns it into the exit status.

use bookstall_client::api::{AdminStatistics, Book, ClientStatistics, Purchase};
use bookstall_client::pages::Flow;
use bookstall_client::{NavBar, NavTarget, Notice, NoticeKind, Rejection, View};
use std::process::ExitCode;

#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<String>,
    failed: bool,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a flow result: notices first, then `body` for the data,
    /// then where the view navigates next.
    pub fn from_flow<T>(flow: Flow<T>, body: impl FnOnce(&mut Self, T)) -> Self {
        let mut report = Self::new();
        match flow {
            Ok(outcome) => {
                for notice in &outcome.notices {
                    report.notice(notice);
                }
                body(&mut report, outcome.data);
                if let Some(view) = outcome.navigate {
                    report.navigate(view);
                }
            }
            Err(rejection) => report.rejection(&rejection),
        }
        report
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn heading(&mut self, title: &str) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(format!("== {title} =="));
    }

    pub fn notice(&mut self, notice: &Notice) {
        self.lines.push(notice_line(notice));
    }

    pub fn navigate(&mut self, view: View) {
        self.lines.push(format!("→ {view}"));
    }

    /// Records a rejection and marks the report as failed.
    pub fn rejection(&mut self, rejection: &Rejection) {
        self.failed = true;
        match rejection {
            Rejection::Redirect(view) => self.navigate(*view),
            Rejection::Invalid(errors) => {
                for (field, message) in errors.iter() {
                    self.lines.push(format!("[invalid] {field}: {message}"));
                }
            }
            Rejection::Failed(notice) => self.notice(notice),
        }
    }

    pub fn fail(&mut self, notice: &Notice) {
        self.failed = true;
        self.notice(notice);
    }

    pub fn books(&mut self, books: &[Book], empty: &str) {
        if books.is_empty() {
            self.line(empty);
        }
        for book in books {
            self.line(book_line(book));
        }
    }

    pub fn purchases(&mut self, purchases: &[Purchase]) {
        if purchases.is_empty() {
            self.line("No purchases yet");
        }
        for purchase in purchases {
            self.line(purchase_line(purchase));
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.failed
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }
}

#[must_use]
pub fn notice_line(notice: &Notice) -> String {
    let tag = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
        NoticeKind::Info => "info",
    };
    format!("[{tag}] {}: {}", notice.title, notice.description)
}

#[must_use]
pub fn book_line(book: &Book) -> String {
    let mut line = format!(
        "{}  {} by {}  ${:.2}  {} in stock  [{}]",
        book.id,
        book.title,
        book.author,
        book.price,
        book.quantity,
        book.status.label()
    );
    if book.sold_quantity > 0 {
        line.push_str(&format!("  {} sold", book.sold_quantity));
    }
    if let Some(seller) = book.seller.as_ref().and_then(|seller| seller.username()) {
        line.push_str(&format!("  seller: {seller}"));
    }
    line
}

#[must_use]
pub fn purchase_line(purchase: &Purchase) -> String {
    let date = purchase
        .purchased_on()
        .map_or_else(|| purchase.purchase_date.clone(), |day| day.to_string());
    let book = match purchase.book.author() {
        Some(author) => format!("{} by {author}", purchase.book.title()),
        None => purchase.book.title().to_string(),
    };
    format!(
        "{date}  {book}  x{}  ${:.2}",
        purchase.quantity, purchase.total_price
    )
}

#[must_use]
pub fn client_stats_lines(stats: &ClientStatistics) -> Vec<String> {
    vec![
        format!("Listed books: {}", stats.total_books),
        format!(
            "Pending: {}  Approved: {}  Rejected: {}",
            stats.pending_books, stats.approved_books, stats.rejected_books
        ),
        format!("Purchases: {}", stats.total_purchases),
    ]
}

#[must_use]
pub fn admin_stats_lines(stats: &AdminStatistics) -> Vec<String> {
    vec![
        format!(
            "Books: {}  Available: {}  Sold out: {}  Pending: {}",
            stats.total_books, stats.available_books, stats.out_of_stock, stats.pending_books
        ),
        format!(
            "Units in stock: {}  Units sold: {} ({:.0}% of {})",
            stats.total_quantity,
            stats.total_sold_quantity,
            stats.sold_ratio() * 100.0,
            stats.total_units()
        ),
    ]
}

#[must_use]
pub fn nav_lines(bar: &NavBar) -> Vec<String> {
    let mut lines = vec![format!("DK Book Stall  → {}", bar.brand)];
    for action in &bar.actions {
        lines.push(match action.target {
            NavTarget::Go(view) => format!("  {}  → {view}", action.label),
            NavTarget::Logout => format!("  {}", action.label),
        });
    }
    lines
}
