use bookstall_client::api::{Book, BookStatus};
use leptos::prelude::*;

fn status_class(status: BookStatus) -> &'static str {
    match status {
        BookStatus::Approved | BookStatus::Available => "bg-emerald-100 text-emerald-800",
        BookStatus::Rejected => "bg-red-100 text-red-800",
        BookStatus::Pending => "bg-amber-100 text-amber-800",
        BookStatus::Sold | BookStatus::Unknown => "bg-gray-100 text-gray-800",
    }
}

/// One book with price, stock and status. `show_sales` adds a bar for the
/// share of units sold. `children` renders the actions that apply on the
/// current page.
#[component]
pub fn BookCard(
    book: Book,
    #[prop(optional)] show_status: bool,
    #[prop(optional)] show_sales: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let seller = book
        .seller
        .as_ref()
        .and_then(|seller| seller.username())
        .map(|name| format!("Seller: {name}"));
    let sold = (book.sold_quantity > 0).then(|| format!("{} sold", book.sold_quantity));
    let status = book.status;
    let sold_width = format!("width: {:.0}%", book.sold_ratio() * 100.0);
    let stock = if book.in_stock() {
        format!("{} in stock", book.quantity)
    } else {
        "Out of stock".to_string()
    };

    view! {
        <div class="flex flex-col rounded-lg border border-gray-200 bg-white p-5 shadow-sm">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <h3 class="text-lg font-semibold text-gray-900">{book.title.clone()}</h3>
                    <p class="text-sm text-gray-600">"by " {book.author.clone()}</p>
                </div>
                {show_status
                    .then(|| {
                        view! {
                            <span class=format!(
                                "rounded-full px-2.5 py-0.5 text-xs font-medium {}",
                                status_class(status),
                            )>{status.label()}</span>
                        }
                    })}
            </div>
            <p class="mt-3 flex-1 text-sm text-gray-700">{book.description.clone()}</p>
            <div class="mt-4 flex items-center justify-between text-sm">
                <span class="text-lg font-bold text-indigo-700">{format!("${:.2}", book.price)}</span>
                <span class="text-gray-500">{stock}</span>
            </div>
            <div class="mt-1 flex justify-between text-xs text-gray-500">
                <span>{seller}</span>
                <span>{sold}</span>
            </div>
            {show_sales
                .then(|| {
                    view! {
                        <div class="mt-3 h-1.5 w-full rounded-full bg-gray-200">
                            <div class="h-1.5 rounded-full bg-indigo-600" style=sold_width></div>
                        </div>
                    }
                })}
            {children.map(|children| view! { <div class="mt-4">{children()}</div> })}
        </div>
    }
}
