use crate::components::TextField;
use crate::features::flow::FlowUi;
use bookstall_client::forms::BookForm;
use leptos::prelude::*;

/// Field signals of a listing form.
#[derive(Clone, Copy)]
pub struct BookFormState {
    title: RwSignal<String>,
    author: RwSignal<String>,
    description: RwSignal<String>,
    price: RwSignal<String>,
    quantity: RwSignal<String>,
}

impl BookFormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            author: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
        }
    }

    pub fn snapshot(&self) -> BookForm {
        BookForm {
            title: self.title.get_untracked(),
            author: self.author.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            quantity: self.quantity.get_untracked(),
        }
    }

    pub fn clear(&self) {
        let mut form = self.snapshot();
        form.clear();
        let _ = self.title.try_set(form.title);
        let _ = self.author.try_set(form.author);
        let _ = self.description.try_set(form.description);
        let _ = self.price.try_set(form.price);
        let _ = self.quantity.try_set(form.quantity);
    }
}

#[component]
pub fn BookFormFields(state: BookFormState, ui: FlowUi) -> impl IntoView {
    view! {
        <TextField id="title" label="Title" value=state.title error=ui.error_for("title") />
        <TextField id="author" label="Author" value=state.author error=ui.error_for("author") />
        <TextField
            id="description"
            label="Description"
            value=state.description
            error=ui.error_for("description")
            multiline=true
        />
        <div class="grid grid-cols-2 gap-4">
            <TextField
                id="price"
                label="Price ($)"
                value=state.price
                error=ui.error_for("price")
                input_type="number"
            />
            <TextField
                id="quantity"
                label="Quantity"
                value=state.quantity
                error=ui.error_for("quantity")
                input_type="number"
            />
        </div>
    }
}
