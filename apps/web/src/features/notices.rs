//! App-wide toast stack. Flows hand their notices here so a message raised
//! just before navigating is still shown on the next page.

use bookstall_client::Notice;
use leptos::prelude::*;

const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy)]
pub struct NoticeState {
    items: RwSignal<Vec<(u64, Notice)>>,
    next_id: RwSignal<u64>,
}

impl NoticeState {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn items(&self) -> Vec<(u64, Notice)> {
        self.items.get()
    }

    pub fn extend(&self, notices: Vec<Notice>) {
        if notices.is_empty() {
            return;
        }
        let mut id = self.next_id.get_untracked();
        self.items.update(|items| {
            for notice in notices {
                items.push((id, notice));
                id += 1;
            }
            let overflow = items.len().saturating_sub(MAX_VISIBLE);
            items.drain(..overflow);
        });
        self.next_id.set(id);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|(item, _)| *item != id));
    }
}

#[component]
pub fn NoticeProvider(children: Children) -> impl IntoView {
    provide_context(NoticeState::new());

    view! { {children()} }
}

pub fn use_notices() -> NoticeState {
    use_context::<NoticeState>().unwrap_or_else(NoticeState::new)
}
