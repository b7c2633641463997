use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5";

/// Labelled input bound to `value`, with the field's validation message
/// underneath when there is one.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let border = move || {
        if error.get().is_some() {
            "border-red-400"
        } else {
            "border-gray-300"
        }
    };

    let input = if multiline {
        view! {
            <textarea
                id=id
                rows="4"
                class=move || format!("{INPUT_CLASS} {}", border())
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                type=input_type
                autocomplete=autocomplete.unwrap_or("off")
                class=move || format!("{INPUT_CLASS} {}", border())
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-5">
            <label class="block mb-2 text-sm font-medium text-gray-900" for=id>
                {label}
            </label>
            {input}
            {move || {
                error.get().map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
            }}
        </div>
    }
}
