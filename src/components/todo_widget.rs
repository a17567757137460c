//! Todo Widget Component
//!
//! Local task list persisted to browser storage.

use leptos::prelude::*;

use crate::models::TodoRecord;
use crate::storage::LocalStorage;
use crate::todo::TodoList;

#[component]
pub fn TodoWidget(#[prop(into)] storage_key: String) -> impl IntoView {
    let todos = RwSignal::new(TodoList::load(LocalStorage, storage_key));
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        let now_ms = js_sys::Date::now() as u64;
        let added = todos.try_update(|list| list.add(&text, now_ms)).flatten();
        if added.is_some() {
            set_new_text.set(String::new());
        }
    };

    let summary = move || {
        todos.with(|list| format!("{} of {} tasks remaining", list.remaining(), list.len()))
    };

    view! {
        <section class="todo-widget">
            <h2>"My Tasks"</h2>

            <form class="todo-add-form" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="Add a new task..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <Show
                when=move || !todos.with(|list| list.is_empty())
                fallback=|| view! { <p class="todo-empty">"No tasks yet. Add one above!"</p> }
            >
                <ul class="todo-list">
                    <For
                        each=move || todos.with(|list| list.items().to_vec())
                        key=|todo| (todo.id, todo.completed)
                        children=move |todo: TodoRecord| {
                            let id = todo.id;
                            view! {
                                <li class=if todo.completed { "todo-row completed" } else { "todo-row" }>
                                    <input
                                        type="checkbox"
                                        checked=todo.completed
                                        on:change=move |_| { todos.update(|list| { list.toggle(id); }); }
                                    />
                                    <span
                                        class="todo-text"
                                        style=if todo.completed { "text-decoration: line-through;" } else { "" }
                                    >
                                        {todo.text}
                                    </span>
                                    {todo.completed.then(|| view! { <span class="todo-chip">"Completed"</span> })}
                                    <button
                                        class="delete-btn"
                                        title="Delete"
                                        on:click=move |_| { todos.update(|list| { list.remove(id); }); }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <p class="todo-summary">{summary}</p>
        </section>
    }
}
