use crate::board::{BoardCell, BoardState, fetch_list, select_tab, submit};
use crate::display::{format_timestamp, initials, record_label};
use crate::types::{BugType, ChatType, Priority, Record, RecordKind};
use crate::ui::AppContext;
use dioxus::prelude::*;

impl BoardCell for Signal<BoardState> {
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }
}

fn content_label(tab: RecordKind) -> &'static str {
    match tab {
        RecordKind::Message => "留言内容",
        RecordKind::Bug => "问题描述",
        RecordKind::Chat => "聊天内容",
    }
}

fn content_placeholder(tab: RecordKind) -> &'static str {
    match tab {
        RecordKind::Message => "写下你想说的话...",
        RecordKind::Bug => "详细描述你遇到的问题...",
        RecordKind::Chat => "开始你的讨论...",
    }
}

fn submit_label(tab: RecordKind) -> &'static str {
    match tab {
        RecordKind::Message => "发送留言",
        RecordKind::Bug => "提交反馈",
        RecordKind::Chat => "发送消息",
    }
}

#[component]
pub fn MessageBoard() -> Element {
    let context = use_context::<AppContext>();
    let mut state = use_signal(BoardState::default);

    let mount_store = context.store.clone();
    use_hook(move || {
        spawn(async move {
            fetch_list(mount_store.as_ref(), &state).await;
        })
    });

    let tab_store = context.store.clone();
    let switch_tab = use_callback(move |tab: RecordKind| {
        let store = tab_store.clone();
        spawn(async move {
            select_tab(store.as_ref(), &state, tab).await;
        });
    });

    let submit_store = context.store.clone();
    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let store = submit_store.clone();
        spawn(async move {
            submit(store.as_ref(), &state).await;
        });
    };

    let (active_tab, form, loading, submitting, error, visible) = {
        let snapshot = state.read();
        let visible: Vec<Record> = snapshot.visible_records().cloned().collect();
        (
            snapshot.active_tab,
            snapshot.form.clone(),
            snapshot.loading,
            snapshot.submitting,
            snapshot.last_error.clone(),
            visible,
        )
    };

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "留言板" }

            div { class: "tab-list",
                for tab in RecordKind::ALL.iter().copied() {
                    button {
                        key: "{tab}",
                        class: if tab == active_tab { "tab-button active" } else { "tab-button" },
                        r#type: "button",
                        onclick: move |_| switch_tab.call(tab),
                        "{tab.label()}"
                    }
                }
            }

            div { class: "card",
                form { class: "message-form", onsubmit: on_submit,
                    div { class: "input-group",
                        div { class: "form-field",
                            label { "名字" }
                            input {
                                r#type: "text",
                                placeholder: "请输入你的名字",
                                required: true,
                                value: form.name.clone(),
                                oninput: move |ev| state.with_mut(|s| s.form.name = ev.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "邮箱 (选填)" }
                            input {
                                r#type: "email",
                                placeholder: "example@email.com",
                                value: form.email.clone(),
                                oninput: move |ev| state.with_mut(|s| s.form.email = ev.value()),
                            }
                        }
                    }

                    if active_tab == RecordKind::Bug {
                        div { class: "input-group",
                            div { class: "form-field",
                                label { "问题类型" }
                                select {
                                    value: form.bug_type.as_str(),
                                    onchange: move |ev| {
                                        if let Ok(choice) = ev.value().parse::<BugType>() {
                                            state.with_mut(|s| s.form.bug_type = choice);
                                        }
                                    },
                                    for choice in BugType::ALL.iter().copied() {
                                        option {
                                            key: "{choice}",
                                            value: choice.as_str(),
                                            selected: choice == form.bug_type,
                                            "{choice.label()}"
                                        }
                                    }
                                }
                            }
                            div { class: "form-field",
                                label { "优先级" }
                                select {
                                    value: form.priority.as_str(),
                                    onchange: move |ev| {
                                        if let Ok(choice) = ev.value().parse::<Priority>() {
                                            state.with_mut(|s| s.form.priority = choice);
                                        }
                                    },
                                    for choice in Priority::ALL.iter().copied() {
                                        option {
                                            key: "{choice}",
                                            value: choice.as_str(),
                                            selected: choice == form.priority,
                                            "{choice.label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if active_tab == RecordKind::Chat {
                        div { class: "form-field",
                            label { "聊天类型" }
                            select {
                                value: form.chat_type.as_str(),
                                onchange: move |ev| {
                                    if let Ok(choice) = ev.value().parse::<ChatType>() {
                                        state.with_mut(|s| s.form.chat_type = choice);
                                    }
                                },
                                for choice in ChatType::ALL.iter().copied() {
                                    option {
                                        key: "{choice}",
                                        value: choice.as_str(),
                                        selected: choice == form.chat_type,
                                        "{choice.label()}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { "{content_label(active_tab)}" }
                        textarea {
                            placeholder: content_placeholder(active_tab),
                            required: true,
                            value: form.content.clone(),
                            oninput: move |ev| state.with_mut(|s| s.form.content = ev.value()),
                        }
                    }

                    button {
                        class: "submit-button",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "spinner" }
                            "发送中..."
                        } else {
                            "{submit_label(active_tab)}"
                        }
                    }
                }
            }

            if let Some(message) = error {
                div { class: "board-error", role: "alert", "{message}" }
            }

            div { class: "message-list",
                if loading {
                    div { class: "loading-text", "加载中..." }
                } else {
                    for record in visible {
                        RecordCard { key: "{record.id}", record }
                    }
                }
            }
        }
    }
}

#[component]
fn RecordCard(record: Record) -> Element {
    let label = record_label(&record);
    let timestamp = format_timestamp(record.created_at);
    let avatar = initials(&record.name);

    rsx! {
        article { class: "card message-card",
            div { class: "message-header",
                div { class: "avatar", "{avatar}" }
                div { class: "message-info",
                    div { class: "message-title",
                        h4 { "{record.name}" }
                        if let Some(label) = label {
                            span {
                                class: label.tone.class(),
                                style: label
                                    .tone
                                    .color()
                                    .map(|color| format!("background: {color}"))
                                    .unwrap_or_default(),
                                "{label.text}"
                            }
                        }
                    }
                    time { "{timestamp}" }
                }
            }
            p { class: "message-content", "{record.content}" }
        }
    }
}
