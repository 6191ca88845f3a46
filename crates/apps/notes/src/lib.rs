//! Notes desktop app: a newest-first note list with an editor, AI writing helpers, and
//! debounced persistence under the `os_notes` key.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assist;
pub mod model;
pub mod persistence;

use std::rc::Rc;

use chrono::{DateTime, Local, Utc};
use desktop_app_contract::AppServices;
use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use platform_host::{next_monotonic_timestamp_ms, unix_time_ms_now, PrefsStore};
use system_ui::prelude::*;

pub use assist::AssistKind;
pub use model::{Note, NotesBook, NEW_NOTE_TITLE};
pub use persistence::{
    load_notes, save_notes, NotesWriter, WriteDecision, WritePolicy, NOTES_WRITE_POLICY,
};

fn now_utc() -> DateTime<Utc> {
    i64::try_from(unix_time_ms_now())
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or_default()
}

fn list_date_label(note: &Note) -> String {
    note.last_modified
        .with_timezone(&Local)
        .format("%Y-%m-%d")
        .to_string()
}

fn edited_label(note: &Note) -> String {
    format!(
        "Last edited: {}",
        note.last_modified.with_timezone(&Local).format("%H:%M:%S")
    )
}

fn persist_notes(store: StoredValue<Rc<dyn PrefsStore>>, book: RwSignal<NotesBook>) {
    let (Some(store), Some(snapshot)) = (
        store.try_get_value(),
        book.try_with_untracked(|book| book.notes().to_vec()),
    ) else {
        return;
    };
    spawn_local(async move {
        if let Err(err) = save_notes(store.as_ref(), &snapshot).await {
            logging::warn!("persist notes failed: {err}");
        }
    });
}

fn record(writer: StoredValue<NotesWriter>, op: fn(&mut NotesWriter) -> WriteDecision) -> WriteDecision {
    let mut decision = WriteDecision::WriteNow;
    writer.update_value(|writer| decision = op(writer));
    decision
}

fn alert_ai_error() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("AI Error");
    }
}

#[component]
/// Notes app window contents.
pub fn NotesApp(
    /// Runtime services; storage and the assistant client are used here.
    services: AppServices,
) -> impl IntoView {
    let store = store_value(services.storage.store());
    let assistant = store_value(services.assistant.clone());
    let book = create_rw_signal(NotesBook::from_stored(None, now_utc()));
    let hydrated = create_rw_signal(false);
    let processing = create_rw_signal(false);
    let status = create_rw_signal::<Option<String>>(None);
    let writer = store_value(NotesWriter::new(NOTES_WRITE_POLICY));
    let write_timer = store_value::<Option<TimeoutHandle>>(None);

    spawn_local(async move {
        let Some(prefs) = store.try_get_value() else {
            return;
        };
        match load_notes(prefs.as_ref()).await {
            Ok(stored) => {
                if book
                    .try_set(NotesBook::from_stored(stored, now_utc()))
                    .is_none()
                {
                    hydrated.try_set(true);
                }
            }
            // Stay unhydrated so edits never overwrite the unreadable collection.
            Err(err) => {
                logging::warn!("load notes failed: {err}");
                status.try_set(Some("Saved notes could not be read".to_string()));
            }
        }
    });

    let cancel_timer = move || {
        if let Some(handle) = write_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    let apply_decision = move |decision: WriteDecision| {
        if !hydrated.get_untracked() {
            return;
        }
        cancel_timer();
        match decision {
            WriteDecision::WriteNow => persist_notes(store, book),
            WriteDecision::Schedule { delay_ms } => {
                let fire = move || {
                    write_timer.set_value(None);
                    let mut owed = false;
                    writer.update_value(|writer| owed = writer.flush());
                    if owed {
                        persist_notes(store, book);
                    }
                };
                match set_timeout_with_handle(
                    fire,
                    std::time::Duration::from_millis(u64::from(delay_ms)),
                ) {
                    Ok(handle) => write_timer.set_value(Some(handle)),
                    Err(err) => {
                        logging::warn!("notes write timer failed: {err:?}");
                        persist_notes(store, book);
                    }
                }
            }
        }
    };

    on_cleanup(move || {
        cancel_timer();
        let owed = writer
            .try_update_value(NotesWriter::flush)
            .unwrap_or(false);
        if owed {
            persist_notes(store, book);
        }
    });

    let active_id = move || book.with_untracked(|book| book.active_id().map(str::to_string));

    let create_note = move || {
        book.update(|book| book.create(next_monotonic_timestamp_ms().to_string(), now_utc()));
        apply_decision(record(writer, NotesWriter::record_structural));
    };

    let delete_active = move || {
        let Some(id) = active_id() else {
            return;
        };
        book.update(|book| {
            book.delete(&id);
        });
        apply_decision(record(writer, NotesWriter::record_structural));
    };

    let edit_title = move |title: String| {
        let Some(id) = active_id() else {
            return;
        };
        book.update(|book| {
            book.set_title(&id, title, now_utc());
        });
        apply_decision(record(writer, NotesWriter::record_edit));
    };

    let edit_content = move |content: String| {
        let Some(id) = active_id() else {
            return;
        };
        book.update(|book| {
            book.set_content(&id, content, now_utc());
        });
        status.set(None);
        apply_decision(record(writer, NotesWriter::record_edit));
    };

    let run_assist = move |kind: AssistKind| {
        if processing.get_untracked() {
            return;
        }
        let Some((id, content)) = book.with_untracked(|book| {
            book.active()
                .map(|note| (note.id.clone(), note.content.clone()))
        }) else {
            return;
        };
        processing.set(true);
        status.set(None);
        let client = assistant.get_value();
        spawn_local(async move {
            match client.complete(assist::prompt(kind, &content)).await {
                Ok(raw) => {
                    if let Some(next) = assist::apply(kind, &content, &raw) {
                        let updated = book
                            .try_update(|book| book.set_content(&id, next, now_utc()))
                            .unwrap_or(false);
                        if updated {
                            apply_decision(record(writer, NotesWriter::record_edit));
                        }
                    }
                }
                Err(err) => {
                    logging::warn!("notes assist failed: {err}");
                    status.try_set(Some("AI Error".to_string()));
                    alert_ai_error();
                }
            }
            processing.try_set(false);
        });
    };

    let assistant_ready = Signal::derive(move || assistant.with_value(|client| client.is_configured()));
    let busy = Signal::derive(move || processing.get());
    let note_ids =
        move || book.with(|book| book.notes().iter().map(|note| note.id.clone()).collect::<Vec<_>>());
    let active_title = Signal::derive(move || {
        book.with(|book| book.active().map(|note| note.title.clone()).unwrap_or_default())
    });
    let active_content = Signal::derive(move || {
        book.with(|book| book.active().map(|note| note.content.clone()).unwrap_or_default())
    });

    view! {
        <AppShell layout_class="app-notes-shell">
            <div class="notes-layout" data-hydrated=move || hydrated.get().to_string()>
                <aside class="notes-sidebar">
                    <ToolBar aria_label="Notes list">
                        <Text role=TextRole::Label tone=TextTone::Secondary>"Notes"</Text>
                        <IconButton
                            icon=IconName::Add
                            aria_label="New note"
                            title="New note"
                            on_click=Callback::new(move |_| create_note())
                        />
                    </ToolBar>
                    <ListSurface aria_label="Notes">
                        <For each=note_ids key=|id| id.clone() let:id>
                            <NoteRow book id />
                        </For>
                    </ListSurface>
                </aside>

                <section class="notes-editor">
                    <Show
                        when=move || book.with(|book| book.active().is_some())
                        fallback=|| {
                            view! {
                                <EmptyState icon=IconName::Notes>"Select or create a note"</EmptyState>
                            }
                        }
                    >
                        <ToolBar aria_label="Note actions">
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {move || book.with(|book| book.active().map(edited_label).unwrap_or_default())}
                            </Text>
                            <Show when=move || assistant_ready.get()>
                                <Button
                                    variant=ButtonVariant::Accent
                                    size=ButtonSize::Sm
                                    leading_icon=IconName::Wand
                                    disabled=busy
                                    on_click=Callback::new(move |_| run_assist(AssistKind::Fix))
                                >
                                    {AssistKind::Fix.label()}
                                </Button>
                                <Button
                                    variant=ButtonVariant::Accent
                                    size=ButtonSize::Sm
                                    leading_icon=IconName::Wand
                                    disabled=busy
                                    on_click=Callback::new(move |_| run_assist(AssistKind::Continue))
                                >
                                    {AssistKind::Continue.label()}
                                </Button>
                            </Show>
                            <IconButton
                                icon=IconName::Delete
                                aria_label="Delete note"
                                title="Delete note"
                                on_click=Callback::new(move |_| delete_active())
                            />
                        </ToolBar>
                        <TextField
                            variant=FieldVariant::Inset
                            layout_class="notes-title"
                            placeholder="Title"
                            aria_label="Note title"
                            value=active_title
                            on_input=Callback::new(move |ev| edit_title(event_target_value(&ev)))
                        />
                        <TextArea
                            layout_class="notes-body"
                            placeholder="Start typing..."
                            aria_label="Note content"
                            value=active_content
                            on_input=Callback::new(move |ev| edit_content(event_target_value(&ev)))
                        />
                    </Show>
                </section>
            </div>

            <StatusBar>
                <StatusBarItem>
                    {move || book.with(|book| format!("{} notes", book.notes().len()))}
                </StatusBarItem>
                <StatusBarItem>
                    {move || {
                        if processing.get() {
                            "Thinking...".to_string()
                        } else {
                            status.get().unwrap_or_default()
                        }
                    }}
                </StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}

#[component]
fn NoteRow(book: RwSignal<NotesBook>, id: String) -> impl IntoView {
    let selected = {
        let id = id.clone();
        Signal::derive(move || book.with(|book| book.active_id() == Some(id.as_str())))
    };
    let summary = {
        let id = id.clone();
        move || {
            book.with(|book| {
                book.notes()
                    .iter()
                    .find(|note| note.id == id)
                    .map(|note| {
                        (
                            note.display_title().to_string(),
                            note.preview().to_string(),
                            list_date_label(note),
                        )
                    })
                    .unwrap_or_default()
            })
        }
    };

    view! {
        <Button
            layout_class="notes-list-row"
            variant=ButtonVariant::Quiet
            selected
            on_click=Callback::new(move |_| {
                book.update(|book| {
                    book.select(&id);
                });
            })
        >
            {move || {
                let (title, preview, date) = summary();
                view! {
                    <Text role=TextRole::Label>{title}</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{preview}</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{date}</Text>
                }
            }}
        </Button>
    }
}
