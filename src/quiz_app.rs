use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use queryquill_core::generator::{QUESTION_COUNT_MAX, QUESTION_COUNT_MIN};
use queryquill_core::sections::ShowOutcome;
use queryquill_core::theme::{load_theme, save_theme};
use queryquill_core::{
    AttachedFile, DifficultyFilter, GenerateRequest, IntakePlan, NoticePhase, QuestionType,
    QuizSession, RenderedQuestion, Section, Theme, QUESTION_BANK,
};

use crate::config;
use crate::file_intake;
use crate::local_store::{log_storage_error, LocalStore};

pub(crate) enum QuizAction {
    Show(Section),
    ToggleMenu,
    CloseMenu,
    SetType(QuestionType),
    SetDifficulty(DifficultyFilter),
    SetCount(usize),
    SetText(String),
    DragOver(bool),
    Attach(AttachedFile),
    FileText { name: String, text: String },
    Generate,
    FinishGeneration(u64),
    GenerateAgain,
    Export,
    BeginPrint,
    EndPrint,
    NoticeLeave(u64),
    NoticeRemove(u64),
}

/// Page state: the session plus the bookkeeping for fire-once timers.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct QuizState {
    session: QuizSession,
    pending: Option<(u64, GenerateRequest)>,
    next_ticket: u64,
    scroll_requests: u32,
}

impl Reducible for QuizState {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: QuizAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

impl QuizState {
    fn apply(&mut self, action: QuizAction) {
        match action {
            QuizAction::Show(section) => {
                let outcome = self.session.show(section);
                self.note_outcome(outcome);
            }
            QuizAction::ToggleMenu => self.session.navigator.toggle_menu(),
            QuizAction::CloseMenu => self.session.navigator.set_menu_open(false),
            QuizAction::SetType(question_type) => self.session.question_type = question_type,
            QuizAction::SetDifficulty(filter) => self.session.difficulty = filter,
            QuizAction::SetCount(count) => self.session.set_count(count),
            QuizAction::SetText(text) => self.session.source_text = text,
            QuizAction::DragOver(active) => self.session.drag_over = active,
            QuizAction::Attach(file) => {
                self.session.attach_file(file);
            }
            QuizAction::FileText { name, text } => self.session.file_text_ready(&name, text),
            QuizAction::Generate => {
                // one simulated request at a time
                if self.pending.is_some() {
                    return;
                }
                if let Ok(request) = self.session.start_generation() {
                    self.next_ticket = self.next_ticket.wrapping_add(1);
                    self.pending = Some((self.next_ticket, request));
                }
            }
            QuizAction::FinishGeneration(ticket) => {
                let Some((pending, request)) = self.pending.take() else {
                    return;
                };
                if pending != ticket {
                    self.pending = Some((pending, request));
                    return;
                }
                if let Some(outcome) = self.session.finish_generation(&request, QUESTION_BANK) {
                    self.note_outcome(outcome);
                }
            }
            QuizAction::GenerateAgain => {
                let outcome = self.session.generate_again();
                self.note_outcome(outcome);
            }
            QuizAction::Export => self.session.begin_export(),
            QuizAction::BeginPrint => self.session.navigator.begin_print(),
            QuizAction::EndPrint => self.session.navigator.end_print(),
            QuizAction::NoticeLeave(id) => self.session.notices.begin_leave(id),
            QuizAction::NoticeRemove(id) => self.session.notices.remove(id),
        }
    }

    fn note_outcome(&mut self, outcome: ShowOutcome) {
        if outcome.scroll_to_top {
            self.scroll_requests = self.scroll_requests.wrapping_add(1);
        }
    }

    fn pending_ticket(&self) -> Option<u64> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }
}

#[function_component(QuizApp)]
pub(crate) fn quiz_app() -> Html {
    let timing = config::timing();
    let state = use_reducer(QuizState::default);
    let theme = use_state(|| load_theme(&LocalStore::open()));
    let file_input = use_node_ref();

    {
        use_effect_with(*theme, |theme| {
            if let Some(body) = body() {
                let _ = body.set_attribute("data-theme", theme.as_str());
            }
            || ()
        });
    }
    {
        let menu_open = state.session.navigator.menu_open();
        use_effect_with(menu_open, |open| {
            if let Some(body) = body() {
                let _ = body.class_list().toggle_with_force("menu-open", *open);
            }
            || ()
        });
    }
    {
        use_effect_with(state.scroll_requests, |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        });
    }
    {
        let dispatcher = state.dispatcher();
        let notice_key = state
            .session
            .notices
            .current()
            .map(|notice| (notice.id, notice.phase));
        use_effect_with(notice_key, move |key| {
            if let Some((id, phase)) = *key {
                let (delay, action) = match phase {
                    NoticePhase::Visible => (timing.notice_visible_ms, QuizAction::NoticeLeave(id)),
                    NoticePhase::Leaving => (timing.notice_fade_ms, QuizAction::NoticeRemove(id)),
                };
                Timeout::new(delay, move || dispatcher.dispatch(action)).forget();
            }
            || ()
        });
    }
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.pending_ticket(), move |ticket| {
            if let Some(ticket) = *ticket {
                Timeout::new(timing.generate_delay_ms, move || {
                    dispatcher.dispatch(QuizAction::FinishGeneration(ticket));
                })
                .forget();
            }
            || ()
        });
    }
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listeners = web_sys::window().map(|window| {
                let before = dispatcher.clone();
                let after = dispatcher.clone();
                [
                    EventListener::new(&window, "beforeprint", move |_| {
                        before.dispatch(QuizAction::BeginPrint);
                    }),
                    EventListener::new(&window, "afterprint", move |_| {
                        after.dispatch(QuizAction::EndPrint);
                    }),
                ]
            });
            move || drop(listeners)
        });
    }

    let session = &state.session;
    let navigator = &session.navigator;
    let printing = navigator.printing();

    let show = |section: Section| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(QuizAction::Show(section)))
    };
    let nav_links = |mobile: bool| -> Html {
        Section::ALL
            .into_iter()
            .map(|section| {
                let class = classes!(
                    if mobile { "mobile-link" } else { "nav-link" },
                    navigator.trigger_active(section).then_some("active")
                );
                html! {
                    <button type="button" {class} data-section-target={section.id()} onclick={show(section)}>
                        {section_label(section)}
                    </button>
                }
            })
            .collect()
    };

    let on_hamburger = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(QuizAction::ToggleMenu))
    };
    let on_menu_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(QuizAction::CloseMenu))
    };
    let on_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            if let Err(err) = save_theme(&LocalStore::open(), next) {
                log_storage_error("theme not saved", &err);
            }
            theme.set(next);
        })
    };
    let on_type = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(question_type) = QuestionType::parse(&select.value()) {
                dispatcher.dispatch(QuizAction::SetType(question_type));
            }
        })
    };
    let on_difficulty = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(filter) = DifficultyFilter::parse(&select.value()) {
                dispatcher.dispatch(QuizAction::SetDifficulty(filter));
            }
        })
    };
    let on_count = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Ok(count) = input.value().parse::<usize>() {
                dispatcher.dispatch(QuizAction::SetCount(count));
            }
        })
    };
    let on_text = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            dispatcher.dispatch(QuizAction::SetText(area.value()));
        })
    };
    let on_drag_over = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            dispatcher.dispatch(QuizAction::DragOver(true));
        })
    };
    let on_drag_leave = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            dispatcher.dispatch(QuizAction::DragOver(false));
        })
    };
    let on_drop = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            let file = event
                .data_transfer()
                .and_then(|transfer| file_intake::first_file(transfer.files()));
            match file {
                Some(file) => take_file(file, dispatcher.clone()),
                None => dispatcher.dispatch(QuizAction::DragOver(false)),
            }
        })
    };
    let on_browse = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_file_picked = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Some(file) = file_intake::first_file(input.files()) {
                take_file(file, dispatcher.clone());
            }
        })
    };
    let on_generate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(QuizAction::Generate))
    };
    let on_generate_again = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(QuizAction::GenerateAgain))
    };
    let on_export = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(QuizAction::Export);
            Timeout::new(timing.export_delay_ms, || {
                if let Some(window) = web_sys::window() {
                    let _ = window.print();
                }
            })
            .forget();
        })
    };

    let section_class = |section: Section| {
        classes!(
            "section-panel",
            if navigator.is_active(section) { "active" } else { "hidden" }
        )
    };
    let print_hide = printing.then_some("print-hide");

    let type_options: Html = QuestionType::ALL
        .into_iter()
        .map(|question_type| {
            html! {
                <option value={question_type.label()} selected={question_type == session.question_type}>
                    {question_type.label()}
                </option>
            }
        })
        .collect();
    let difficulty_options: Html = DifficultyFilter::CHOICES
        .into_iter()
        .map(|filter| {
            html! {
                <option value={filter.label()} selected={filter == session.difficulty}>
                    {filter.label()}
                </option>
            }
        })
        .collect();
    let attached_label = session.attached.as_ref().map(|file| {
        html! { <p class="file-name">{format!("Selected: {}", file.name)}</p> }
    });
    let results: Html = session
        .results
        .as_ref()
        .map(|set| set.questions.iter().map(question_card).collect())
        .unwrap_or_default();
    let notice = session.notices.current().map(|notice| {
        let class = classes!(
            "toast",
            notice.kind.class(),
            (notice.phase == NoticePhase::Visible).then_some("show")
        );
        html! { <div {class} role="status">{notice.message.clone()}</div> }
    });

    html! {
        <div class={classes!("app", printing.then_some("print-mode"))}>
            <header class={classes!("app-topbar", print_hide)}>
                <button type="button" class="brand" onclick={show(Section::Home)}>{"QueryQuill"}</button>
                <nav class="nav-links">{nav_links(false)}</nav>
                <button type="button" id="themeToggle" class="btn btn-icon" data-theme-toggle="" onclick={on_theme.clone()}>
                    {if *theme == Theme::Dark { "Light mode" } else { "Dark mode" }}
                </button>
                <button
                    type="button"
                    id="hamburger"
                    class={classes!("hamburger", navigator.menu_open().then_some("open"))}
                    aria-expanded={navigator.menu_open().to_string()}
                    onclick={on_hamburger}
                >
                    <span></span><span></span><span></span>
                </button>
            </header>
            <aside id="mobileMenu" class={classes!("app-sidebar", "mobile-menu", navigator.menu_open().then_some("open"), print_hide)}>
                <button type="button" id="mobileMenuClose" class="btn btn-icon" onclick={on_menu_close}>{"Close"}</button>
                {nav_links(true)}
                <button type="button" class="mobile-link" data-theme-toggle="" onclick={on_theme}>{"Toggle theme"}</button>
            </aside>
            <main class="app-main">
                <section id={Section::Home.id()} class={section_class(Section::Home)}>
                    <div class="hero">
                        <h1>{"Turn your notes into practice questions"}</h1>
                        <p class="text-muted">{"Upload study material and QueryQuill drafts MCQ, short and long answer questions."}</p>
                        <button type="button" class="btn btn-primary" data-section-target={Section::Upload.id()} onclick={show(Section::Upload)}>
                            {"Get Started"}
                        </button>
                    </div>
                </section>
                <section id={Section::Upload.id()} class={section_class(Section::Upload)}>
                    <div
                        id="dropZone"
                        class={classes!("drop-zone", session.drag_over.then_some("drag-over"))}
                        ondragover={on_drag_over}
                        ondragleave={on_drag_leave}
                        ondrop={on_drop}
                        onclick={on_browse}
                    >
                        <p>{"Drag & drop your file here"}</p>
                        <button type="button" class="btn btn-secondary">{"Browse Files"}</button>
                        {attached_label}
                    </div>
                    <input
                        id="fileInput"
                        type="file"
                        accept=".txt,.pdf,.doc,.docx"
                        hidden={true}
                        ref={file_input}
                        onchange={on_file_picked}
                    />
                    <textarea
                        id="textInput"
                        class="form-input"
                        rows="8"
                        placeholder={session.placeholder.clone()}
                        value={session.source_text.clone()}
                        oninput={on_text}
                    />
                    <div class="controls">
                        <label class="form-label">
                            {"Question Type"}
                            <select id="questionType" class="form-input" onchange={on_type}>{type_options}</select>
                        </label>
                        <label class="form-label">
                            {"Difficulty"}
                            <select id="difficulty" class="form-input" onchange={on_difficulty}>{difficulty_options}</select>
                        </label>
                        <label class="form-label">
                            {"Number of Questions"}
                            <input
                                id="questionCount"
                                type="range"
                                min={QUESTION_COUNT_MIN.to_string()}
                                max={QUESTION_COUNT_MAX.to_string()}
                                value={session.count.to_string()}
                                oninput={on_count}
                            />
                            <span id="sliderValue">{session.count.to_string()}</span>
                        </label>
                    </div>
                    <button type="button" class="btn btn-primary" onclick={on_generate}>{"Generate Questions"}</button>
                    <div id="loader" class={classes!("loader", session.loading.then_some("active"))}>
                        <div class="spinner"></div>
                        <p>{"Generating questions..."}</p>
                    </div>
                </section>
                <section id={Section::Results.id()} class={section_class(Section::Results)}>
                    <div class={classes!("results-header", print_hide)}>
                        <h2>{"Generated Questions"}</h2>
                        <button type="button" class="btn btn-outline" onclick={on_export}>{"Export PDF"}</button>
                        <button type="button" class="btn btn-secondary" onclick={on_generate_again}>{"Generate Again"}</button>
                    </div>
                    <div id="questionsGrid" class="questions-grid">{results}</div>
                </section>
            </main>
            <footer class={classes!("app-footer", print_hide)}>
                <p class="text-muted">{"QueryQuill demo. Questions are simulated."}</p>
            </footer>
            {notice}
        </div>
    }
}

fn section_label(section: Section) -> &'static str {
    match section {
        Section::Home => "Home",
        Section::Upload => "Upload",
        Section::Results => "Results",
    }
}

fn question_card(question: &RenderedQuestion) -> Html {
    let options = (!question.options.is_empty()).then(|| {
        html! {
            <ul class="question-options">
                { for question.options.iter().map(|(letter, text)| html! {
                    <li class="option">
                        <span class="option-letter">{letter.to_string()}</span>
                        {*text}
                    </li>
                }) }
            </ul>
        }
    });
    html! {
        <div class="question-card">
            <div class="question-header">
                <span class="question-number">{question.heading()}</span>
                <div class="question-badges">
                    <span class="badge badge-type">{question.question_type.label()}</span>
                    <span class={classes!("badge", "badge-difficulty", question.difficulty_class())}>
                        {question.difficulty.label()}
                    </span>
                </div>
            </div>
            <div class="question-text">{question.text}</div>
            {options}
        </div>
    }
}

/// Attaches a dropped or picked file and, for plain text, reads it.
fn take_file(file: File, dispatcher: UseReducerDispatcher<QuizState>) {
    let attached = file_intake::describe(&file);
    let name = attached.name.clone();
    let plan = attached.plan();
    dispatcher.dispatch(QuizAction::Attach(attached));
    if plan != IntakePlan::ReadText {
        return;
    }
    spawn_local(async move {
        match file_intake::read_text(file).await {
            Ok(text) => dispatcher.dispatch(QuizAction::FileText { name, text }),
            Err(err) => gloo::console::warn!("file intake: read failed", err),
        }
    });
}

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}
