use queryquill_core::intake::{plan_intake, ready_placeholder, IntakePlan};
use queryquill_core::{AttachedFile, NoticeKind, QuizSession, Section, SectionNavigator};

fn active_count(navigator: &SectionNavigator) -> usize {
    Section::ALL
        .into_iter()
        .filter(|section| navigator.is_active(*section))
        .count()
}

#[test]
fn exactly_one_section_is_active_across_navigation() {
    let mut navigator = SectionNavigator::default();
    assert_eq!(active_count(&navigator), 1);
    assert!(navigator.is_active(Section::Home));

    navigator.show(Section::Results);
    assert_eq!(active_count(&navigator), 1);
    assert!(navigator.is_active(Section::Results));

    navigator.show(Section::Upload);
    assert_eq!(active_count(&navigator), 1);
    assert!(navigator.is_active(Section::Upload));
    assert!(navigator.is_hidden(Section::Results));
    assert!(navigator.trigger_active(Section::Upload));
    assert!(!navigator.trigger_active(Section::Home));
}

#[test]
fn show_is_idempotent_and_closes_menu() {
    let mut navigator = SectionNavigator::default();
    navigator.toggle_menu();
    assert!(navigator.menu_open());
    let outcome = navigator.show(Section::Home);
    assert!(outcome.scroll_to_top);
    assert!(!navigator.menu_open());
    let snapshot = navigator.clone();
    navigator.show(Section::Home);
    assert_eq!(navigator, snapshot);
}

#[test]
fn print_mode_shows_results_then_restores() {
    let mut navigator = SectionNavigator::new(Section::Upload);
    navigator.begin_print();
    assert!(navigator.printing());
    assert!(navigator.is_active(Section::Results));
    assert_eq!(active_count(&navigator), 1);
    navigator.begin_print();
    navigator.end_print();
    assert!(!navigator.printing());
    assert!(navigator.is_active(Section::Upload));
}

#[test]
fn section_ids_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_id(section.id()), Some(section));
    }
    assert_eq!(Section::from_id("settings"), None);
}

#[test]
fn only_plain_text_is_read() {
    assert_eq!(plan_intake("text/plain"), IntakePlan::ReadText);
    assert_eq!(plan_intake("application/pdf"), IntakePlan::Unsupported);
    assert_eq!(plan_intake(""), IntakePlan::Unsupported);
}

#[test]
fn unsupported_file_counts_as_attached_and_warns() {
    let mut session = QuizSession::new();
    session.drag_over = true;
    let plan = session.attach_file(AttachedFile::new("notes.pdf", "application/pdf"));
    assert_eq!(plan, IntakePlan::Unsupported);
    assert!(!session.drag_over);
    assert!(session.request().has_file);
    let notice = session.notices.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(notice.message.contains("requires backend integration"));
    assert!(session.start_generation().is_ok());
}

#[test]
fn text_file_updates_placeholder_once_read() {
    let mut session = QuizSession::new();
    let plan = session.attach_file(AttachedFile::new("notes.txt", "text/plain"));
    assert_eq!(plan, IntakePlan::ReadText);
    assert!(session.notices.current().is_none());
    session.file_text_ready("notes.txt", "mitochondria".to_string());
    assert_eq!(session.placeholder, ready_placeholder("notes.txt"));
    assert_eq!(session.placeholder, "File \"notes.txt\" ready. Paste or type your content...");
    assert_eq!(
        session.attached.as_ref().and_then(|file| file.text.as_deref()),
        Some("mitochondria")
    );
}

#[test]
fn generate_again_returns_to_upload() {
    let mut session = QuizSession::new();
    session.show(Section::Results);
    session.generate_again();
    assert!(session.navigator.is_active(Section::Upload));
}
