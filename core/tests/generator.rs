use queryquill_core::generator::{clamp_count, QUESTION_COUNT_MAX};
use queryquill_core::{
    generate, questions_for, select_questions, Difficulty, DifficultyFilter, GenerateError,
    GenerateRequest, QuestionType, QuizSession, Section, QUESTION_BANK,
};

fn request(question_type: QuestionType, difficulty: DifficultyFilter, count: usize, text: &str) -> GenerateRequest {
    GenerateRequest {
        question_type,
        difficulty,
        count,
        source_text: text.to_string(),
        has_file: false,
    }
}

#[test]
fn shipped_bank_has_exactly_one_hard_mcq() {
    let hard = questions_for(QuestionType::Mcq)
        .iter()
        .filter(|question| question.difficulty == Difficulty::Hard)
        .count();
    assert_eq!(hard, 1);
}

#[test]
fn single_hard_mcq_is_repeated_to_fill_the_count() {
    let request = request(QuestionType::Mcq, DifficultyFilter::Only(Difficulty::Hard), 5, "x");
    let set = generate(&request, QUESTION_BANK).expect("generation succeeds");
    assert_eq!(set.len(), 5);
    let first = &set.questions[0];
    assert!(first.text.contains("QuickSort"));
    for (index, question) in set.questions.iter().enumerate() {
        assert_eq!(question.number, index + 1);
        assert_eq!(question.text, first.text);
        assert_eq!(question.difficulty, Difficulty::Hard);
    }
}

#[test]
fn padding_repeats_the_filtered_prefix_in_order() {
    let medium = select_questions(
        QUESTION_BANK,
        QuestionType::ShortAnswer,
        DifficultyFilter::Only(Difficulty::Medium),
        5,
    );
    let texts: Vec<&str> = medium.iter().map(|question| question.text).collect();
    let bucket: Vec<&str> = questions_for(QuestionType::ShortAnswer)
        .iter()
        .filter(|question| question.difficulty == Difficulty::Medium)
        .map(|question| question.text)
        .collect();
    assert_eq!(bucket.len(), 2);
    assert_eq!(texts, vec![bucket[0], bucket[1], bucket[0], bucket[1], bucket[0]]);
}

#[test]
fn all_filter_truncates_in_bank_order() {
    let picked = select_questions(QUESTION_BANK, QuestionType::LongAnswer, DifficultyFilter::All, 3);
    let bank: Vec<_> = questions_for(QuestionType::LongAnswer)[..3].to_vec();
    assert_eq!(picked, bank);
}

#[test]
fn requesting_more_than_the_bucket_doubles_it() {
    let picked = select_questions(QUESTION_BANK, QuestionType::Mcq, DifficultyFilter::All, 10);
    let bank = questions_for(QuestionType::Mcq);
    assert_eq!(picked.len(), 10);
    assert_eq!(&picked[..5], bank);
    assert_eq!(&picked[5..], bank);
}

#[test]
fn empty_bucket_yields_no_questions() {
    let picked = select_questions(&[], QuestionType::Mcq, DifficultyFilter::All, 4);
    assert!(picked.is_empty());
}

#[test]
fn mcq_options_are_lettered_in_order() {
    let request = request(QuestionType::Mcq, DifficultyFilter::Only(Difficulty::Easy), 1, "notes");
    let set = generate(&request, QUESTION_BANK).unwrap();
    let question = &set.questions[0];
    let letters: Vec<char> = question.options.iter().map(|(letter, _)| *letter).collect();
    assert_eq!(letters, vec!['A', 'B', 'C', 'D']);
    let bank_options = questions_for(QuestionType::Mcq)[0].options.unwrap();
    let texts: Vec<&str> = question.options.iter().map(|(_, text)| *text).collect();
    assert_eq!(texts, bank_options.to_vec());
    assert_eq!(question.heading(), "Question 1");
    assert_eq!(question.difficulty_class(), "badge-easy");
}

#[test]
fn written_answers_have_no_options() {
    for question_type in [QuestionType::ShortAnswer, QuestionType::LongAnswer] {
        let set = generate(&request(question_type, DifficultyFilter::All, 5, "notes"), QUESTION_BANK).unwrap();
        assert!(set.questions.iter().all(|question| question.options.is_empty()));
    }
}

#[test]
fn blank_text_without_file_is_rejected() {
    for text in ["", "   ", "\n\t"] {
        let request = request(QuestionType::Mcq, DifficultyFilter::All, 5, text);
        assert_eq!(generate(&request, QUESTION_BANK), Err(GenerateError::MissingInput));
    }
}

#[test]
fn attached_file_allows_blank_text() {
    let mut request = request(QuestionType::Mcq, DifficultyFilter::All, 2, "");
    request.has_file = true;
    assert_eq!(generate(&request, QUESTION_BANK).map(|set| set.len()), Ok(2));
}

#[test]
fn rejected_generation_leaves_previous_results_untouched() {
    let mut session = QuizSession::new();
    session.source_text = "cells and organelles".to_string();
    let started = session.start_generation().expect("valid request");
    session.finish_generation(&started, QUESTION_BANK);
    let before_results = session.results.clone();
    let before_section = session.navigator.active();
    assert!(before_results.is_some());
    assert_eq!(before_section, Section::Results);

    session.source_text.clear();
    assert_eq!(session.start_generation(), Err(GenerateError::MissingInput));
    assert_eq!(session.results, before_results);
    assert_eq!(session.navigator.active(), before_section);
    assert!(!session.loading);
    let notice = session.notices.current().expect("error notice");
    assert_eq!(notice.message, "Please upload a file or enter some text!");
}

#[test]
fn finished_generation_shows_results_with_notice() {
    let mut session = QuizSession::new();
    session.question_type = QuestionType::ShortAnswer;
    session.set_count(3);
    session.source_text = "text".to_string();
    let started = session.start_generation().unwrap();
    assert!(session.loading);
    session.question_type = QuestionType::LongAnswer;
    let outcome = session.finish_generation(&started, QUESTION_BANK);
    assert_eq!(outcome.map(|outcome| outcome.scroll_to_top), Some(true));
    assert!(!session.loading);
    let results = session.results.as_ref().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results
        .questions
        .iter()
        .all(|question| question.question_type == QuestionType::ShortAnswer));
    assert_eq!(
        session.notices.current().map(|notice| notice.message.as_str()),
        Some("Questions generated successfully!")
    );
}

#[test]
fn count_is_clamped_to_slider_range() {
    assert_eq!(clamp_count(0), 1);
    assert_eq!(clamp_count(500), QUESTION_COUNT_MAX);
    assert_eq!(clamp_count(7), 7);
}

#[test]
fn filters_and_types_parse_their_labels() {
    assert_eq!(DifficultyFilter::parse("All"), Some(DifficultyFilter::All));
    assert_eq!(DifficultyFilter::parse("Hard"), Some(DifficultyFilter::Only(Difficulty::Hard)));
    assert_eq!(QuestionType::parse("Short Answer"), Some(QuestionType::ShortAnswer));
    assert_eq!(QuestionType::parse("Essay"), None);
}
