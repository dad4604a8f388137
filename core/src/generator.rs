use std::fmt;

use crate::bank::{questions_in, BankEntry, Difficulty, Question, QuestionType};
use crate::error::GenerateError;

pub const GENERATE_DELAY_MS: u32 = 2_000;
pub const EXPORT_DELAY_MS: u32 = 500;

pub const QUESTION_COUNT_MIN: usize = 1;
pub const QUESTION_COUNT_MAX: usize = 20;
pub const QUESTION_COUNT_DEFAULT: usize = 5;

pub const GENERATED_NOTICE: &str = "Questions generated successfully!";
pub const EXPORT_NOTICE: &str = "Preparing PDF export...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub const CHOICES: [DifficultyFilter; 4] = [
        DifficultyFilter::All,
        DifficultyFilter::Only(Difficulty::Easy),
        DifficultyFilter::Only(Difficulty::Medium),
        DifficultyFilter::Only(Difficulty::Hard),
    ];

    pub fn label(self) -> &'static str {
        match self {
            DifficultyFilter::All => "All",
            DifficultyFilter::Only(difficulty) => difficulty.label(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        DifficultyFilter::CHOICES
            .into_iter()
            .find(|filter| filter.label() == value.trim())
    }

    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => wanted == difficulty,
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    pub question_type: QuestionType,
    pub difficulty: DifficultyFilter,
    pub count: usize,
    pub source_text: String,
    pub has_file: bool,
}

impl GenerateRequest {
    /// Rejects requests with neither source text nor an attached file.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.source_text.trim().is_empty() && !self.has_file {
            return Err(GenerateError::MissingInput);
        }
        Ok(())
    }
}

pub fn clamp_count(count: usize) -> usize {
    count.clamp(QUESTION_COUNT_MIN, QUESTION_COUNT_MAX)
}

/// Filters the bucket for `question_type`, truncates it to `count`, and
/// repeats its own prefix until `count` entries exist.
///
/// Asking for more questions than the bucket holds therefore yields
/// duplicates. An empty bucket yields an empty list.
pub fn select_questions(
    bank: &[BankEntry],
    question_type: QuestionType,
    filter: DifficultyFilter,
    count: usize,
) -> Vec<Question> {
    let mut questions: Vec<Question> = questions_in(bank, question_type)
        .iter()
        .filter(|question| filter.matches(question.difficulty))
        .copied()
        .collect();
    questions.truncate(count);
    if questions.is_empty() {
        return questions;
    }
    while questions.len() < count {
        let missing = count - questions.len();
        let take = missing.min(questions.len());
        questions.extend_from_within(..take);
    }
    questions
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedQuestion {
    pub number: usize,
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub text: &'static str,
    /// Lettered options; only ever filled for multiple choice.
    pub options: Vec<(char, &'static str)>,
}

impl RenderedQuestion {
    pub fn heading(&self) -> String {
        format!("Question {}", self.number)
    }

    pub fn difficulty_class(&self) -> String {
        format!("badge-{}", self.difficulty.css_suffix())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedQuestionSet {
    pub questions: Vec<RenderedQuestion>,
}

impl RenderedQuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

pub fn render_questions(question_type: QuestionType, questions: &[Question]) -> RenderedQuestionSet {
    let questions = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let options = match (question_type, question.options) {
                (QuestionType::Mcq, Some(options)) => ('A'..).zip(options).collect(),
                _ => Vec::new(),
            };
            RenderedQuestion {
                number: index + 1,
                question_type,
                difficulty: question.difficulty,
                text: question.text,
                options,
            }
        })
        .collect();
    RenderedQuestionSet { questions }
}

pub fn generate(
    request: &GenerateRequest,
    bank: &[BankEntry],
) -> Result<RenderedQuestionSet, GenerateError> {
    request.validate()?;
    let questions = select_questions(bank, request.question_type, request.difficulty, request.count);
    Ok(render_questions(request.question_type, &questions))
}
