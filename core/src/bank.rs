use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Mcq,
    ShortAnswer,
    LongAnswer,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::Mcq,
        QuestionType::ShortAnswer,
        QuestionType::LongAnswer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::LongAnswer => "Long Answer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        QuestionType::ALL
            .into_iter()
            .find(|kind| kind.label() == value.trim())
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Lowercase form used for badge classes.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: Option<[&'static str; 4]>,
    pub difficulty: Difficulty,
}

#[derive(Clone, Copy, Debug)]
pub struct BankEntry {
    pub question_type: QuestionType,
    pub questions: &'static [Question],
}

include!(concat!(env!("OUT_DIR"), "/question_bank.rs"));

pub fn questions_for(question_type: QuestionType) -> &'static [Question] {
    questions_in(QUESTION_BANK, question_type)
}

pub fn questions_in(bank: &[BankEntry], question_type: QuestionType) -> &'static [Question] {
    bank.iter()
        .find(|entry| entry.question_type == question_type)
        .map(|entry| entry.questions)
        .unwrap_or(&[])
}
