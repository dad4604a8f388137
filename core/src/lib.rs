pub mod bank;
pub mod controller;
pub mod error;
pub mod generator;
pub mod intake;
pub mod markup;
pub mod notice;
pub mod quiz;
pub mod route;
pub mod sections;
pub mod state;
pub mod storage;
pub mod theme;
pub mod views;

pub use bank::{questions_for, BankEntry, Difficulty, Question, QuestionType, QUESTION_BANK};
pub use controller::{Effect, ShellController};
pub use error::{GenerateError, StorageError};
pub use generator::{
    generate, select_questions, DifficultyFilter, GenerateRequest, RenderedQuestion,
    RenderedQuestionSet,
};
pub use intake::{plan_intake, AttachedFile, IntakePlan};
pub use markup::{EventKind, Node};
pub use notice::{Notice, NoticeBoard, NoticeKind, NoticePhase};
pub use quiz::QuizSession;
pub use route::{resolve, Resolution, Route, ROUTES};
pub use sections::{Section, SectionNavigator};
pub use state::{ApplicationState, Gamification, Role, SignupForm, UserProfile};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::Theme;
pub use views::{ShellAction, View};
