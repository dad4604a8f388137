use crate::bank::{BankEntry, QuestionType};
use crate::error::GenerateError;
use crate::generator::{
    clamp_count, generate, DifficultyFilter, GenerateRequest, RenderedQuestionSet, EXPORT_NOTICE,
    GENERATED_NOTICE, QUESTION_COUNT_DEFAULT,
};
use crate::intake::{
    ready_placeholder, AttachedFile, IntakePlan, DEFAULT_PLACEHOLDER, TEXT_READY_NOTICE,
    UNSUPPORTED_NOTICE,
};
use crate::notice::{NoticeBoard, NoticeKind};
use crate::sections::{Section, SectionNavigator, ShowOutcome};

/// Everything the question-generator page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    pub navigator: SectionNavigator,
    pub notices: NoticeBoard,
    pub question_type: QuestionType,
    pub difficulty: DifficultyFilter,
    pub count: usize,
    pub source_text: String,
    pub placeholder: String,
    pub attached: Option<AttachedFile>,
    pub drag_over: bool,
    pub loading: bool,
    pub results: Option<RenderedQuestionSet>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            navigator: SectionNavigator::default(),
            notices: NoticeBoard::default(),
            question_type: QuestionType::Mcq,
            difficulty: DifficultyFilter::All,
            count: QUESTION_COUNT_DEFAULT,
            source_text: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            attached: None,
            drag_over: false,
            loading: false,
            results: None,
        }
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, section: Section) -> ShowOutcome {
        self.navigator.show(section)
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = clamp_count(count);
    }

    pub fn request(&self) -> GenerateRequest {
        GenerateRequest {
            question_type: self.question_type,
            difficulty: self.difficulty,
            count: self.count,
            source_text: self.source_text.clone(),
            has_file: self.attached.is_some(),
        }
    }

    /// Validates the current inputs and turns the loader on.
    ///
    /// A rejected request only raises the error notice; results, section and
    /// inputs stay as they were.
    pub fn start_generation(&mut self) -> Result<GenerateRequest, GenerateError> {
        let request = self.request();
        if let Err(err) = request.validate() {
            self.notices.show(err.to_string(), NoticeKind::Error);
            return Err(err);
        }
        self.loading = true;
        Ok(request)
    }

    /// Completes a generation started with [`QuizSession::start_generation`].
    pub fn finish_generation(
        &mut self,
        request: &GenerateRequest,
        bank: &[BankEntry],
    ) -> Option<ShowOutcome> {
        self.loading = false;
        match generate(request, bank) {
            Ok(results) => {
                self.results = Some(results);
                let outcome = self.navigator.show(Section::Results);
                self.notices.show(GENERATED_NOTICE, NoticeKind::Success);
                Some(outcome)
            }
            Err(err) => {
                self.notices.show(err.to_string(), NoticeKind::Error);
                None
            }
        }
    }

    pub fn generate_again(&mut self) -> ShowOutcome {
        self.navigator.show(Section::Upload)
    }

    pub fn begin_export(&mut self) {
        self.notices.show(EXPORT_NOTICE, NoticeKind::Success);
    }

    /// Takes ownership of a dropped or picked file.
    pub fn attach_file(&mut self, file: AttachedFile) -> IntakePlan {
        let plan = file.plan();
        self.drag_over = false;
        self.attached = Some(file);
        if plan == IntakePlan::Unsupported {
            self.notices.show(UNSUPPORTED_NOTICE, NoticeKind::Success);
        }
        plan
    }

    /// Called once the text of an attached plain-text file has been read.
    pub fn file_text_ready(&mut self, name: &str, text: String) {
        if let Some(file) = self.attached.as_mut().filter(|file| file.name == name) {
            file.text = Some(text);
        }
        self.placeholder = ready_placeholder(name);
        self.notices.show(TEXT_READY_NOTICE, NoticeKind::Success);
    }
}
