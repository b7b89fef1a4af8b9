//! Three-step wizard: collect words, review them, show the relations.
//!
//! ```text
//! Input ──continue──▶ Review ──submit──▶ Result(Loading) ──settle──▶ Result(Loaded | Failed)
//!   ▲                   │                                                │
//!   └──────back─────────┘                                                │
//!   └───────────────────────────────reset────────────────────────────────┘
//! ```
//!
//! [`WizardState`] carries only what is valid in each step, so "result step with
//! neither a pending request nor an outcome" cannot be expressed. The words live
//! on [`Wizard`] because every step shows them.

use std::fmt;

use relation::{RelationRequest, RelationResponse, WordSet, CLIENT_ERROR_MESSAGE};

use crate::backend::BackendError;

/// Outcome area of the result step.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
    /// Request sent, not settled yet.
    Loading,
    /// The service answered. Includes 400/500 bodies and unparsable model output.
    Loaded(RelationResponse),
    /// The service could not be reached or its body could not be read.
    Failed,
}

impl ResultView {
    /// What the result step renders. `Failed` shows the generic client error.
    pub fn response(&self) -> Option<RelationResponse> {
        match self {
            Self::Loading => None,
            Self::Loaded(r) => Some(r.clone()),
            Self::Failed => Some(RelationResponse::error(CLIENT_ERROR_MESSAGE)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WizardState {
    Input,
    Review,
    Result(ResultView),
}

/// Step name without the step data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Input,
    Review,
    Result,
}

impl Step {
    /// 1-based position in the progress header.
    pub fn number(self) -> usize {
        match self {
            Self::Input => 1,
            Self::Review => 2,
            Self::Result => 3,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "input",
            Self::Review => "review",
            Self::Result => "result",
        })
    }
}

/// User actions, as offered by [`Wizard::available_actions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    AddWords,
    RemoveWord,
    ContinueToReview,
    BackToInput,
    Submit,
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AddWords => "add words",
            Self::RemoveWord => "remove word",
            Self::ContinueToReview => "continue to review",
            Self::BackToInput => "back to add words",
            Self::Submit => "find relations",
            Self::Reset => "start over",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("add at least one word first")]
    NoWords,
    #[error("{action} is not available in the {step} step")]
    NotAvailable { action: Action, step: Step },
    #[error("no word \"{0}\" in the list")]
    UnknownWord(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    words: WordSet,
    state: WizardState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            words: WordSet::new(),
            state: WizardState::Input,
        }
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        match self.state {
            WizardState::Input => Step::Input,
            WizardState::Review => Step::Review,
            WizardState::Result(_) => Step::Result,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, WizardState::Result(ResultView::Loading))
    }

    /// Actions reachable from the current state. Continue appears only once a word exists;
    /// nothing is offered while a request is in flight.
    pub fn available_actions(&self) -> Vec<Action> {
        match &self.state {
            WizardState::Input if self.words.is_empty() => vec![Action::AddWords],
            WizardState::Input => vec![
                Action::AddWords,
                Action::RemoveWord,
                Action::ContinueToReview,
            ],
            WizardState::Review => vec![Action::BackToInput, Action::Submit],
            WizardState::Result(ResultView::Loading) => vec![],
            WizardState::Result(_) => vec![Action::Reset],
        }
    }

    fn require(&self, action: Action) -> Result<(), WizardError> {
        if self.available_actions().contains(&action) {
            return Ok(());
        }
        if action == Action::ContinueToReview && self.step() == Step::Input {
            return Err(WizardError::NoWords);
        }
        Err(WizardError::NotAvailable {
            action,
            step: self.step(),
        })
    }

    /// Adds comma-separated words (input step). Returns the words actually added.
    pub fn add_words(&mut self, text: &str) -> Result<Vec<String>, WizardError> {
        self.require(Action::AddWords)?;
        Ok(self.words.add_comma_separated(text))
    }

    pub fn remove_word(&mut self, word: &str) -> Result<(), WizardError> {
        self.require(Action::RemoveWord)?;
        if self.words.remove(word) {
            Ok(())
        } else {
            Err(WizardError::UnknownWord(word.to_string()))
        }
    }

    pub fn continue_to_review(&mut self) -> Result<(), WizardError> {
        self.require(Action::ContinueToReview)?;
        self.state = WizardState::Review;
        Ok(())
    }

    /// Review → input; words are kept.
    pub fn back_to_input(&mut self) -> Result<(), WizardError> {
        self.require(Action::BackToInput)?;
        self.state = WizardState::Input;
        Ok(())
    }

    /// Review → result (loading). Returns the one request the caller must send.
    pub fn begin_submit(&mut self) -> Result<RelationRequest, WizardError> {
        self.require(Action::Submit)?;
        if self.words.is_empty() {
            return Err(WizardError::NoWords);
        }
        self.state = WizardState::Result(ResultView::Loading);
        Ok(RelationRequest {
            words: self.words.to_vec(),
        })
    }

    /// Records the outcome of the pending request. Only valid while loading.
    pub fn settle(
        &mut self,
        outcome: Result<RelationResponse, BackendError>,
    ) -> Result<(), WizardError> {
        if !self.is_loading() {
            return Err(WizardError::NotAvailable {
                action: Action::Submit,
                step: self.step(),
            });
        }
        self.state = WizardState::Result(match outcome {
            Ok(resp) => ResultView::Loaded(resp),
            Err(e) => {
                tracing::error!(error = %e, "relation request failed");
                ResultView::Failed
            }
        });
        Ok(())
    }

    /// Result → input, clearing words and the result.
    pub fn reset(&mut self) -> Result<(), WizardError> {
        self.require(Action::Reset)?;
        self.words.clear();
        self.state = WizardState::Input;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_review(words: &str) -> Wizard {
        let mut w = Wizard::new();
        w.add_words(words).unwrap();
        w.continue_to_review().unwrap();
        w
    }

    fn ok_response() -> RelationResponse {
        RelationResponse::Success {
            summary: "s".into(),
            data: Default::default(),
        }
    }

    #[test]
    fn starts_in_input_with_only_add_available() {
        let w = Wizard::new();
        assert_eq!(w.step(), Step::Input);
        assert_eq!(w.available_actions(), vec![Action::AddWords]);
    }

    #[test]
    fn continue_is_unreachable_while_empty() {
        let mut w = Wizard::new();
        assert_eq!(w.continue_to_review(), Err(WizardError::NoWords));
        w.add_words(" , ").unwrap();
        assert_eq!(w.continue_to_review(), Err(WizardError::NoWords));
        assert_eq!(w.step(), Step::Input);
    }

    #[test]
    fn removing_last_word_hides_continue_again() {
        let mut w = Wizard::new();
        w.add_words("dog").unwrap();
        assert!(w.available_actions().contains(&Action::ContinueToReview));
        w.remove_word("dog").unwrap();
        assert!(!w.available_actions().contains(&Action::ContinueToReview));
    }

    #[test]
    fn remove_unknown_word_is_an_error() {
        let mut w = Wizard::new();
        w.add_words("dog").unwrap();
        assert_eq!(
            w.remove_word("cat"),
            Err(WizardError::UnknownWord("cat".into()))
        );
    }

    #[test]
    fn back_from_review_keeps_words() {
        let mut w = at_review("dog, cat");
        w.back_to_input().unwrap();
        assert_eq!(w.step(), Step::Input);
        assert_eq!(w.words().to_vec(), vec!["dog", "cat"]);
    }

    #[test]
    fn review_is_read_only() {
        let mut w = at_review("dog");
        assert!(matches!(
            w.add_words("cat"),
            Err(WizardError::NotAvailable { action: Action::AddWords, step: Step::Review })
        ));
        assert!(w.remove_word("dog").is_err());
        assert!(w.reset().is_err());
    }

    #[test]
    fn submit_yields_request_and_enters_loading() {
        let mut w = at_review("dog, animal");
        let req = w.begin_submit().unwrap();
        assert_eq!(req.words, vec!["dog", "animal"]);
        assert!(w.is_loading());
        assert!(w.available_actions().is_empty());
        assert!(w.begin_submit().is_err());
        assert!(w.reset().is_err());
    }

    #[test]
    fn settle_success_then_reset_clears_everything() {
        let mut w = at_review("dog");
        w.begin_submit().unwrap();
        w.settle(Ok(ok_response())).unwrap();
        assert_eq!(w.state(), &WizardState::Result(ResultView::Loaded(ok_response())));
        assert_eq!(w.available_actions(), vec![Action::Reset]);
        assert!(w.back_to_input().is_err());

        w.reset().unwrap();
        assert_eq!(w, Wizard::new());
    }

    #[test]
    fn network_failure_shows_generic_error() {
        let mut w = at_review("dog");
        w.begin_submit().unwrap();
        w.settle(Err(BackendError::Transport("refused".into()))).unwrap();
        let shown = match w.state() {
            WizardState::Result(view) => view.response(),
            other => panic!("unexpected state {:?}", other),
        };
        assert_eq!(shown, Some(RelationResponse::error("Something went wrong")));
    }

    #[test]
    fn settle_outside_loading_is_rejected() {
        let mut w = Wizard::new();
        assert!(w.settle(Ok(ok_response())).is_err());
        assert_eq!(w.step(), Step::Input);
    }
}
