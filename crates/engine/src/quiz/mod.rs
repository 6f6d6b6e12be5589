mod error;

pub mod host;

pub use error::{Error, Result};

use crate::validator;
use core::time::Duration;
use model::question::Question;
use std::{collections::BTreeSet, sync::Arc};

/// How long the answer feedback stays up before the summary takes over.
pub const SUMMARY_DELAY: Duration = Duration::from_secs(3);

/// A perfect run gets a longer window so the celebration media can play out.
pub const PERFECT_SUMMARY_DELAY: Duration = Duration::from_secs(10);

/// An ordered, validated list of questions shared by all sessions that run it.
#[derive(Clone, Debug)]
pub struct QuestionSet(Arc<[Question]>);

impl QuestionSet {
    /// Validates the questions and freezes them for the lifetime of the set.
    /// Returns `None` when the set is empty or any question is malformed.
    pub fn new(questions: Vec<Question>) -> Option<Self> {
        validator::is_valid_set(&questions).then(|| Self(questions.into()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.0
    }
}

/// Where the session currently stands. The summary state is terminal except
/// for [`Session::restart`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// The player is answering the question at this index.
    InProgress { index: usize },
    /// The summary screen with the final score.
    Completed { score: usize },
}

/// What the caller must schedule (or cancel) after applying an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to arm or disarm.
    None,
    /// Arm the summary timer with this delay; on expiry, commit completion.
    Finale(Duration),
    /// Disarm any armed summary timer.
    Disarm,
}

/// Feedback for a locked-in answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub explanation: String,
}

/// Snapshot of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Question {
        index: usize,
        total: usize,
        score: usize,
        prompt: String,
        options: Vec<String>,
        selection: Option<usize>,
        /// Present once an answer is locked in; its presence is what shows
        /// the explanation box.
        verdict: Option<Verdict>,
        health: RiverHealth,
    },
    Summary {
        score: usize,
        total: usize,
        message: &'static str,
    },
}

/// A single play-through of a question set.
///
/// The explanation is visible exactly when a selection is recorded, so the
/// two cannot disagree.
#[derive(Debug)]
pub struct Session {
    questions: QuestionSet,
    state: State,
    score: usize,
    answered: BTreeSet<usize>,
    selection: Option<usize>,
}

impl Session {
    pub fn new(questions: QuestionSet) -> Self {
        Self { questions, state: State::InProgress { index: 0 }, score: 0, answered: BTreeSet::new(), selection: None }
    }

    pub const fn state(&self) -> State {
        self.state
    }

    pub const fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answered(&self) -> usize {
        self.answered.len()
    }

    /// The active question, unless the summary has taken over.
    pub fn question(&self) -> Option<&Question> {
        match self.state {
            State::InProgress { index } => self.questions.questions().get(index),
            State::Completed { .. } => None,
        }
    }

    /// Locks in an answer for the active question and reveals its feedback.
    ///
    /// On the last question this returns [`Effect::Finale`] with the delay
    /// the caller must wait before committing [`Session::finish`]: longer
    /// when the run ended perfect so the celebration can play out.
    pub fn select_answer(&mut self, option: usize) -> Result<Effect> {
        let index = match self.state {
            State::InProgress { index } => index,
            State::Completed { .. } => return Err(Error::Completed),
        };
        if self.selection.is_some() {
            return Err(Error::AlreadyAnswered);
        }

        let question = &self.questions.questions()[index];
        if option >= question.options.len() {
            return Err(Error::OutOfRange);
        }

        self.selection = Some(option);
        self.answered.insert(index);
        if question.is_correct(option) {
            self.score += 1;
        }

        Ok(if index + 1 == self.questions.len() {
            let delay = if self.score == self.questions.len() { PERFECT_SUMMARY_DELAY } else { SUMMARY_DELAY };
            Effect::Finale(delay)
        } else {
            Effect::None
        })
    }

    /// Moves on to the next question, clearing the selection and feedback.
    pub fn advance(&mut self) -> Result<()> {
        let index = match self.state {
            State::InProgress { index } => index,
            State::Completed { .. } => return Err(Error::Completed),
        };
        if self.selection.is_none() {
            return Err(Error::NotAnswered);
        }
        if index + 1 >= self.questions.len() {
            return Err(Error::LastQuestion);
        }

        self.state = State::InProgress { index: index + 1 };
        self.selection = None;
        Ok(())
    }

    /// Returns to the first question with a clean slate. Always succeeds.
    pub fn restart(&mut self) -> Effect {
        self.state = State::InProgress { index: 0 };
        self.score = 0;
        self.answered.clear();
        self.selection = None;
        Effect::Disarm
    }

    /// Commits the summary state once the finale delay has elapsed.
    pub(crate) fn finish(&mut self) {
        self.state = State::Completed { score: self.score };
    }

    pub fn view(&self) -> View {
        let index = match self.state {
            State::InProgress { index } => index,
            State::Completed { score } => {
                return View::Summary { score, total: self.questions.len(), message: score_message(score, self.questions.len()) }
            }
        };
        let question = &self.questions.questions()[index];
        let verdict = self.selection.map(|option| Verdict {
            correct: question.is_correct(option),
            explanation: question.explanation.clone(),
        });
        View::Question {
            index,
            total: self.questions.len(),
            score: self.score,
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            selection: self.selection,
            verdict,
            health: RiverHealth::from_counts(self.score, self.answered.len()),
        }
    }
}

/// Closing message on the summary screen.
pub fn score_message(score: usize, total: usize) -> &'static str {
    let percentage = score * 100 / total.max(1);
    if percentage == 100 {
        "Perfect! You're a River Guardian!"
    } else if percentage >= 80 {
        "Excellent! You really care about rivers!"
    } else if percentage >= 60 {
        "Good job! Keep learning about water conservation!"
    } else {
        "Keep learning! Every small action helps protect our rivers!"
    }
}

/// Coarse reading of the river media that tracks the running score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiverHealth {
    Thriving,
    Healthy,
    NeedsCare,
    Drying,
    Danger,
}

impl RiverHealth {
    /// Banded ratio of correct answers over questions answered so far.
    pub fn from_counts(score: usize, answered: usize) -> Self {
        let level = score * 100 / answered.max(1);
        if level >= 80 {
            Self::Thriving
        } else if level >= 60 {
            Self::Healthy
        } else if level >= 40 {
            Self::NeedsCare
        } else if level >= 20 {
            Self::Drying
        } else {
            Self::Danger
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, answer: u8) -> Question {
        Question {
            prompt: prompt.into(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            answer,
            explanation: "Because rivers.".into(),
        }
    }

    fn three_questions() -> QuestionSet {
        QuestionSet::new(vec![question("q0", 1), question("q1", 2), question("q2", 0)]).unwrap()
    }

    #[test]
    fn scoring_increments_iff_correct() {
        let mut session = Session::new(three_questions());
        assert_eq!(session.select_answer(1).unwrap(), Effect::None);
        assert_eq!(session.score(), 1);
        session.advance().unwrap();

        assert_eq!(session.select_answer(3).unwrap(), Effect::None);
        assert_eq!(session.score(), 1, "a wrong answer must never change the score");
    }

    #[test]
    fn score_never_exceeds_answered() {
        let mut session = Session::new(three_questions());
        for option in [1, 2, 0] {
            assert!(session.score() <= session.answered());
            session.select_answer(option).unwrap();
            assert!(session.score() <= session.answered());
            let _ = session.advance();
        }
    }

    #[test]
    fn selection_is_locked_until_advance() {
        let mut session = Session::new(three_questions());
        session.select_answer(0).unwrap();
        assert_eq!(session.select_answer(1), Err(Error::AlreadyAnswered));

        session.advance().unwrap();
        assert_eq!(session.select_answer(2).unwrap(), Effect::None);
    }

    #[test]
    fn rejects_out_of_range_options() {
        let mut session = Session::new(three_questions());
        assert_eq!(session.select_answer(4), Err(Error::OutOfRange));
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered(), 0);
    }

    #[test]
    fn cannot_advance_without_feedback() {
        let mut session = Session::new(three_questions());
        assert_eq!(session.advance(), Err(Error::NotAnswered));
    }

    #[test]
    fn cannot_advance_past_the_last_question() {
        let mut session = Session::new(three_questions());
        session.select_answer(1).unwrap();
        session.advance().unwrap();
        session.select_answer(2).unwrap();
        session.advance().unwrap();
        session.select_answer(0).unwrap();
        assert_eq!(session.advance(), Err(Error::LastQuestion));
    }

    #[test]
    fn perfect_run_gets_the_long_finale() {
        let mut session = Session::new(three_questions());
        session.select_answer(1).unwrap();
        session.advance().unwrap();
        session.select_answer(2).unwrap();
        session.advance().unwrap();
        assert_eq!(session.select_answer(0).unwrap(), Effect::Finale(PERFECT_SUMMARY_DELAY));
    }

    #[test]
    fn imperfect_run_gets_the_short_finale() {
        let mut session = Session::new(three_questions());
        session.select_answer(3).unwrap();
        session.advance().unwrap();
        session.select_answer(2).unwrap();
        session.advance().unwrap();
        assert_eq!(session.select_answer(0).unwrap(), Effect::Finale(SUMMARY_DELAY));
    }

    #[test]
    fn finish_commits_the_summary_once() {
        let mut session = Session::new(three_questions());
        session.select_answer(1).unwrap();
        session.advance().unwrap();
        session.select_answer(3).unwrap();
        session.advance().unwrap();
        session.select_answer(0).unwrap();
        session.finish();

        assert_eq!(session.state(), State::Completed { score: 2 });
        assert_eq!(session.select_answer(0), Err(Error::Completed));
        assert_eq!(session.advance(), Err(Error::Completed));
    }

    #[test]
    fn restart_resets_everything_from_any_state() {
        let mut session = Session::new(three_questions());
        session.select_answer(1).unwrap();
        session.advance().unwrap();
        session.select_answer(2).unwrap();
        assert_eq!(session.restart(), Effect::Disarm);
        assert_eq!(session.state(), State::InProgress { index: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered(), 0);

        session.select_answer(0).unwrap();
        session.finish();
        session.restart();
        assert_eq!(session.state(), State::InProgress { index: 0 });
    }

    #[test]
    fn view_reveals_feedback_only_after_selection() {
        let mut session = Session::new(three_questions());
        match session.view() {
            View::Question { selection, verdict, .. } => {
                assert_eq!(selection, None);
                assert_eq!(verdict, None);
            }
            View::Summary { .. } => panic!("fresh session must not be a summary"),
        }

        session.select_answer(1).unwrap();
        match session.view() {
            View::Question { selection, verdict, .. } => {
                assert_eq!(selection, Some(1));
                assert!(verdict.expect("feedback must be visible").correct);
            }
            View::Summary { .. } => panic!("session must not summarize mid-question"),
        }
    }

    #[test]
    fn rejects_invalid_question_sets() {
        assert!(QuestionSet::new(Vec::new()).is_none());
        assert!(QuestionSet::new(vec![question("bad", 4)]).is_none());
    }

    #[test]
    fn summary_messages_match_score_bands() {
        assert_eq!(score_message(6, 6), "Perfect! You're a River Guardian!");
        assert_eq!(score_message(5, 6), "Excellent! You really care about rivers!");
        assert_eq!(score_message(4, 6), "Good job! Keep learning about water conservation!");
        assert_eq!(score_message(2, 6), "Keep learning! Every small action helps protect our rivers!");
    }

    #[test]
    fn river_health_bands() {
        assert_eq!(RiverHealth::from_counts(0, 0), RiverHealth::Danger);
        assert_eq!(RiverHealth::from_counts(1, 5), RiverHealth::Drying);
        assert_eq!(RiverHealth::from_counts(2, 5), RiverHealth::NeedsCare);
        assert_eq!(RiverHealth::from_counts(3, 5), RiverHealth::Healthy);
        assert_eq!(RiverHealth::from_counts(4, 5), RiverHealth::Thriving);
        assert_eq!(RiverHealth::from_counts(5, 5), RiverHealth::Thriving);
    }
}
