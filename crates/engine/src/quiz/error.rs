use core::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An answer is already locked in for the active question.
    AlreadyAnswered,
    /// The selected option does not exist.
    OutOfRange,
    /// No answer has been locked in yet, so there is no feedback to advance from.
    NotAnswered,
    /// The active question is the last one; the summary takes over from here.
    LastQuestion,
    /// The session has already reached the summary screen.
    Completed,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AlreadyAnswered => "An answer has already been locked in for this question.",
            Self::OutOfRange => "The selected option does not exist.",
            Self::NotAnswered => "No answer has been locked in yet.",
            Self::LastQuestion => "There is no question after the last one.",
            Self::Completed => "The quiz has already been completed.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
