use std::process::ExitCode;

/// How an adoctips run ended.
///
/// A failed key check still writes the JSON document, so `Failure` does not
/// by itself mean the output is missing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// JSON written and every expected key documented (0).
    Success,
    /// No doc files resolved, extracted keys differ from the expected keys,
    /// the expected keys file is unusable, or the JSON could not be written (1).
    Failure,
    /// The run could not start, e.g. an invalid `.adoctipsrc.json` (2).
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
