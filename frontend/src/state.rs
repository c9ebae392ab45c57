use shared::AnalysisReport;

pub const GENERIC_ANALYZE_FAILURE: &str = "Failed to analyze image. Please try again.";

/// What a settled analysis request produced.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    NotSnake(String),
    Failed(String),
}

/// The single source of truth for what the interface renders. Each variant
/// carries exactly the data its screen needs; there are no independently
/// mutable result/error flags to drift out of sync.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisState {
    Idle,
    ImageSelected {
        image: String,
    },
    Analyzing {
        image: String,
        seq: u64,
    },
    Result {
        image: String,
        report: AnalysisReport,
    },
    NotSnake {
        image: String,
        message: String,
    },
    Error {
        image: Option<String>,
        message: String,
    },
}

impl AnalysisState {
    pub fn image(&self) -> Option<&str> {
        match self {
            AnalysisState::Idle => None,
            AnalysisState::ImageSelected { image }
            | AnalysisState::Analyzing { image, .. }
            | AnalysisState::Result { image, .. }
            | AnalysisState::NotSnake { image, .. } => Some(image),
            AnalysisState::Error { image, .. } => image.as_deref(),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AnalysisState::Analyzing { .. })
    }

    /// A successful capture always wins: prior reports, errors, not-a-snake
    /// messages, and any in-flight analysis are discarded.
    pub fn select_image(&mut self, image: String) {
        *self = AnalysisState::ImageSelected { image };
    }

    /// A capture that failed validation or reading. The currently held image,
    /// if any, survives so the user can still re-submit it.
    pub fn capture_failed(&mut self, message: String) {
        let image = self.image().map(str::to_string);
        *self = AnalysisState::Error { image, message };
    }

    /// Moves to `Analyzing` stamped with `seq`. Refused while no image is
    /// held or another analysis is already in flight; the caller must not
    /// issue a request when this returns false.
    pub fn begin_analysis(&mut self, seq: u64) -> bool {
        if self.is_analyzing() {
            return false;
        }
        match self.image() {
            Some(image) => {
                let image = image.to_string();
                *self = AnalysisState::Analyzing { image, seq };
                true
            }
            None => false,
        }
    }

    /// Applies a settled request. Settlements whose sequence is not the one
    /// currently in flight are stale (a newer capture or submit superseded
    /// them) and are discarded; returns whether the state changed.
    pub fn settle(&mut self, seq: u64, outcome: AnalysisOutcome) -> bool {
        let AnalysisState::Analyzing { image, seq: current } = self else {
            return false;
        };
        if *current != seq {
            return false;
        }

        let image = std::mem::take(image);
        *self = match outcome {
            AnalysisOutcome::Report(report) => AnalysisState::Result { image, report },
            AnalysisOutcome::NotSnake(message) => AnalysisState::NotSnake { image, message },
            AnalysisOutcome::Failed(message) => {
                let message = if message.is_empty() {
                    GENERIC_ANALYZE_FAILURE.to_string()
                } else {
                    message
                };
                AnalysisState::Error {
                    image: Some(image),
                    message,
                }
            }
        };
        true
    }
}
