use compact_str::CompactString;
use std::borrow::Cow;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    InvalidArgument(String),
    Worker(String),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            MatchError::Worker(msg) => write!(f, "Match worker failed: {}", msg),
        }
    }
}

impl std::error::Error for MatchError {}

/// 输入流中的一项；`None` 与空串一律跳过
pub trait Candidate {
    fn word(&self) -> Option<&str>;
}

impl Candidate for str {
    fn word(&self) -> Option<&str> {
        Some(self)
    }
}

impl Candidate for String {
    fn word(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Candidate for CompactString {
    fn word(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Candidate for Cow<'_, str> {
    fn word(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn word(&self) -> Option<&str> {
        (**self).word()
    }
}

impl<T: Candidate> Candidate for Option<T> {
    fn word(&self) -> Option<&str> {
        self.as_ref().and_then(Candidate::word)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub words: Vec<String>,
    pub scanned: usize,
    pub skipped: usize,
    pub distinct: usize,
    pub eligible: usize,
}
