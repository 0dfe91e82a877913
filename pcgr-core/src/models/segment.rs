use std::fmt::{self, Display};

///
/// A copy-number segment with its mean log-ratio.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CnaSegment {
    pub chromosome: String,
    pub start: i64,
    pub end: i64,
    pub segment_mean: f64,
}

impl Display for CnaSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}
