//! Job type filter and free-text search.
//!
//! Filtering is a pure function over the jobs collection. The result borrows
//! from the input and always keeps the input order; nothing is re-sorted or
//! cached.

use super::listing::{Job, JobType};
use std::fmt;

/// Type filter selected on the jobs screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Wildcard, every job passes.
    #[default]
    All,
    /// Only jobs whose type equals this one.
    Only(JobType),
}

impl TypeFilter {
    /// Filter options in the order the jobs screen cycles through them.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(JobType::KNOWN.into_iter().map(Self::Only))
            .collect()
    }

    /// Advances to the next option, wrapping back to `All`.
    #[must_use]
    pub fn next(&self) -> Self {
        self.step(1)
    }

    /// Steps back to the previous option, wrapping to the last one.
    #[must_use]
    pub fn previous(&self) -> Self {
        let len = Self::options().len();
        self.step(len - 1)
    }

    fn step(&self, by: usize) -> Self {
        let options = Self::options();
        // A free-text filter is never offered, so it restarts the cycle.
        let current = options.iter().position(|o| o == self).unwrap_or(0);
        options[(current + by) % options.len()].clone()
    }

    /// Whether `job` passes this filter.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => job.job_type.as_ref() == Some(wanted),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(job_type) => write!(f, "{job_type}"),
        }
    }
}

/// Whether `job` contains `query`, ignoring case, in its search haystack.
///
/// An empty query matches everything.
#[must_use]
pub fn matches_query(job: &Job, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    job.search_haystack()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Returns the jobs passing both the type filter and the text query.
///
/// # Examples
///
/// ```
/// use rozgarhub::domain::{filtered_jobs, sample_jobs, TypeFilter};
///
/// let jobs = sample_jobs();
/// let all = filtered_jobs(&jobs, &TypeFilter::All, "");
/// assert_eq!(all.len(), jobs.len());
///
/// let remote = filtered_jobs(&jobs, &TypeFilter::All, "REMOTE");
/// assert_eq!(remote.len(), 1);
/// assert_eq!(remote[0].title, "Software Developer");
/// ```
#[must_use]
pub fn filtered_jobs<'a>(jobs: &'a [Job], filter: &TypeFilter, query: &str) -> Vec<&'a Job> {
    let _span = tracing::trace_span!("filtered_jobs",
        total = jobs.len(),
        filter = %filter,
        query_len = query.len()
    ).entered();

    jobs.iter()
        .filter(|job| filter.matches(job) && matches_query(job, query))
        .collect()
}

/// Character range of `query` inside `text`, ignoring case.
///
/// Returns `(start, end)` character indices (end exclusive) of the first
/// occurrence, used to highlight search hits.
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

    // Lowercasing can change the char count (e.g. 'İ'); give up on those.
    if haystack.len() != text.chars().count() || needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}
