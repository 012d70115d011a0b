//! Transient draft behind the post form.
//!
//! The form posts either a job or an admission. Both kinds share five text
//! inputs (the title input is the job title or the admission program, and so
//! on) plus one kind-specific input. Each input owns one slot in the draft;
//! the kind only decides at publish time which record fields the slots fill.

use crate::domain::{Admission, Job, JobType, Listing};

/// Which record the form publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostKind {
    #[default]
    Job,
    Admission,
}

impl PostKind {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Job => Self::Admission,
            Self::Admission => Self::Job,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Job => "Job",
            Self::Admission => "Admission",
        }
    }
}

/// One input of the post form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    Title,
    Organization,
    Location,
    Salary,
    JobType,
    LastDate,
    Details,
}

const JOB_FIELDS: [FormField; 7] = [
    FormField::Kind,
    FormField::Title,
    FormField::Organization,
    FormField::Location,
    FormField::Salary,
    FormField::JobType,
    FormField::Details,
];

const ADMISSION_FIELDS: [FormField; 7] = [
    FormField::Kind,
    FormField::Title,
    FormField::Organization,
    FormField::Location,
    FormField::Salary,
    FormField::LastDate,
    FormField::Details,
];

impl FormField {
    /// Inputs shown for `kind`, in focus order.
    #[must_use]
    pub const fn sequence(kind: PostKind) -> &'static [Self] {
        match kind {
            PostKind::Job => &JOB_FIELDS,
            PostKind::Admission => &ADMISSION_FIELDS,
        }
    }

    /// Label of this input when the form posts `kind`.
    #[must_use]
    pub const fn label(self, kind: PostKind) -> &'static str {
        match (self, kind) {
            (Self::Kind, _) => "Posting",
            (Self::Title, PostKind::Job) => "Job title",
            (Self::Title, PostKind::Admission) => "Program",
            (Self::Organization, PostKind::Job) => "Organization",
            (Self::Organization, PostKind::Admission) => "University",
            (Self::Location, PostKind::Job) => "Location",
            (Self::Location, PostKind::Admission) => "Campus",
            (Self::Salary, PostKind::Job) => "Salary",
            (Self::Salary, PostKind::Admission) => "Intake",
            (Self::JobType, _) => "Type",
            (Self::LastDate, _) => "Last date",
            (Self::Details, _) => "Details",
        }
    }

    /// Option inputs are changed with left/right instead of typing.
    #[must_use]
    pub const fn is_option(self) -> bool {
        matches!(self, Self::Kind | Self::JobType)
    }
}

/// Job types offered by the form, `None` first.
fn job_type_choices() -> Vec<Option<JobType>> {
    std::iter::once(None)
        .chain(JobType::KNOWN.into_iter().map(Some))
        .collect()
}

/// In-progress post form contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostDraft {
    pub kind: PostKind,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub salary: String,
    pub job_type: Option<JobType>,
    pub last_date: String,
    pub details: String,
    focus: Option<usize>,
}

impl PostDraft {
    /// Focused input. A fresh draft focuses the kind selector.
    #[must_use]
    pub fn focused(&self) -> FormField {
        let fields = FormField::sequence(self.kind);
        fields[self.focus.unwrap_or(0) % fields.len()]
    }

    pub fn focus_next(&mut self) {
        let len = FormField::sequence(self.kind).len();
        self.focus = Some((self.focus.unwrap_or(0) + 1) % len);
    }

    pub fn focus_previous(&mut self) {
        let len = FormField::sequence(self.kind).len();
        self.focus = Some((self.focus.unwrap_or(0) + len - 1) % len);
    }

    /// Changes the focused option input. Text inputs are left alone.
    pub fn cycle_option(&mut self, forward: bool) {
        match self.focused() {
            FormField::Kind => self.kind = self.kind.toggled(),
            FormField::JobType => {
                let choices = job_type_choices();
                let current = choices
                    .iter()
                    .position(|choice| *choice == self.job_type)
                    .unwrap_or(0);
                let step = if forward { 1 } else { choices.len() - 1 };
                self.job_type = choices[(current + step) % choices.len()].clone();
            }
            _ => {}
        }
    }

    fn slot_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Organization => Some(&mut self.organization),
            FormField::Location => Some(&mut self.location),
            FormField::Salary => Some(&mut self.salary),
            FormField::LastDate => Some(&mut self.last_date),
            FormField::Details => Some(&mut self.details),
            FormField::Kind | FormField::JobType => None,
        }
    }

    /// Appends a character to the focused text input.
    pub fn push_char(&mut self, c: char) {
        if let Some(slot) = self.slot_mut(self.focused()) {
            slot.push(c);
        }
    }

    /// Removes the last character of the focused text input.
    pub fn pop_char(&mut self) {
        if let Some(slot) = self.slot_mut(self.focused()) {
            slot.pop();
        }
    }

    /// Display value of an input.
    #[must_use]
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Kind => self.kind.label().to_string(),
            FormField::Title => self.title.clone(),
            FormField::Organization => self.organization.clone(),
            FormField::Location => self.location.clone(),
            FormField::Salary => self.salary.clone(),
            FormField::JobType => self
                .job_type
                .as_ref()
                .map_or_else(|| "(none)".to_string(), ToString::to_string),
            FormField::LastDate => self.last_date.clone(),
            FormField::Details => self.details.clone(),
        }
    }

    /// Builds the record this draft describes.
    ///
    /// Nothing is validated: blank inputs become blank fields. `today` is the
    /// posting date stamped on jobs.
    ///
    /// # Examples
    ///
    /// ```
    /// use rozgarhub::app::draft::{PostDraft, PostKind};
    /// use rozgarhub::domain::Listing;
    ///
    /// let mut draft = PostDraft::default();
    /// draft.kind = PostKind::Admission;
    /// draft.title = "BS IT".to_string();
    /// draft.organization = "X University".to_string();
    ///
    /// match draft.build(7, "2025-09-01") {
    ///     Listing::Admission(admission) => {
    ///         assert_eq!(admission.program, "BS IT");
    ///         assert_eq!(admission.university, "X University");
    ///         assert!(admission.campus.is_empty());
    ///     }
    ///     Listing::Job(_) => unreachable!(),
    /// }
    /// ```
    #[must_use]
    pub fn build(&self, id: i64, today: &str) -> Listing {
        match self.kind {
            PostKind::Job => Listing::Job(Job {
                id,
                job_type: self.job_type.clone(),
                title: self.title.clone(),
                organization: self.organization.clone(),
                location: self.location.clone(),
                salary: self.salary.clone(),
                date_posted: today.to_string(),
                details: self.details.clone(),
            }),
            PostKind::Admission => Listing::Admission(Admission {
                id,
                program: self.title.clone(),
                university: self.organization.clone(),
                campus: self.location.clone(),
                intake: self.salary.clone(),
                last_date: self.last_date.clone(),
                details: self.details.clone(),
            }),
        }
    }

    /// Resets every input and returns the kind to job.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
