//! Lead-capture inquiry form state.
//!
//! DESIGN
//! ======
//! `InquiryForm` is a plain state machine with no timers or signals. The
//! async lifecycle (latency, confirmation delay, host close) lives in
//! `net::submit`, which mutates this struct through short synchronous steps
//! so each step can be asserted in isolation.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──Ok──▶ Submitted ──delay──▶ Idle (cleared, hidden)
//!  ▲                    │
//!  └──edit/retry── Failed ◀──Err──┘
//! ```

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

// =============================================================================
// SERVICE OPTIONS
// =============================================================================

/// One selectable "area of interest" entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICE_OPTIONS: &[ServiceOption] = &[
    ServiceOption { value: "carbon-supply", label: "Activated Carbon Supply (Bulk/Custom)" },
    ServiceOption { value: "waste-valorization", label: "Organic Waste Valorization Partnership" },
    ServiceOption { value: "process-technology", label: "Carbon Activation Technology Licensing" },
    ServiceOption { value: "rd-collaboration", label: "R&D Collaboration / Material Testing" },
    ServiceOption { value: "consulting", label: "Sustainability & Circular Economy Consulting" },
    ServiceOption { value: "other", label: "Other Inquiry" },
];

// =============================================================================
// FIELDS
// =============================================================================

/// Addressable form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InquiryField {
    Name,
    Email,
    Phone,
    Company,
    ServiceInterest,
    Message,
}

impl InquiryField {
    pub const ALL: [Self; 6] =
        [Self::Name, Self::Email, Self::Phone, Self::Company, Self::ServiceInterest, Self::Message];

    /// Wire/input name used for `name=` attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::ServiceInterest => "service",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email)
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "company" => Ok(Self::Company),
            "service" | "serviceInterest" => Ok(Self::ServiceInterest),
            "message" => Ok(Self::Message),
            other => Err(FormError::UnknownField(other.to_owned())),
        }
    }
}

/// Field values as typed by the visitor. Empty string means "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(rename = "serviceInterest")]
    pub service: String,
    pub message: String,
}

impl InquiryFields {
    #[must_use]
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Phone => &self.phone,
            InquiryField::Company => &self.company,
            InquiryField::ServiceInterest => &self.service,
            InquiryField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: InquiryField) -> &mut String {
        match field {
            InquiryField::Name => &mut self.name,
            InquiryField::Email => &mut self.email,
            InquiryField::Phone => &mut self.phone,
            InquiryField::Company => &mut self.company,
            InquiryField::ServiceInterest => &mut self.service,
            InquiryField::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        InquiryField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Rejected field edit. The form is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown service option: {0}")]
    UnknownService(String),
    #[error("form is locked while a submission is in progress")]
    Frozen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationReason {
    Required,
    MalformedEmail,
    NotAnOption,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "is required",
            Self::MalformedEmail => "must be a valid email address",
            Self::NotAnOption => "must be one of the listed options",
        })
    }
}

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{field} {reason}")]
    Validation { field: InquiryField, reason: ValidationReason },
    #[error("submission failed: {0}")]
    Network(String),
}

// =============================================================================
// FORM STATE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

/// Outcome of a host or visitor close request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    /// A submission is in flight; the dialog stays open.
    Vetoed,
}

/// Why `begin_submit` did not start a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Already submitting or showing the confirmation.
    NotIdle,
    Invalid(SubmitError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InquiryForm {
    options: &'static [ServiceOption],
    pub fields: InquiryFields,
    pub status: SubmitStatus,
    pub visible: bool,
    pub error: Option<SubmitError>,
}

impl InquiryForm {
    /// Build a closed, idle form over the given service options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the option list is empty or repeats a value.
    pub fn new(options: &'static [ServiceOption]) -> Result<Self, ConfigError> {
        if options.is_empty() {
            return Err(ConfigError::EmptyServiceOptions);
        }
        let mut seen = HashSet::new();
        for option in options {
            if !seen.insert(option.value) {
                return Err(ConfigError::DuplicateServiceOption(option.value.to_owned()));
            }
        }
        Ok(Self {
            options,
            fields: InquiryFields::default(),
            status: SubmitStatus::Idle,
            visible: false,
            error: None,
        })
    }

    #[must_use]
    pub fn options(&self) -> &'static [ServiceOption] {
        self.options
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting | SubmitStatus::Submitted)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.status == SubmitStatus::Submitted
    }

    /// Show the dialog. Returns `false` when it was already visible.
    ///
    /// `initial` pre-fills fields only while `Idle` or `Failed`; values the
    /// form would reject (e.g. an unknown service) are skipped.
    pub fn open(&mut self, initial: Option<InquiryFields>) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        if let Some(initial) = initial.filter(|_| !self.is_frozen()) {
            for field in InquiryField::ALL {
                let value = initial.get(field);
                if value.is_empty() || (field == InquiryField::ServiceInterest && !self.is_option(value)) {
                    continue;
                }
                value.clone_into(self.fields.slot_mut(field));
            }
        }
        true
    }

    /// Hide the dialog unless a submission is in flight.
    ///
    /// Closing the confirmation view resets the form right away; the caller
    /// owns cancelling any pending confirmation timer.
    pub fn request_close(&mut self) -> CloseOutcome {
        match self.status {
            SubmitStatus::Submitting => CloseOutcome::Vetoed,
            SubmitStatus::Submitted => {
                self.complete();
                CloseOutcome::Closed
            }
            SubmitStatus::Idle | SubmitStatus::Failed => {
                self.visible = false;
                CloseOutcome::Closed
            }
        }
    }

    /// Write one field. Last write wins.
    ///
    /// # Errors
    ///
    /// [`FormError::Frozen`] while submitting or showing the confirmation,
    /// [`FormError::UnknownService`] for a service value outside the options.
    pub fn update_field(&mut self, field: InquiryField, value: &str) -> Result<(), FormError> {
        if self.is_frozen() {
            return Err(FormError::Frozen);
        }
        if field == InquiryField::ServiceInterest && !value.is_empty() && !self.is_option(value) {
            return Err(FormError::UnknownService(value.to_owned()));
        }
        value.clone_into(self.fields.slot_mut(field));
        self.error = None;
        Ok(())
    }

    /// String-keyed variant of [`Self::update_field`] for `name=` driven inputs.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownField`] for an unrecognized name, otherwise as
    /// [`Self::update_field`].
    pub fn update_named_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = name.parse::<InquiryField>()?;
        self.update_field(field, value)
    }

    /// Check required fields, email shape and the service selection.
    ///
    /// # Errors
    ///
    /// The first failing field, in form order.
    pub fn validate(&self) -> Result<(), SubmitError> {
        validate_fields(&self.fields, self.options)
    }

    /// Enter `Submitting` and hand back the snapshot to send.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::NotIdle`] leaves everything untouched.
    /// [`SubmitRejected::Invalid`] records the error and keeps the status.
    pub fn begin_submit(&mut self) -> Result<InquiryFields, SubmitRejected> {
        if !matches!(self.status, SubmitStatus::Idle | SubmitStatus::Failed) {
            return Err(SubmitRejected::NotIdle);
        }
        if let Err(e) = self.validate() {
            self.error = Some(e.clone());
            return Err(SubmitRejected::Invalid(e));
        }
        self.status = SubmitStatus::Submitting;
        self.error = None;
        Ok(self.fields.clone())
    }

    /// Apply the submitter's answer. Ignored unless `Submitting`.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => self.status = SubmitStatus::Submitted,
            Err(e) => {
                self.status = SubmitStatus::Failed;
                self.error = Some(e);
            }
        }
    }

    /// End the confirmation: clear fields, go idle, hide the dialog.
    ///
    /// Returns `false` (and changes nothing) unless `Submitted`.
    pub fn complete(&mut self) -> bool {
        if self.status != SubmitStatus::Submitted {
            return false;
        }
        self.fields = InquiryFields::default();
        self.status = SubmitStatus::Idle;
        self.error = None;
        self.visible = false;
        true
    }

    fn is_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validate a field set against an option list.
///
/// # Errors
///
/// The first failing field, in form order.
pub fn validate_fields(fields: &InquiryFields, options: &[ServiceOption]) -> Result<(), SubmitError> {
    for field in InquiryField::ALL {
        if field.is_required() && fields.get(field).trim().is_empty() {
            return Err(SubmitError::Validation { field, reason: ValidationReason::Required });
        }
    }
    if !is_email_shaped(&fields.email) {
        return Err(SubmitError::Validation {
            field: InquiryField::Email,
            reason: ValidationReason::MalformedEmail,
        });
    }
    if !fields.service.is_empty() && !options.iter().any(|o| o.value == fields.service) {
        return Err(SubmitError::Validation {
            field: InquiryField::ServiceInterest,
            reason: ValidationReason::NotAnOption,
        });
    }
    Ok(())
}

/// Same acceptance as a browser `type="email"` input: one `@`, both sides
/// non-empty, no whitespace.
#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}
