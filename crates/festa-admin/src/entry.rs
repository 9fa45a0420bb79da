//! Circle registration entry action
//!
//! Decides what the public registration route shows a caller: an
//! authorization denial, a redirect to the terms-acceptance step, or the
//! registration form itself with the active custom form's questions.

use festa_model::{CustomForm, Question};
use festa_store::{CustomFormProvider, StoreError};

/// Ability the caller must hold to open the registration form
pub const CIRCLE_CREATE_ABILITY: &str = "circle.create";

/// Session flag set once the caller has read the terms
pub const READ_TERMS_SESSION_KEY: &str = "read_terms";

/// Form type resolved for circle registrations
const CIRCLE_FORM_TYPE: &str = "circle";

/// Authorization seam
pub trait AuthGate {
    /// Whether the current caller holds an ability
    fn allows(&self, ability: &str) -> bool;
}

/// Session seam
pub trait Session {
    /// Whether a session flag is set
    fn has(&self, key: &str) -> bool;
}

/// What the registration route should do for this caller
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    /// Caller may not create a circle
    Denied,
    /// Caller must accept the terms before seeing the form
    RedirectToTerms,
    /// Render the registration form
    ShowForm {
        /// The active custom form, absent when none is configured
        form: Option<CustomForm>,
        /// The form's questions in form order (empty without a form)
        questions: Vec<Question>,
    },
}

/// The registration entry action
pub struct RegistrationEntry<'a> {
    gate: &'a dyn AuthGate,
    session: &'a dyn Session,
    forms: &'a dyn CustomFormProvider,
}

impl<'a> RegistrationEntry<'a> {
    /// Wire the action to its collaborators
    #[inline]
    #[must_use]
    pub fn new(
        gate: &'a dyn AuthGate,
        session: &'a dyn Session,
        forms: &'a dyn CustomFormProvider,
    ) -> Self {
        Self {
            gate,
            session,
            forms,
        }
    }

    /// Resolve the entry outcome for the current caller
    ///
    /// A form carrying a description implies a terms step; callers who have
    /// not set the `read_terms` session flag are redirected there first.
    pub fn invoke(&self) -> Result<EntryOutcome, StoreError> {
        if !self.gate.allows(CIRCLE_CREATE_ABILITY) {
            tracing::info!(ability = CIRCLE_CREATE_ABILITY, "registration denied");
            return Ok(EntryOutcome::Denied);
        }

        let form = self.forms.form_by_type(CIRCLE_FORM_TYPE)?;

        if let Some(form) = &form {
            if form.description.is_some() && !self.session.has(READ_TERMS_SESSION_KEY) {
                tracing::debug!(form = %form.id, "terms not yet read, redirecting");
                return Ok(EntryOutcome::RedirectToTerms);
            }
        }

        let questions = form
            .as_ref()
            .map(|f| f.questions.clone())
            .unwrap_or_default();
        Ok(EntryOutcome::ShowForm { form, questions })
    }
}
