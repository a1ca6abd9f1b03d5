use super::record::{default_record, FormRecord};
use crate::store::{Store, SubscriptionId};

/// Number of steps in the form.
pub const TOTAL_STEPS: usize = 4;

/// Step labels, in order. Step `n` is `STEP_NAMES[n - 1]`.
pub const STEP_NAMES: [&str; TOTAL_STEPS] = [
    "Welcome & Eligibility",
    "Contact Details",
    "About You",
    "Consent & Submit",
];

/// One page load's worth of form state.
///
/// The session owns the field values and the step pointer. Both live in
/// [`Store`]s so persistence (or a UI) can subscribe to changes. The CSRF
/// token is held separately and is never part of any store.
pub struct FormSession {
    csrf_token: String,
    form_data: Store<FormRecord>,
    current_step: Store<usize>,
}

impl FormSession {
    /// Token supplied by the server for this page load.
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// Clone of the current field values.
    pub fn form_data(&self) -> FormRecord {
        self.form_data.get()
    }

    /// Read the field values without cloning.
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FormRecord) -> R,
    {
        self.form_data.read(f)
    }

    /// Mutate the field values. Subscribers see the result.
    pub fn update_form<F>(&self, f: F)
    where
        F: FnOnce(&mut FormRecord),
    {
        self.form_data.update(f);
    }

    /// Replace all field values.
    pub fn set_form(&self, record: FormRecord) {
        self.form_data.set(record);
    }

    /// The observable field values.
    pub fn form_store(&self) -> &Store<FormRecord> {
        &self.form_data
    }

    /// The step pointer. Writes must go through [`go_to_step`](Self::go_to_step)
    /// so the step stays within `1..=TOTAL_STEPS`.
    pub(crate) fn step_store(&self) -> &Store<usize> {
        &self.current_step
    }

    /// Call `callback` with the new step after every step change.
    pub fn subscribe_step<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.current_step.subscribe(move |step: &usize| callback(*step))
    }

    pub fn total_steps(&self) -> usize {
        TOTAL_STEPS
    }

    pub fn step_names(&self) -> &'static [&'static str] {
        &STEP_NAMES
    }

    /// Current step, 1-indexed.
    pub fn current_step(&self) -> usize {
        self.current_step.get()
    }

    pub fn current_step_name(&self) -> &'static str {
        STEP_NAMES[self.current_step() - 1]
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step() == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step() == TOTAL_STEPS
    }

    /// Move to `step`, clamped to `1..=TOTAL_STEPS`. Returns the new step.
    pub fn go_to_step(&self, step: usize) -> usize {
        let step = step.clamp(1, TOTAL_STEPS);
        if self.current_step() != step {
            self.current_step.set(step);
        }
        step
    }

    /// Advance one step; stays put on the last step.
    pub fn next_step(&self) -> usize {
        self.go_to_step(self.current_step() + 1)
    }

    /// Go back one step; stays put on the first step.
    pub fn prev_step(&self) -> usize {
        self.go_to_step(self.current_step().saturating_sub(1))
    }

    /// Share of the form completed when standing on the current step.
    pub fn progress_percent(&self) -> u8 {
        ((self.current_step() * 100) / TOTAL_STEPS) as u8
    }

    /// Reset the fields to defaults and return to the first step.
    ///
    /// The CSRF token and step names are left alone.
    pub fn clear_draft(&self) {
        self.form_data.set(default_record());
        self.current_step.set(1);
    }
}

impl std::fmt::Debug for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("csrf_token", &"<redacted>")
            .field("current_step", &self.current_step())
            .field("form_data", &self.form_data())
            .finish()
    }
}

/// Build a session for a fresh page load.
///
/// A `None` rehydrated record means there was no usable draft and the
/// fields start at their defaults. A present record is used as-is. The
/// step always starts at 1 and the token always comes from the argument.
pub fn initialize(csrf_token: impl Into<String>, rehydrated: Option<FormRecord>) -> FormSession {
    FormSession {
        csrf_token: csrf_token.into(),
        form_data: Store::new(rehydrated.unwrap_or_else(default_record)),
        current_step: Store::new(1),
    }
}

/// Reset `session` to defaults. See [`FormSession::clear_draft`].
pub fn clear_draft(session: &FormSession) {
    session.clear_draft();
}
