//! Multi-step state for the "buy me a coffee" wizard.
//!
//! The flow is deliberately linear: pick an amount, optionally add a name
//! and message, confirm, then hand off to the server-shaped checkout URL.
//! Each step gates the next; going back never loses entered data.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

/// Smallest accepted donation, in cents.
pub const MIN_AMOUNT_CENTS: u32 = 100;

/// Largest accepted donation, in cents. Mirrors the server-side bound.
pub const MAX_AMOUNT_CENTS: u32 = 50_000;

/// Preset amounts offered as one-click choices.
pub const SUGGESTED_AMOUNTS_CENTS: &[u32] = &[300, 500, 1000];

/// Current step of the wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupportStep {
    /// Choosing a preset or custom amount.
    #[default]
    Amount,
    /// Optional name and public message.
    Details,
    /// Review before redirecting to the hosted payment page.
    Confirm,
}

/// Wizard state, owned by the support page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupportWizard {
    pub step: SupportStep,
    /// Chosen amount; `None` until a valid choice is made.
    pub amount_cents: Option<u32>,
    /// Raw text of the custom-amount input, kept for re-display.
    pub custom_amount: String,
    pub name: String,
    pub message: String,
}

impl SupportWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick one of the preset amounts.
    pub fn choose_preset(&mut self, cents: u32) {
        if SUGGESTED_AMOUNTS_CENTS.contains(&cents) {
            self.amount_cents = Some(cents);
            self.custom_amount.clear();
        }
    }

    /// Interpret the custom-amount field (whole euros). Out-of-range or
    /// unparseable input clears the chosen amount so `advance` blocks.
    pub fn set_custom_amount(&mut self, raw: &str) {
        self.custom_amount = raw.to_owned();
        self.amount_cents = raw
            .trim()
            .parse::<u32>()
            .ok()
            .map(|euros| euros.saturating_mul(100))
            .filter(|&cents| (MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS).contains(&cents));
    }

    /// Whether the current step's requirements are met.
    #[must_use]
    pub fn step_complete(&self) -> bool {
        match self.step {
            SupportStep::Amount => self.amount_cents.is_some(),
            // Name and message are optional.
            SupportStep::Details | SupportStep::Confirm => true,
        }
    }

    /// Move to the next step if the current one is complete. Returns
    /// whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.step_complete() {
            return false;
        }
        let next = match self.step {
            SupportStep::Amount => SupportStep::Details,
            SupportStep::Details | SupportStep::Confirm => SupportStep::Confirm,
        };
        let changed = next != self.step;
        self.step = next;
        changed
    }

    /// Step backwards, keeping all entered data.
    pub fn back(&mut self) {
        self.step = match self.step {
            SupportStep::Amount | SupportStep::Details => SupportStep::Amount,
            SupportStep::Confirm => SupportStep::Details,
        };
    }

    /// Display name for the confirmation screen.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() { "Anonymous" } else { trimmed }
    }
}
