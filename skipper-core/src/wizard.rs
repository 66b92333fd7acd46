//! The six steps of the skip booking wizard.

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A step of the booking wizard, in order.
pub enum WizardStep {
    /// Enter the delivery postcode.
    Postcode,
    /// Describe the waste.
    WasteType,
    /// Pick a skip size.
    SelectSkip,
    /// Check whether a road permit is needed.
    PermitCheck,
    /// Pick the delivery date.
    ChooseDate,
    /// Pay.
    Payment,
}

/// Step this screen implements.
pub const CURRENT_STEP: WizardStep = WizardStep::SelectSkip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Progress of a step relative to the active one.
pub enum StepStatus {
    /// Before the active step.
    Completed,
    /// The active step.
    Active,
    /// After the active step.
    Pending,
}

impl WizardStep {
    /// All steps in display order.
    pub const ALL: [Self; 6] = [
        Self::Postcode,
        Self::WasteType,
        Self::SelectSkip,
        Self::PermitCheck,
        Self::ChooseDate,
        Self::Payment,
    ];

    /// One-based step number.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Postcode => 1,
            Self::WasteType => 2,
            Self::SelectSkip => 3,
            Self::PermitCheck => 4,
            Self::ChooseDate => 5,
            Self::Payment => 6,
        }
    }

    /// Label shown in the progress bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Postcode => "Postcode",
            Self::WasteType => "Waste Type",
            Self::SelectSkip => "Select Skip",
            Self::PermitCheck => "Permit Check",
            Self::ChooseDate => "Choose Date",
            Self::Payment => "Payment",
        }
    }

    /// Step that follows this one, `None` after payment.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL
            .iter()
            .skip_while(|step| **step != self)
            .nth(1)
            .copied()
    }

    /// Status of this step while `active` is the current one.
    #[must_use]
    pub fn status(self, active: Self) -> StepStatus {
        match self.cmp(&active) {
            Ordering::Less => StepStatus::Completed,
            Ordering::Equal => StepStatus::Active,
            Ordering::Greater => StepStatus::Pending,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.label())
    }
}
