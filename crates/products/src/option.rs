//! Shared shape of the fixed selector enumerations (discount band, sort order).

use techstore_core::{DomainError, DomainResult, ValueObject};

/// A value chosen from a fixed, ordered list of options shown in a selector.
///
/// Index order is the display order; index 0 is the default selection.
pub trait ViewOption: ValueObject + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Name used in error messages.
    const KIND: &'static str;

    /// Static label shown in the selector.
    fn label(&self) -> &'static str;

    /// Position of this option in [`ViewOption::ALL`].
    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|option| option == self)
            .unwrap_or_default()
    }

    /// Resolve a selector index back to its option.
    fn from_index(index: usize) -> DomainResult<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            DomainError::validation(format!("unknown {} index {index}", Self::KIND))
        })
    }

    /// Resolve a selector label back to its option.
    fn from_label(label: &str) -> DomainResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.label() == label)
            .ok_or_else(|| DomainError::validation(format!("unknown {} label {label:?}", Self::KIND)))
    }

    /// Labels of every option, in display order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|option| option.label()).collect()
    }
}
