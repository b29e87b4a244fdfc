use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProgramConfiguration;

/// A named group of fields shown together under one heading.
///
/// The declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Personal,
    Contact,
    #[serde(alias = "invoice")]
    Payment,
    Travel,
    Accommodation,
}

impl Section {
    /// All sections, in display order.
    pub const ALL: [Section; 5] = [
        Section::Personal,
        Section::Contact,
        Section::Payment,
        Section::Travel,
        Section::Accommodation,
    ];

    /// Heading shown above the section.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Contact => "Contact Details",
            Self::Payment => "Invoice Details",
            Self::Travel => "Travel Information",
            Self::Accommodation => "Accommodation",
        }
    }

    /// Whether this section is part of the form for the given program.
    ///
    /// Payment fields need a paid program; travel and accommodation need
    /// participants to show up somewhere.
    pub fn is_active(self, config: &ProgramConfiguration) -> bool {
        match self {
            Self::Personal | Self::Contact => true,
            Self::Payment => config.payment_required,
            Self::Travel | Self::Accommodation => config.mode.needs_venue(),
        }
    }

    /// Whether the section only exists because of the delivery mode.
    pub fn is_mode_dependent(self) -> bool {
        matches!(self, Self::Travel | Self::Accommodation)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Contact => "contact",
            Self::Payment => "payment",
            Self::Travel => "travel",
            Self::Accommodation => "accommodation",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeliveryMode;

    #[test]
    fn online_program_has_no_travel() {
        let config = ProgramConfiguration::default();
        assert_eq!(config.mode, DeliveryMode::Online);

        assert!(Section::Personal.is_active(&config));
        assert!(Section::Contact.is_active(&config));
        assert!(!Section::Payment.is_active(&config));
        assert!(!Section::Travel.is_active(&config));
        assert!(!Section::Accommodation.is_active(&config));
    }

    #[test]
    fn hybrid_paid_program_has_everything() {
        let config = ProgramConfiguration {
            mode: DeliveryMode::Hybrid,
            payment_required: true,
            ..Default::default()
        };

        assert!(Section::ALL.iter().all(|s| s.is_active(&config)));
    }

    #[test]
    fn display_order_matches_declaration() {
        let mut sorted = Section::ALL;
        sorted.sort();
        assert_eq!(sorted, Section::ALL);
    }
}
