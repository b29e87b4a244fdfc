use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, LayoutStyle, UserType};

/// The data entered in earlier wizard steps.
///
/// Owned by the wizard host; the preview core only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfiguration {
    /// Selected program type, if any.
    pub program_type: Option<ProgramType>,

    /// Display name of the program.
    pub program_name: String,

    /// How participants attend.
    pub mode: DeliveryMode,

    /// Whether participants pay to register.
    pub payment_required: bool,

    /// Program fee shown in the fee summary.
    pub program_fee: f64,

    /// Currency code for `program_fee`.
    pub currency: String,

    pub hdb_fee: f64,

    pub msd_fee: f64,

    /// Where the program takes place (offline and hybrid programs).
    pub venue_address: String,

    pub travel_required: bool,

    /// Layout chosen for the participant-facing form.
    pub layout_style: LayoutStyle,

    /// Which kind of participant the preview is shown as.
    pub user_type: UserType,
}

impl Default for ProgramConfiguration {
    fn default() -> Self {
        Self {
            program_type: None,
            program_name: String::new(),
            mode: DeliveryMode::Online,
            payment_required: false,
            program_fee: 0.0,
            currency: "INR".to_string(),
            hdb_fee: 0.0,
            msd_fee: 0.0,
            venue_address: String::new(),
            travel_required: false,
            layout_style: LayoutStyle::SingleColumn,
            user_type: UserType::New,
        }
    }
}

impl ProgramConfiguration {
    /// Create a configuration with the given type and name, everything else default.
    pub fn new(program_type: ProgramType, program_name: impl Into<String>) -> Self {
        Self {
            program_type: Some(program_type),
            program_name: program_name.into(),
            ..Default::default()
        }
    }

    /// Set the delivery mode.
    pub fn with_mode(mut self, mode: DeliveryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Require payment with the given program fee.
    pub fn with_fee(mut self, currency: impl Into<String>, program_fee: f64) -> Self {
        self.payment_required = true;
        self.currency = currency.into();
        self.program_fee = program_fee;
        self
    }

    /// Set the venue address.
    pub fn with_venue(mut self, venue_address: impl Into<String>) -> Self {
        self.venue_address = venue_address.into();
        self
    }

    /// Set the layout style.
    pub fn with_layout(mut self, layout_style: LayoutStyle) -> Self {
        self.layout_style = layout_style;
        self
    }

    /// Set the user type the preview is shown as.
    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    /// Check the configuration is complete enough to build a form from.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.program_type.is_none() {
            return Err(ConfigError::MissingProgramType);
        }
        if self.program_name.trim().is_empty() {
            return Err(ConfigError::BlankProgramName);
        }
        if self.payment_required {
            for (name, value) in [
                ("program_fee", self.program_fee),
                ("hdb_fee", self.hdb_fee),
                ("msd_fee", self.msd_fee),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidFee { name, value });
                }
            }
        }
        Ok(())
    }
}

/// The kind of program being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramType {
    Workshop,
    Seminar,
    Conference,
}

impl ProgramType {
    pub const ALL: [ProgramType; 3] = [
        ProgramType::Workshop,
        ProgramType::Seminar,
        ProgramType::Conference,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Workshop => "Workshop",
            Self::Seminar => "Seminar",
            Self::Conference => "Conference",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Workshop => "Hands-on sessions for skill development",
            Self::Seminar => "Informative talks and discussions",
            Self::Conference => "Large-scale events with multiple speakers",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How participants attend the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    #[default]
    Online,
    Offline,
    Hybrid,
}

impl DeliveryMode {
    /// Whether participants travel to a venue.
    pub fn needs_venue(self) -> bool {
        !matches!(self, Self::Online)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
