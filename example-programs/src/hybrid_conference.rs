use regform::{DeliveryMode, LayoutStyle, ProgramConfiguration, ProgramType, UserType};

/// A hybrid conference previewed step by step as a returning participant.
pub fn config() -> ProgramConfiguration {
    ProgramConfiguration::new(ProgramType::Conference, "Inner Summit")
        .with_mode(DeliveryMode::Hybrid)
        .with_venue("Convention Centre, Hall B")
        .with_layout(LayoutStyle::QuestionByQuestion)
        .with_user_type(UserType::Existing)
}
