use regform::{DeliveryMode, ProgramConfiguration, ProgramType};

/// A free evening talk streamed online.
pub fn config() -> ProgramConfiguration {
    ProgramConfiguration::new(ProgramType::Seminar, "Evening Talk").with_mode(DeliveryMode::Online)
}
