use regform::{DeliveryMode, LayoutStyle, ProgramConfiguration, ProgramType};

/// A paid, residential workshop. Everything the form can ask for is asked.
pub fn config() -> ProgramConfiguration {
    ProgramConfiguration {
        hdb_fee: 500.0,
        msd_fee: 750.0,
        travel_required: true,
        ..ProgramConfiguration::new(ProgramType::Workshop, "Clay Basics")
            .with_mode(DeliveryMode::Offline)
            .with_fee("INR", 1500.0)
            .with_venue("Studio 4, Hill Road, Pune")
            .with_layout(LayoutStyle::TwoColumn)
    }
}
