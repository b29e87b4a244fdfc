//! Sample programs and catalogues for tests, demos and the CLI.

pub mod catalogues;
pub mod hybrid_conference;
pub mod offline_workshop;
pub mod online_seminar;

use regform::ProgramConfiguration;

/// Names accepted by [`by_name`].
pub const SAMPLE_NAMES: [&str; 3] = ["online-seminar", "offline-workshop", "hybrid-conference"];

/// Look up a sample program by name.
pub fn by_name(name: &str) -> Option<ProgramConfiguration> {
    match name {
        "online-seminar" => Some(online_seminar::config()),
        "offline-workshop" => Some(offline_workshop::config()),
        "hybrid-conference" => Some(hybrid_conference::config()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_passes_the_wizard_check() {
        for name in SAMPLE_NAMES {
            let config = by_name(name).expect("listed sample exists");
            assert!(config.check().is_ok(), "{name} should be complete");
        }
        assert!(by_name("nope").is_none());
    }
}
