//! Loading program configurations and field catalogues from TOML files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use regform::{FieldCatalogue, ProgramConfiguration, canonical_catalogue};

/// Read and parse a program configuration file.
pub fn load_config(path: &Path) -> Result<ProgramConfiguration> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    parse_config(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Read a catalogue file, or fall back to the standard catalogue.
pub fn load_catalogue(path: Option<&Path>) -> Result<FieldCatalogue> {
    let Some(path) = path else {
        tracing::debug!("using the standard field catalogue");
        return Ok(canonical_catalogue());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalogue file: {:?}", path))?;
    let catalogue: FieldCatalogue = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse catalogue file: {:?}", path))?;

    let unknown: Vec<_> = catalogue
        .iter()
        .filter(|f| f.kind().is_unknown())
        .map(|f| f.id())
        .collect();
    if !unknown.is_empty() {
        tracing::warn!(?unknown, "fields with an unknown type will show their label only");
    }

    Ok(catalogue)
}

fn parse_config(contents: &str) -> Result<ProgramConfiguration> {
    let config: ProgramConfiguration = toml::from_str(contents)?;

    // An unfinished wizard step is still worth previewing; bad fees are not.
    match config.check() {
        Ok(()) => {}
        Err(e) if e.is_incomplete() => tracing::warn!("{e}"),
        Err(e) => bail!(e),
    }

    Ok(config)
}

/// Serialize a configuration the way [`load_config`] reads it.
pub fn to_toml(config: &ProgramConfiguration) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config to TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform::{DeliveryMode, FieldKind, LayoutStyle, ProgramType};
    use std::io::Write;

    #[test]
    fn parse_minimal_config() -> Result<()> {
        let config = parse_config(
            r#"
            program_type = "workshop"
            program_name = "Clay Basics"
            mode = "offline"
            layout_style = "two-column"
            "#,
        )?;

        assert_eq!(config.program_type, Some(ProgramType::Workshop));
        assert_eq!(config.mode, DeliveryMode::Offline);
        assert_eq!(config.layout_style, LayoutStyle::TwoColumn);
        assert_eq!(config.currency, "INR");
        Ok(())
    }

    #[test]
    fn incomplete_config_still_loads() -> Result<()> {
        let config = parse_config(r#"mode = "hybrid""#)?;
        assert!(config.program_type.is_none());
        Ok(())
    }

    #[test]
    fn negative_fee_is_rejected() {
        let err = parse_config(
            r#"
            program_type = "seminar"
            program_name = "Evening Talk"
            payment_required = true
            program_fee = -10.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("program_fee"));
    }

    #[test]
    fn sample_survives_a_round_trip() -> Result<()> {
        let sample = example_programs::offline_workshop::config();
        assert_eq!(parse_config(&to_toml(&sample)?)?, sample);
        Ok(())
    }

    #[test]
    fn load_catalogue_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"
            [[fields]]
            id = "fullName"
            label = "Full Name"
            type = "text"
            section = "personal"
            mandatory = true
            prefilled = true

            [[fields]]
            id = "mealPlan"
            label = "Meal Plan"
            type = "select"
            options = ["Veg", "Vegan"]
            section = "accommodation"

            [[fields]]
            id = "signature"
            label = "Signature"
            type = "canvas"
            section = "personal"
            "#
        )?;

        let catalogue = load_catalogue(Some(file.path()))?;
        assert_eq!(catalogue.len(), 3);
        assert_eq!(
            catalogue.get("mealPlan").map(|f| f.kind().options().len()),
            Some(2)
        );
        assert_eq!(
            catalogue.get("signature").map(|f| f.kind().clone()),
            Some(FieldKind::Unknown)
        );
        Ok(())
    }

    #[test]
    fn duplicate_ids_fail_to_load() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"
            [[fields]]
            id = "city"
            label = "City"
            type = "text"
            section = "personal"

            [[fields]]
            id = "city"
            label = "City Again"
            type = "text"
            section = "travel"
            "#
        )?;

        let err = load_catalogue(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("Duplicate field id: city"));
        Ok(())
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_config(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn no_catalogue_means_the_standard_one() -> Result<()> {
        assert_eq!(load_catalogue(None)?.len(), 32);
        Ok(())
    }
}
