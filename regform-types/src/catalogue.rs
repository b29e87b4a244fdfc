use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{CatalogueError, FieldDescriptor};

/// An ordered list of field descriptors with unique ids.
///
/// The order is the order fields appear in within their section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogueFile", into = "CatalogueFile")]
pub struct FieldCatalogue {
    fields: Vec<FieldDescriptor>,
}

/// On-disk shape: a list of `[[fields]]` tables.
#[derive(Serialize, Deserialize)]
struct CatalogueFile {
    #[serde(default)]
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<CatalogueFile> for FieldCatalogue {
    type Error = CatalogueError;

    fn try_from(file: CatalogueFile) -> Result<Self, Self::Error> {
        Self::new(file.fields)
    }
}

impl From<FieldCatalogue> for CatalogueFile {
    fn from(catalogue: FieldCatalogue) -> Self {
        Self {
            fields: catalogue.fields,
        }
    }
}

impl FieldCatalogue {
    /// Create a catalogue, rejecting duplicate field ids.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.id()) {
                return Err(CatalogueError::DuplicateId(field.id().to_string()));
            }
        }
        Ok(Self { fields })
    }

    /// Create an empty catalogue.
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Get the fields.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by id.
    pub fn get(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Collects descriptors, keeping the first occurrence of each id.
impl FromIterator<FieldDescriptor> for FieldCatalogue {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let fields = iter
            .into_iter()
            .filter(|field| seen.insert(field.id().to_string()))
            .collect();
        Self { fields }
    }
}

impl<'a> IntoIterator for &'a FieldCatalogue {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
