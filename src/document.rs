//! An ordered collection of mappings making up one YAML document.

use crate::core::YamlDocError;
use crate::mapping::Mapping;
use crate::validator::Validator;
use serde_yaml::Value;

/// One `---` separated document of a YAMLDoc file.
///
/// Mappings keep the order in which their keys appear in the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    mappings: Vec<Mapping>,
}

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mappings(mappings: Vec<Mapping>) -> Self {
        Self {
            mappings,
        }
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn mappings_mut(&mut self) -> &mut Vec<Mapping> {
        &mut self.mappings
    }

    pub fn push(&mut self, mapping: Mapping) {
        self.mappings.push(mapping);
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Looks up a mapping by key.
    pub fn get(&self, key: impl Into<Value>) -> Option<&Mapping> {
        let key = key.into();
        self.mappings.iter().find(|mapping| mapping.key() == &key)
    }

    /// Validates every mapping; see [`Validator::validate_document`].
    pub fn validate(&self, validator: &Validator) -> bool {
        validator.validate_document(self)
    }

    /// Renders the document: a `---` marker line, then each mapping's YAML
    /// separated by a blank line.
    ///
    /// ```rust
    /// use yamldoc_cli::document::Document;
    /// use yamldoc_cli::mapping::Mapping;
    ///
    /// let document = Document::with_mappings(vec![Mapping::new("a", 1), Mapping::new("b", 2)]);
    /// assert_eq!(document.to_yaml().unwrap(), "---\na: 1\n\nb: 2\n");
    /// ```
    pub fn to_yaml(&self) -> Result<String, YamlDocError> {
        let rendered = self.mappings.iter().map(Mapping::to_yaml).collect::<Result<Vec<_>, _>>()?;
        Ok(format!("---\n{}", rendered.join("\n")))
    }
}

impl From<Vec<Mapping>> for Document {
    fn from(mappings: Vec<Mapping>) -> Self {
        Self::with_mappings(mappings)
    }
}
