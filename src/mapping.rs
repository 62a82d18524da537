//! A single top-level key of a YAMLDoc document.
//!
//! A [`Mapping`] binds a key to its value and to the docblock found above the
//! key in the source. The choice section is derived from the docblock every
//! time the docblock is assigned, so the two never disagree. A malformed
//! `Choose` directive is kept on the mapping as a [`ChoiceSectionError`] for
//! the validator to report.

use serde_yaml::Value;

use crate::choices::{ChoiceRange, ChoiceSection, ChoiceSectionError, derive_choices};
use crate::core::YamlDocError;
use crate::validator::Validator;
use crate::yaml::display_key;

/// One key/value pair of a document plus its YAMLDoc block.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    key: Value,
    value: Value,
    docblock: Option<Vec<String>>,
    choice_section: Result<Option<ChoiceSection>, ChoiceSectionError>,
}

impl Mapping {
    /// Creates a mapping without a docblock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamldoc_cli::mapping::Mapping;
    ///
    /// let mapping = Mapping::new("appname", "Hello World");
    /// assert_eq!(mapping.key().as_str(), Some("appname"));
    /// assert!(mapping.docblock().is_none());
    /// ```
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            docblock: None,
            choice_section: Ok(None),
        }
    }

    /// Starts building a mapping; the key is required by [`MappingBuilder::build`].
    pub fn builder() -> MappingBuilder {
        MappingBuilder::default()
    }

    /// The key, typically the name of a configuration setting.
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// The key as plain text, as used in validation messages.
    pub fn key_text(&self) -> String {
        display_key(&self.key)
    }

    /// The value, any structure expressible in YAML.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replaces the value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// The unformatted comment lines describing this mapping.
    ///
    /// `None` when no docblock was attached, `Some(&[])` when the key was found
    /// with no comment above it.
    pub fn docblock(&self) -> Option<&[String]> {
        self.docblock.as_deref()
    }

    /// Replaces the docblock and re-derives the choice section from it.
    ///
    /// A docblock without a `Choose` directive clears any previously derived
    /// choices. A malformed directive also clears them and is recorded for
    /// [`choice_error`](Self::choice_error).
    pub fn set_docblock(&mut self, docblock: Option<Vec<String>>) {
        self.choice_section = derive_choices(docblock.as_deref());
        if let Err(e) = &self.choice_section {
            tracing::debug!("Ignoring choices of '{}': {e}", self.key_text());
        }
        self.docblock = docblock;
    }

    /// The derived choice section, if the docblock has a well-formed `Choose` directive.
    pub fn choice_section(&self) -> Option<&ChoiceSection> {
        self.choice_section.as_ref().ok().and_then(Option::as_ref)
    }

    /// Why the docblock's `Choose` directive could not be decoded.
    pub fn choice_error(&self) -> Option<&ChoiceSectionError> {
        self.choice_section.as_ref().err()
    }

    /// Allowed values listed in the docblock.
    pub fn choices(&self) -> Option<&[Value]> {
        self.choice_section().map(|section| section.choices.as_slice())
    }

    /// How many of [`choices`](Self::choices) may be selected.
    pub fn choice_range(&self) -> Option<ChoiceRange> {
        self.choice_section().map(|section| section.range)
    }

    /// Validates the docblock and the value, reporting findings to the validator's sink.
    pub fn validate(&self, validator: &Validator) -> bool {
        validator.validate_mapping(self)
    }

    /// Renders the docblock lines followed by the `key: value` YAML.
    ///
    /// No document marker is emitted. The result ends with a newline.
    ///
    /// ```rust
    /// use yamldoc_cli::mapping::Mapping;
    ///
    /// let mut mapping = Mapping::new("appname", "Hello World");
    /// mapping.set_docblock(Some(vec!["# Name shown in the title bar".to_string()]));
    /// assert_eq!(mapping.to_yaml().unwrap(), "# Name shown in the title bar\nappname: Hello World\n");
    /// ```
    pub fn to_yaml(&self) -> Result<String, YamlDocError> {
        let mut entry = serde_yaml::Mapping::new();
        entry.insert(self.key.clone(), self.value.clone());
        let rendered = serde_yaml::to_string(&entry)?;

        let mut yaml = String::new();
        for line in self.docblock.iter().flatten() {
            yaml.push_str(line);
            yaml.push('\n');
        }
        yaml.push_str(&rendered);
        Ok(yaml)
    }
}

/// Builder for [`Mapping`] that rejects a missing key.
#[derive(Debug, Clone, Default)]
pub struct MappingBuilder {
    key: Option<Value>,
    value: Option<Value>,
    docblock: Option<Vec<String>>,
}

impl MappingBuilder {
    /// Sets the key.
    pub fn key(mut self, key: impl Into<Value>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the value; defaults to null.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the docblock.
    pub fn docblock(mut self, docblock: Vec<String>) -> Self {
        self.docblock = Some(docblock);
        self
    }

    /// Builds the mapping.
    ///
    /// # Errors
    ///
    /// [`YamlDocError::MissingKey`] when no key (or a null key) was given.
    pub fn build(self) -> Result<Mapping, YamlDocError> {
        let key = match self.key {
            Some(Value::Null) | None => return Err(YamlDocError::MissingKey),
            Some(key) => key,
        };

        let mut mapping = Mapping::new(key, self.value.unwrap_or(Value::Null));
        mapping.set_docblock(self.docblock);
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docblock(lines: &[&str]) -> Option<Vec<String>> {
        Some(lines.iter().map(|line| (*line).to_string()).collect())
    }

    #[test]
    fn test_builder_requires_key() {
        let result = Mapping::builder().value("Hello World").build();
        assert!(matches!(result, Err(YamlDocError::MissingKey)));

        let result = Mapping::builder().key(Value::Null).build();
        assert!(matches!(result, Err(YamlDocError::MissingKey)));
    }

    #[test]
    fn test_builder_with_valid_options() {
        let mapping = Mapping::builder().key("appname").value("Hello World").build().unwrap();
        assert_eq!(mapping.key(), &Value::from("appname"));
        assert_eq!(mapping.value(), &Value::from("Hello World"));
        assert!(mapping.docblock().is_none());
        assert!(mapping.choices().is_none());
        assert!(mapping.choice_range().is_none());
    }

    #[test]
    fn test_value_can_change() {
        let mut mapping = Mapping::new("appname", "Hello World");
        mapping.set_value("new value");
        assert_eq!(mapping.value(), &Value::from("new value"));
    }

    #[test]
    fn test_docblock_can_change() {
        let mut mapping = Mapping::new("appname", "Hello World");
        mapping.set_docblock(docblock(&["# Added after instantiation"]));
        assert_eq!(mapping.docblock().unwrap().len(), 1);
        assert!(mapping.docblock().unwrap()[0].contains("Added"));
    }

    #[test]
    fn test_docblock_derives_inline_choices() {
        let mut mapping = Mapping::new("fruit", "oranges");
        mapping
            .set_docblock(docblock(&["# Description", "# Choose: ['oranges', 'bananas']"]));

        let choices = mapping.choices().unwrap();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices.first(), Some(&Value::from("oranges")));
        assert_eq!(choices.last(), Some(&Value::from("bananas")));
        assert_eq!(mapping.choice_range(), Some(ChoiceRange::Exactly(1)));
    }

    #[test]
    fn test_docblock_derives_block_choices() {
        let mut mapping = Mapping::new("fruit", "oranges");
        mapping
            .set_docblock(docblock(&["# Description", "# Choose (2):", "# - oranges", "# - bananas"]));
        assert_eq!(mapping.choices().unwrap().len(), 2);
        assert_eq!(mapping.choice_range(), Some(ChoiceRange::Exactly(2)));

        mapping
            .set_docblock(docblock(&["# Description", "# Choose (1..2):", "# - oranges", "# - bananas"]));
        assert_eq!(
            mapping.choice_range(),
            Some(ChoiceRange::Between {
                min: 1,
                max: 2
            })
        );
    }

    #[test]
    fn test_reassigning_docblock_without_directive_clears_choices() {
        let mut mapping = Mapping::new("fruit", "oranges");
        mapping.set_docblock(docblock(&["# Description", "# Choose: [oranges]"]));
        assert!(mapping.choices().is_some());

        mapping.set_docblock(docblock(&["# Just a description"]));
        assert!(mapping.choices().is_none());
        assert!(mapping.choice_range().is_none());
    }

    #[test]
    fn test_malformed_directive_is_recorded() {
        let mut mapping = Mapping::new("port", 8080);
        mapping.set_docblock(docblock(&["# Port", "# Choose: [80, 8080]"]));
        assert_eq!(mapping.choices().unwrap().len(), 2);
        assert!(mapping.choice_error().is_none());

        mapping.set_docblock(docblock(&["# Port", "# Choose: any port above 1024"]));
        assert_eq!(mapping.docblock().unwrap()[1], "# Choose: any port above 1024");
        assert!(mapping.choices().is_none());
        assert!(mapping.choice_range().is_none());
        assert_eq!(mapping.choice_error().unwrap().line, 2);

        mapping.set_docblock(docblock(&["# Port"]));
        assert!(mapping.choice_error().is_none());
    }

    #[test]
    fn test_builder_accepts_malformed_directive() {
        let mapping = Mapping::builder()
            .key("levels")
            .docblock(vec!["# Levels".to_string(), "# Choose (3..1): [a]".to_string()])
            .build()
            .unwrap();
        assert!(mapping.choice_error().unwrap().reason.contains("3..1"));
    }

    #[test]
    fn test_to_yaml_round_trip() {
        let value: Value = serde_yaml::from_str("[debug, info]").unwrap();
        let mapping = Mapping::builder()
            .key("levels")
            .value(value.clone())
            .docblock(vec!["# Log levels".to_string(), "# Choose (1..2): [debug, info, warn]".to_string()])
            .build()
            .unwrap();

        let yaml = mapping.to_yaml().unwrap();
        assert!(yaml.starts_with("# Log levels\n# Choose (1..2): [debug, info, warn]\n"));
        assert!(!yaml.contains("---"));

        let decoded: serde_yaml::Mapping = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.get("levels"), Some(&value));
    }

    #[test]
    fn test_to_yaml_without_docblock() {
        let mapping = Mapping::new(8080, true);
        assert_eq!(mapping.to_yaml().unwrap(), "8080: true\n");
    }
}
