//! OBJECT combinator - records built from named field validators
//!
//! An [`Object`] judges a JSON object field by field. Every declared field is
//! checked, failures included, so one pass reports every problem in the
//! record. Errors from a field are re-rooted under its key.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use crate::foundation::{
    IntoFieldValue, SchemaError, Validate, ValidationError, ValidationErrors, ValidationResult,
};

// ============================================================================
// UNKNOWN KEYS POLICY
// ============================================================================

/// What an object does with keys it does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownKeys {
    /// Accept and drop them from the output.
    #[default]
    Strip,
    /// Accept and copy them to the output unchanged.
    Passthrough,
    /// Reject the object with an `unrecognized_keys` error.
    Strict,
}

// ============================================================================
// TYPE-ERASED FIELDS
// ============================================================================

/// A field validator with its output converted back to JSON.
///
/// `Ok(None)` means the field is absent from the output record.
trait ErasedField: Send + Sync {
    fn check_field(&self, input: Option<&Value>) -> ValidationResult<Option<Value>>;
}

impl<V> ErasedField for V
where
    V: Validate + Send + Sync,
    V::Output: IntoFieldValue,
{
    fn check_field(&self, input: Option<&Value>) -> ValidationResult<Option<Value>> {
        self.validate_field(input)
            .map(IntoFieldValue::into_field_value)
    }
}

struct FieldSlot {
    name: Cow<'static, str>,
    validator: Box<dyn ErasedField>,
}

// ============================================================================
// OBJECT
// ============================================================================

/// A record validator: an ordered list of named fields.
///
/// Produces a [`Map`] holding the output of every field that has a value.
/// The map is keyed by field name and iterates in key order; only the error
/// report follows declaration order. Fields whose output is "no value" (an
/// absent optional) are omitted rather than written as `null`.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::prelude::*;
///
/// let creator = object()
///     .field("id", string())
///     .field("email", email())
///     .field("avatarUrl", url().optional())
///     .build()?;
///
/// let record = creator.validate(&json!({"id": "c1", "email": "a@b.com"}))?;
/// assert!(!record.contains_key("avatarUrl"));
/// ```
pub struct Object {
    fields: Vec<FieldSlot>,
    unknown_keys: UnknownKeys,
}

impl Object {
    /// Starts declaring an object.
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::new()
    }

    /// Declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|slot| slot.name.as_ref())
    }

    /// Returns `true` if `name` is a declared field.
    pub fn has_field(&self, name: &str) -> bool {
        self.field_names().any(|field| field == name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.unknown_keys
    }
}

impl Validate for Object {
    type Output = Map<String, Value>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        let Some(record) = input.as_object() else {
            return Err(ValidationError::invalid_type("object", input).into());
        };

        let mut output = Map::new();
        let mut errors = ValidationErrors::new();

        for slot in &self.fields {
            match slot.validator.check_field(record.get(slot.name.as_ref())) {
                Ok(Some(value)) => {
                    output.insert(slot.name.to_string(), value);
                }
                Ok(None) => {}
                Err(field_errors) => errors.append(field_errors.at(slot.name.clone())),
            }
        }

        if self.unknown_keys != UnknownKeys::Strip {
            let unknown: Vec<(&String, &Value)> = record
                .iter()
                .filter(|(key, _)| !self.has_field(key))
                .collect();

            match self.unknown_keys {
                UnknownKeys::Passthrough => {
                    for (key, value) in unknown {
                        output.insert(key.clone(), value.clone());
                    }
                }
                UnknownKeys::Strict if !unknown.is_empty() => {
                    errors.add(ValidationError::unrecognized_keys(
                        unknown.iter().map(|(key, _)| key.as_str()),
                    ));
                }
                _ => {}
            }
        }

        errors.into_result(output)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .field("unknown_keys", &self.unknown_keys)
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Declares the fields of an [`Object`].
///
/// Declaration order is report order: errors come back in the order fields
/// were added here.
#[must_use = "builder does nothing until .build() is called"]
pub struct ObjectBuilder {
    fields: Vec<FieldSlot>,
    unknown_keys: UnknownKeys,
    duplicate: Option<String>,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            unknown_keys: UnknownKeys::default(),
            duplicate: None,
        }
    }

    /// Adds a field.
    pub fn field<V>(mut self, name: impl Into<Cow<'static, str>>, validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
        V::Output: IntoFieldValue,
    {
        let name = name.into();
        if self.duplicate.is_none() && self.fields.iter().any(|slot| slot.name == name) {
            self.duplicate = Some(name.to_string());
        }
        self.fields.push(FieldSlot {
            name,
            validator: Box::new(validator),
        });
        self
    }

    /// Sets the unknown-keys policy.
    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Shorthand for [`UnknownKeys::Strict`].
    pub fn strict(self) -> Self {
        self.unknown_keys(UnknownKeys::Strict)
    }

    /// Shorthand for [`UnknownKeys::Passthrough`].
    pub fn passthrough(self) -> Self {
        self.unknown_keys(UnknownKeys::Passthrough)
    }

    /// Finishes the declaration.
    ///
    /// # Errors
    ///
    /// [`SchemaError::DuplicateField`] if a name was declared twice.
    pub fn build(self) -> Result<Object, SchemaError> {
        if let Some(name) = self.duplicate {
            return Err(SchemaError::DuplicateField(name));
        }
        Ok(Object {
            fields: self.fields,
            unknown_keys: self.unknown_keys,
        })
    }
}

impl Default for ObjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts declaring an object.
pub fn object() -> ObjectBuilder {
    ObjectBuilder::new()
}

// ============================================================================
// TESTS
// ============================================================================
