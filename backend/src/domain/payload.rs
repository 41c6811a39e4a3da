//! Structurally decoded request payloads.
//!
//! Every field decodes into a [`Field`], which records whether the value was
//! absent, present with the expected kind, or present with another kind.
//! Decoding never fails on a single field, so the validation pipeline can
//! report every problem at once instead of the first serde error.

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::Error;

/// Primitive kind expected for a decoded field, as named in validation
/// messages.
pub trait FieldKind {
    /// Name used in "`<field>` must be of type `<kind>`" reasons.
    const KIND: &'static str;
}

impl FieldKind for String {
    const KIND: &'static str = "string";
}

impl FieldKind for bool {
    const KIND: &'static str = "boolean";
}

impl<T> FieldKind for Vec<T> {
    const KIND: &'static str = "array";
}

/// Outcome of decoding one payload field.
///
/// # Examples
/// ```
/// use customers::domain::{ContactPayload, Field};
/// use serde_json::json;
///
/// let payload: ContactPayload =
///     serde_json::from_value(json!({ "email": 1, "main": true })).expect("decodes");
/// assert_eq!(payload.email, Field::Mismatched);
/// assert_eq!(payload.phone, Field::Missing);
/// assert_eq!(payload.main, Field::Present(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The key was not supplied.
    Missing,
    /// The key was supplied with a value of another kind (including `null`).
    Mismatched,
    /// The key was supplied with a value of the expected kind.
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> Field<T> {
    /// Borrow the decoded value, if any.
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing | Self::Mismatched => None,
        }
    }

    /// Take the decoded value, if any.
    pub fn into_present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing | Self::Mismatched => None,
        }
    }

    /// Whether the key was supplied at all.
    pub fn is_supplied(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).map_or(Self::Mismatched, Self::Present))
    }
}

/// Incoming contact fields. Any client-supplied `id` is ignored.
///
/// Only a JSON object decodes; arrays and scalars are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPayload {
    /// Email address.
    pub email: Field<String>,
    /// Phone number.
    pub phone: Field<String>,
    /// Main flag.
    pub main: Field<bool>,
}

/// Incoming address fields. Any client-supplied `id` is ignored.
///
/// Decodes from JSON objects only, like [`ContactPayload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPayload {
    /// Free-form address line.
    pub line: Field<String>,
}

fn object_fields<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(fields) => Ok(fields),
        other => Err(D::Error::invalid_type(unexpected(&other), &"a JSON object")),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(flag) => Unexpected::Bool(*flag),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(text) => Unexpected::Str(text),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn take_field<T>(fields: &mut Map<String, Value>, key: &str) -> Field<T>
where
    T: DeserializeOwned,
{
    fields.remove(key).map_or(Field::Missing, |value| {
        serde_json::from_value(value).map_or(Field::Mismatched, Field::Present)
    })
}

impl<'de> Deserialize<'de> for ContactPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = object_fields(deserializer)?;
        Ok(Self {
            email: take_field(&mut fields, "email"),
            phone: take_field(&mut fields, "phone"),
            main: take_field(&mut fields, "main"),
        })
    }
}

impl<'de> Deserialize<'de> for AddressPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = object_fields(deserializer)?;
        Ok(Self {
            line: take_field(&mut fields, "line"),
        })
    }
}

/// Incoming customer document, used for creation and basic-data updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerPayload {
    /// Full name.
    pub full_name: Field<String>,
    /// Birth date text.
    pub birthdate: Field<String>,
    /// Active flag.
    pub active: Field<bool>,
    /// Contacts; elements that are not objects decode as mismatched.
    pub contacts: Field<Vec<Field<ContactPayload>>>,
    /// Addresses; elements that are not objects decode as mismatched.
    pub addresses: Field<Vec<Field<AddressPayload>>>,
}

/// Reason reported when a request body is not a JSON object.
pub const BODY_NOT_OBJECT: &str = "body must be a JSON object";

fn decode_object<T>(body: Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    if !body.is_object() {
        return Err(Error::validation(vec![BODY_NOT_OBJECT.to_owned()]));
    }
    serde_json::from_value(body).map_err(|err| Error::validation(vec![err.to_string()]))
}

impl CustomerPayload {
    /// Decode a raw JSON body.
    ///
    /// # Examples
    /// ```
    /// use customers::domain::{CustomerPayload, Field};
    /// use serde_json::json;
    ///
    /// let payload = CustomerPayload::from_json(json!({ "active": false })).expect("object");
    /// assert_eq!(payload.active, Field::Present(false));
    /// assert!(CustomerPayload::from_json(json!([1, 2])).is_err());
    /// ```
    pub fn from_json(body: Value) -> Result<Self, Error> {
        decode_object(body)
    }
}

impl ContactPayload {
    /// Decode a raw JSON body.
    pub fn from_json(body: Value) -> Result<Self, Error> {
        decode_object(body)
    }
}

impl AddressPayload {
    /// Decode a raw JSON body.
    pub fn from_json(body: Value) -> Result<Self, Error> {
        decode_object(body)
    }
}
