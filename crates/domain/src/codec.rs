// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON encoding and decoding of order records.
//!
//! Decoding walks each record field by field so that every failure names
//! the exact field it concerns (`accountInformation.firstName`,
//! `pendingIssues`, …) and falls into one of the [`OrderError`] kinds.
//! Every record's `Deserialize` implementation goes through the same path,
//! so serde users see the same errors as message strings.

use crate::account::AccountInformation;
use crate::agreement::AgreementFormData;
use crate::error::OrderError;
use crate::label_value::LabelValue;
use crate::order::Order;
use crate::provisioning::{ProvisioningDetail, ProvisioningStatus};
use crate::subscription::SubscriptionInformation;
use crate::validation::{ElementContract, check_element};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// Path used in errors about the document root.
const ROOT: &str = "$";

/// A leaf value read directly through serde.
pub trait Scalar: DeserializeOwned {
    /// Declared type, as reported in `TypeMismatch`.
    const EXPECTED: &'static str;
}

impl Scalar for i64 {
    const EXPECTED: &'static str = "int64";
}

impl Scalar for i32 {
    const EXPECTED: &'static str = "int32";
}

impl Scalar for bool {
    const EXPECTED: &'static str = "boolean";
}

impl Scalar for String {
    const EXPECTED: &'static str = "string";
}

impl Scalar for ProvisioningStatus {
    const EXPECTED: &'static str = "ProvisioningStatus";
}

/// A record decoded field by field from a [`FieldReader`].
pub trait Decode: Sized {
    fn decode(reader: &mut FieldReader) -> Result<Self, OrderError>;
}

/// Returns the JSON kind of a value, as reported in `TypeMismatch`.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Consumes the fields of one JSON object.
///
/// Fields are removed as they are read; whatever remains when the reader
/// is finished was not part of the record.
pub struct FieldReader {
    /// Path of the object being read; empty for the document root.
    path: String,
    fields: Map<String, Value>,
}

impl FieldReader {
    fn open(path: String, value: Value) -> Result<Self, OrderError> {
        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            other => Err(OrderError::TypeMismatch {
                field: if path.is_empty() {
                    String::from(ROOT)
                } else {
                    path
                },
                expected: "object",
                found: json_kind(&other),
            }),
        }
    }

    fn path_of(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.path)
        }
    }

    /// Removes a field, treating JSON `null` as absent.
    fn take(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name).filter(|value| !value.is_null())
    }

    /// Reads a mandatory leaf field.
    pub(crate) fn required<T: Scalar>(&mut self, name: &str) -> Result<T, OrderError> {
        let field: String = self.path_of(name);
        match self.take(name) {
            Some(value) => scalar(field, value),
            None => Err(OrderError::missing(field)),
        }
    }

    /// Reads an optional leaf field.
    pub(crate) fn optional<T: Scalar>(&mut self, name: &str) -> Result<Option<T>, OrderError> {
        let field: String = self.path_of(name);
        self.take(name).map(|value| scalar(field, value)).transpose()
    }

    /// Reads a mandatory nested record.
    pub(crate) fn record<R: Decode>(&mut self, name: &str) -> Result<R, OrderError> {
        let field: String = self.path_of(name);
        match self.take(name) {
            Some(value) => decode_record(field, value),
            None => Err(OrderError::missing(field)),
        }
    }

    /// Reads an optional nested record.
    pub(crate) fn optional_record<R: Decode>(
        &mut self,
        name: &str,
    ) -> Result<Option<R>, OrderError> {
        let field: String = self.path_of(name);
        self.take(name)
            .map(|value| decode_record(field, value))
            .transpose()
    }

    /// Reads a sequence of leaf values. Absent or `null` reads as empty.
    pub(crate) fn scalars<T: Scalar>(&mut self, name: &str) -> Result<Vec<T>, OrderError> {
        self.sequence(name, |_, element| {
            let found: &'static str = json_kind(&element);
            serde_json::from_value(element)
                .map_err(|_| format!("expected {}, found {found}", T::EXPECTED))
        })
    }

    /// Reads a sequence of records, checking each element's contract.
    /// Absent or `null` reads as empty.
    pub(crate) fn records<R: Decode + ElementContract>(
        &mut self,
        name: &str,
    ) -> Result<Vec<R>, OrderError> {
        self.sequence(name, |index, element| {
            // Element errors are reported relative to the element itself.
            let record: R = decode_record(String::new(), element).map_err(|err| match err {
                OrderError::TypeMismatch {
                    field,
                    expected,
                    found,
                } if field == ROOT => format!("expected {expected}, found {found}"),
                other => other.to_string(),
            })?;
            check_element("", index, &record).map_err(|err| match err {
                OrderError::MalformedSequence { reason, .. } => reason,
                other => other.to_string(),
            })?;
            Ok(record)
        })
    }

    fn sequence<T>(
        &mut self,
        name: &str,
        decode_element: impl Fn(usize, Value) -> Result<T, String>,
    ) -> Result<Vec<T>, OrderError> {
        let field: String = self.path_of(name);
        let elements: Vec<Value> = match self.take(name) {
            None => return Ok(Vec::new()),
            Some(Value::Array(elements)) => elements,
            Some(other) => {
                return Err(OrderError::TypeMismatch {
                    field,
                    expected: "array",
                    found: json_kind(&other),
                });
            }
        };

        elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                decode_element(index, element).map_err(|reason| OrderError::MalformedSequence {
                    field: field.clone(),
                    index,
                    reason,
                })
            })
            .collect()
    }

    /// Logs and discards any fields the record did not read.
    fn finish(self) {
        for key in self.fields.keys() {
            debug!(field = %self.path_of(key), "ignoring unknown field");
        }
    }
}

fn scalar<T: Scalar>(field: String, value: Value) -> Result<T, OrderError> {
    let found: &'static str = json_kind(&value);
    serde_json::from_value(value).map_err(|_| OrderError::TypeMismatch {
        field,
        expected: T::EXPECTED,
        found,
    })
}

fn decode_record<R: Decode>(path: String, value: Value) -> Result<R, OrderError> {
    let mut reader: FieldReader = FieldReader::open(path, value)?;
    let record: R = R::decode(&mut reader)?;
    reader.finish();
    Ok(record)
}

impl Order {
    /// Decodes an order from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is not JSON (`InvalidDocument`)
    /// - A mandatory field is absent or `null` (`MissingRequiredField`)
    /// - A field has the wrong JSON type (`TypeMismatch`)
    /// - A sequence element cannot be decoded or breaks its contract
    ///   (`MalformedSequence`)
    pub fn from_json(json: &str) -> Result<Self, OrderError> {
        let value: Value = serde_json::from_str(json).map_err(|err| {
            debug!(error = %err, "order document is not valid JSON");
            OrderError::InvalidDocument(err.to_string())
        })?;
        Self::from_value(value)
    }

    /// Decodes an order from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// See [`Order::from_json`].
    pub fn from_value(value: Value) -> Result<Self, OrderError> {
        decode_record(String::new(), value).inspect_err(|err| {
            debug!(error = %err, "order document rejected");
        })
    }

    /// Encodes this order as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Serialization` if encoding fails.
    pub fn to_value(&self) -> Result<Value, OrderError> {
        serde_json::to_value(self).map_err(|err| OrderError::Serialization(err.to_string()))
    }

    /// Encodes this order as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, OrderError> {
        serde_json::to_string(self).map_err(|err| OrderError::Serialization(err.to_string()))
    }

    /// Encodes this order as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, OrderError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| OrderError::Serialization(err.to_string()))
    }
}

impl Decode for LabelValue {
    fn decode(reader: &mut FieldReader) -> Result<Self, OrderError> {
        Ok(Self {
            label: reader.required("label")?,
            value: reader.required("value")?,
        })
    }
}

impl Decode for ProvisioningDetail {
    fn decode(reader: &mut FieldReader) -> Result<Self, OrderError> {
        Ok(Self {
            step: reader.required("step")?,
            status: reader.required("status")?,
            message: reader.optional("message")?,
            completed_at: reader.optional("completedAt")?,
        })
    }
}

impl Decode for AccountInformation {
    fn decode(reader: &mut FieldReader) -> Result<Self, OrderError> {
        Ok(Self {
            account_number: reader.optional("accountNumber")?,
            first_name: reader.required("firstName")?,
            last_name: reader.required("lastName")?,
            email: reader.optional("email")?,
            phone: reader.optional("phone")?,
            service_address: reader.optional("serviceAddress")?,
        })
    }
}

impl Decode for SubscriptionInformation {
    fn decode(reader: &mut FieldReader) -> Result<Self, OrderError> {
        Ok(Self {
            plan_code: reader.required("planCode")?,
            speed_tier: reader.optional("speedTier")?,
            monthly_rate_cents: reader.optional("monthlyRateCents")?,
            add_ons: reader.scalars("addOns")?,
        })
    }
}

impl Decode for AgreementFormData {
    fn decode(reader: &mut FieldReader) -> Result<Self, OrderError> {
        Ok(Self {
            signer_name: reader.required("signerName")?,
            signed_at: reader.required("signedAt")?,
            terms_version: reader.required("termsVersion")?,
            ip_address: reader.optional("ipAddress")?,
        })
    }
}

macro_rules! deserialize_through_reader {
    ($($record:ty),+ $(,)?) => {
        $(
            impl<'de> serde::Deserialize<'de> for $record {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let value: Value = <Value as serde::Deserialize>::deserialize(deserializer)?;
                    decode_record(String::new(), value).map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

deserialize_through_reader!(
    Order,
    LabelValue,
    ProvisioningDetail,
    AccountInformation,
    SubscriptionInformation,
    AgreementFormData,
);
