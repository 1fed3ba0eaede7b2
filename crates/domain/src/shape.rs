// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static descriptions of each record's wire fields.
//!
//! Shapes list fields in wire order using their serialized (camelCase)
//! names. Schema generators walk these tables instead of the Rust types.

/// The declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// UTF-8 text.
    Text,
    /// `true` or `false`.
    Boolean,
    /// A nested record, by name.
    Record(&'static str),
    /// A closed set of string values.
    Enum {
        /// The enum's name.
        name: &'static str,
        /// The serialized variant names.
        variants: &'static [&'static str],
    },
    /// An ordered sequence of the inner kind.
    Sequence(&'static Self),
}

/// Whether a field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be present; absence is an error.
    Required,
    /// May be absent; absence is distinct from any value.
    Optional,
    /// Always present; defaults to an empty sequence.
    DefaultEmpty,
}

/// One field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldShape {
    /// Serialized field name.
    pub name: &'static str,
    /// Declared type.
    pub kind: FieldKind,
    /// Presence rule.
    pub presence: Presence,
}

impl FieldShape {
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }

    /// A sequence field that defaults to empty.
    #[must_use]
    pub const fn sequence(name: &'static str, element: &'static FieldKind) -> Self {
        Self {
            name,
            kind: FieldKind::Sequence(element),
            presence: Presence::DefaultEmpty,
        }
    }

    /// Returns whether a document must carry this field.
    ///
    /// Default-empty sequences count as required: they are always emitted.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !matches!(self.presence, Presence::Optional)
    }
}

/// A record type with a static field table.
pub trait RecordShape {
    /// The record's name.
    const NAME: &'static str;
    /// The record's fields in wire order.
    const FIELDS: &'static [FieldShape];

    /// Returns the descriptor for this record.
    #[must_use]
    fn descriptor() -> RecordDescriptor {
        RecordDescriptor {
            name: Self::NAME,
            fields: Self::FIELDS,
        }
    }
}

/// A record name together with its field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordDescriptor {
    /// The record's name.
    pub name: &'static str,
    /// The record's fields in wire order.
    pub fields: &'static [FieldShape],
}

impl RecordDescriptor {
    /// Looks up a field by its serialized name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldShape> {
        let fields: &'static [FieldShape] = self.fields;
        fields.iter().find(|field| field.name == name)
    }

    /// Returns the serialized names of the required fields, in wire order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + use<> {
        let fields: &'static [FieldShape] = self.fields;
        fields
            .iter()
            .filter(|field| field.is_required())
            .map(|field| field.name)
    }
}

/// Returns every record in the model, leaves first and `Order` last.
#[must_use]
pub fn record_shapes() -> [RecordDescriptor; 6] {
    [
        crate::LabelValue::descriptor(),
        crate::ProvisioningDetail::descriptor(),
        crate::AccountInformation::descriptor(),
        crate::SubscriptionInformation::descriptor(),
        crate::AgreementFormData::descriptor(),
        crate::Order::descriptor(),
    ]
}
