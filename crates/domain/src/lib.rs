// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod account;
mod agreement;
mod codec;
mod error;
mod label_value;
mod order;
mod provisioning;
mod shape;
mod subscription;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use account::AccountInformation;
pub use agreement::AgreementFormData;
pub use error::OrderError;
pub use label_value::LabelValue;
pub use order::{Order, OrderBuilder};
pub use provisioning::{ProvisioningDetail, ProvisioningStatus};
pub use shape::{FieldKind, FieldShape, Presence, RecordDescriptor, RecordShape, record_shapes};
pub use subscription::SubscriptionInformation;
pub use validation::{ElementContract, validate_order};
