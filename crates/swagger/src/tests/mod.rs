// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod parse_tests;

/// Scala declarations of every order record, as the provisioning service
/// declares them.
pub const ORDER_CASE_CLASSES: &str = r"
package com.fiber.provisioning.model

case class LabelValue(label: String, value: String)

case class AccountInformation(
  accountNumber: Option[String] = None,
  firstName: String,
  lastName: String,
  email: Option[String] = None,
  phone: Option[String] = None,
  serviceAddress: Option[String] = None
)

case class SubscriptionInformation(
  planCode: String,
  speedTier: Option[String] = None,
  monthlyRateCents: Option[Long] = None,
  addOns: List[String] = List()
)

case class AgreementFormData(
  signerName: String,
  signedAt: String,
  termsVersion: String,
  ipAddress: Option[String] = None
)

case class Order(
  id: Option[Long] = None,
  preorderId: Option[Long] = None,
  dchId: Option[Long] = None,
  customerId: Long,
  clientApp: Option[String] = None,
  fiberPromoCode: Option[Int] = None,
  csRepId: Option[Long] = None,
  transactionToken: Option[String] = None,
  orderHash: Option[String] = None,
  installDateTime: Option[String] = None,
  eSign: Boolean,
  workflowVersion: String,
  accountInformation: AccountInformation,
  subscriptionInformation: SubscriptionInformation,
  pendingIssues: List[LabelValue] = Nil,
  provisioningDetails: List[ProvisioningDetail] = Nil,
  agreementFormData: Option[AgreementFormData] = None,
  notes: List[String] = Nil,
  cpniPin: Option[String] = None
)
";
