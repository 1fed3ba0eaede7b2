// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AccountInformation, AgreementFormData, LabelValue, Order, ProvisioningDetail,
    ProvisioningStatus, SubscriptionInformation,
};

pub fn create_test_account() -> AccountInformation {
    AccountInformation::new("Ada", "Lovelace")
}

pub fn create_test_subscription() -> SubscriptionInformation {
    SubscriptionInformation::new("FIBER-1G")
}

pub fn create_test_agreement() -> AgreementFormData {
    AgreementFormData::new("Ada Lovelace", "2026-03-01T10:15:00Z", "tos-2026.1")
}

/// The minimal order: mandatory fields only.
pub fn create_minimal_order() -> Order {
    Order::new(
        42,
        true,
        "v2",
        create_test_account(),
        create_test_subscription(),
    )
}

/// An order with every field populated.
pub fn create_full_order() -> Order {
    let mut account: AccountInformation = create_test_account();
    account.account_number = Some(String::from("ACC-0001"));
    account.email = Some(String::from("ada@example.com"));
    account.phone = Some(String::from("555-0100"));
    account.service_address = Some(String::from("12 Analytical Way"));

    let mut subscription: SubscriptionInformation = create_test_subscription();
    subscription.speed_tier = Some(String::from("gig"));
    subscription.monthly_rate_cents = Some(7_999);
    subscription.add_ons = vec![String::from("WIFI-MESH"), String::from("STATIC-IP")];

    let mut agreement: AgreementFormData = create_test_agreement();
    agreement.ip_address = Some(String::from("203.0.113.7"));

    Order::builder()
        .id(1001)
        .preorder_id(77)
        .dch_id(5)
        .customer_id(42)
        .client_app("web-signup")
        .fiber_promo_code(2026)
        .cs_rep_id(314)
        .transaction_token("txn-abc-123")
        .order_hash("9f86d081884c7d65")
        .install_date_time("2026-03-10T08:00:00Z")
        .e_sign(true)
        .workflow_version("v2")
        .account_information(account)
        .subscription_information(subscription)
        .pending_issue(LabelValue::new("credit", "manual review"))
        .pending_issue(LabelValue::new("address", "unserviceable unit"))
        .provisioning_detail(
            ProvisioningDetail::new("ont-activation", ProvisioningStatus::Completed)
                .with_message("ONT online")
                .with_completed_at("2026-03-10T09:30:00Z"),
        )
        .provisioning_detail(ProvisioningDetail::new(
            "router-config",
            ProvisioningStatus::InProgress,
        ))
        .agreement_form_data(agreement)
        .note("customer prefers morning installs")
        .note("gate code 4411")
        .cpni_pin("0000")
        .build()
        .unwrap()
}
