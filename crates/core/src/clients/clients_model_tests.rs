#[cfg(test)]
mod tests {
    use crate::budgets::BudgetPeriod;
    use crate::clients::{ClientStatus, ClientUpdate, NewClient};
    use crate::errors::{Error, ValidationError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn valid_new_client() -> NewClient {
        NewClient {
            name: "Summit Motors".to_string(),
            dealership_type: "Luxury".to_string(),
            location: "Denver, CO".to_string(),
            contact_name: "Dana Reyes".to_string(),
            contact_email: "dana@summitmotors.com".to_string(),
            contact_phone: "555-0134".to_string(),
            total_budget: dec!(50000),
            budget_period: BudgetPeriod::Monthly,
        }
    }

    fn valid_update() -> ClientUpdate {
        ClientUpdate {
            id: Some(1),
            name: "Summit Motors".to_string(),
            dealership_type: "Luxury".to_string(),
            location: "Denver, CO".to_string(),
            contact_name: "Dana Reyes".to_string(),
            contact_email: "dana@summitmotors.com".to_string(),
            contact_phone: "555-0134".to_string(),
            total_budget: dec!(50000),
            budget_period: BudgetPeriod::Quarterly,
            status: ClientStatus::Active,
        }
    }

    #[test]
    fn test_valid_new_client_passes() {
        assert!(valid_new_client().validate().is_ok());
    }

    #[test]
    fn test_new_client_requires_name() {
        let mut client = valid_new_client();
        client.name = "   ".to_string();
        let err = client.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref field)) if field == "Client name"
        ));
    }

    #[test]
    fn test_new_client_requires_contact_fields() {
        for field in ["dealership_type", "location", "contact_name", "contact_phone"] {
            let mut client = valid_new_client();
            match field {
                "dealership_type" => client.dealership_type.clear(),
                "location" => client.location.clear(),
                "contact_name" => client.contact_name.clear(),
                _ => client.contact_phone.clear(),
            }
            assert!(
                matches!(
                    client.validate().unwrap_err(),
                    Error::Validation(ValidationError::MissingField(_))
                ),
                "expected missing-field error for {field}"
            );
        }
    }

    #[test]
    fn test_new_client_rejects_malformed_emails() {
        for email in [
            "",
            "plainaddress",
            "@no-local.com",
            "no-tld@domain",
            "dot-at-end@domain.",
        ] {
            let mut client = valid_new_client();
            client.contact_email = email.to_string();
            assert!(
                client.validate().is_err(),
                "expected '{email}' to be rejected"
            );
        }
    }

    #[test]
    fn test_new_client_accepts_reasonable_emails() {
        for email in ["a@b.co", "first.last@sub.domain.org", " padded@domain.com "] {
            let mut client = valid_new_client();
            client.contact_email = email.to_string();
            assert!(
                client.validate().is_ok(),
                "expected '{email}' to be accepted"
            );
        }
    }

    // The check is an unanchored shape test, not an RFC parse: anything
    // containing something@something.something passes, including addresses
    // with trailing dots or odd surroundings.
    #[test]
    fn test_email_shape_check_is_unanchored() {
        for email in [
            "dana@example.com.",
            ".starts-with-dot@.domain.com",
            "has space@domain.com",
        ] {
            let mut client = valid_new_client();
            client.contact_email = email.to_string();
            assert!(
                client.validate().is_ok(),
                "expected '{email}' to be accepted"
            );
        }
    }

    #[test]
    fn test_new_client_rejects_non_positive_budget() {
        for budget in [Decimal::ZERO, dec!(-100)] {
            let mut client = valid_new_client();
            client.total_budget = budget;
            assert!(matches!(
                client.validate().unwrap_err(),
                Error::Validation(ValidationError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_update_requires_id() {
        let mut update = valid_update();
        update.id = None;
        assert!(matches!(
            update.validate().unwrap_err(),
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_valid_update_passes() {
        assert!(valid_update().validate().is_ok());
    }

    #[test]
    fn test_client_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(valid_new_client()).unwrap();
        assert!(json.get("dealershipType").is_some());
        assert!(json.get("contactEmail").is_some());
        assert!(json.get("budgetPeriod").is_some());
        assert!(json.get("dealership_type").is_none());
    }
}
