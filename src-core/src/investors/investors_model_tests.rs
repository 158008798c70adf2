//! Tests for investor domain models.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::custom_fields::CustomFieldValue;
    use crate::investors::{InvestorUpdate, NewInvestor};

    // ==================== NewInvestor Validation Tests ====================

    #[test]
    fn test_new_investor_accepts_minimal_payload() {
        let investor = new_investor("Asha");
        assert!(investor.validate().is_ok());
    }

    #[test]
    fn test_new_investor_rejects_blank_name() {
        let investor = new_investor("   ");
        assert!(investor.validate().is_err());
    }

    #[test]
    fn test_new_investor_deserializes_camel_case() {
        let investor: NewInvestor = serde_json::from_str(
            r#"{"name":"Asha","taxId":"ABCDE1234F","dateOfBirth":"1975-08-20"}"#,
        )
        .unwrap();
        assert_eq!(investor.name, "Asha");
        assert_eq!(investor.tax_id.as_deref(), Some("ABCDE1234F"));
        assert_eq!(
            investor.date_of_birth.unwrap().to_string(),
            "1975-08-20"
        );
        assert!(investor.custom_fields.is_empty());
    }

    // ==================== InvestorUpdate Validation Tests ====================

    #[test]
    fn test_update_rejects_empty_payload() {
        let update = InvestorUpdate::default();
        assert!(update.is_empty());
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let update = InvestorUpdate {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_update_accepts_single_field() {
        let update = InvestorUpdate {
            occupation: Some("Teacher".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_update_with_custom_fields_is_not_empty() {
        let mut custom_fields = HashMap::new();
        custom_fields.insert(
            "nominee".to_string(),
            CustomFieldValue::Text("Ravi".to_string()),
        );
        let update = InvestorUpdate {
            custom_fields: Some(custom_fields),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert!(update.validate().is_ok());
    }

    // ==================== Helper Functions ====================

    fn new_investor(name: &str) -> NewInvestor {
        NewInvestor {
            name: name.to_string(),
            relationship: None,
            email: None,
            phone: None,
            mobile: None,
            address: None,
            tax_id: None,
            date_of_birth: None,
            occupation: None,
            photo: None,
            custom_fields: HashMap::new(),
        }
    }
}
