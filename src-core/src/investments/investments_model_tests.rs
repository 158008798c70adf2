//! Tests for investment domain models.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::investments::NewInvestment;

    // ==================== Validation Tests ====================

    #[test]
    fn test_new_investment_accepts_valid_payload() {
        let investment = new_investment(1000.0);
        assert!(investment.validate().is_ok());
    }

    #[test]
    fn test_new_investment_rejects_negative_amount() {
        let investment = new_investment(-1.0);
        assert!(investment.validate().is_err());
    }

    #[test]
    fn test_new_investment_rejects_non_finite_amount() {
        let investment = new_investment(f64::NAN);
        assert!(investment.validate().is_err());
        let investment = new_investment(f64::INFINITY);
        assert!(investment.validate().is_err());
    }

    #[test]
    fn test_new_investment_accepts_zero_amount() {
        let investment = new_investment(0.0);
        assert!(investment.validate().is_ok());
    }

    #[test]
    fn test_new_investment_rejects_blank_investor_id() {
        let mut investment = new_investment(100.0);
        investment.investor_id = " ".to_string();
        assert!(investment.validate().is_err());
    }

    #[test]
    fn test_new_investment_rejects_blank_name() {
        let mut investment = new_investment(100.0);
        investment.name = "".to_string();
        assert!(investment.validate().is_err());
    }

    #[test]
    fn test_new_investment_rejects_blank_type() {
        let mut investment = new_investment(100.0);
        investment.investment_type = "".to_string();
        assert!(investment.validate().is_err());
    }

    #[test]
    fn test_new_investment_checks_interest_date_ranges() {
        let mut investment = new_investment(100.0);
        investment.interest_day = Some(0);
        assert!(investment.validate().is_err());

        investment.interest_day = Some(31);
        investment.interest_month = Some(13);
        assert!(investment.validate().is_err());

        investment.interest_month = Some(12);
        assert!(investment.validate().is_ok());
    }

    // ==================== Serde Shape Tests ====================

    #[test]
    fn test_new_investment_deserializes_camel_case() {
        let investment: NewInvestment = serde_json::from_str(
            r#"{
                "investorId": "inv-1",
                "name": "HDFC FD",
                "investmentType": "FD",
                "amount": 50000,
                "purchaseDate": "2024-01-10",
                "interestRate": 7.1,
                "interestDay": 10,
                "interestMonth": 1,
                "maturityDate": "2029-01-10",
                "issuer": "HDFC Bank"
            }"#,
        )
        .unwrap();
        assert_eq!(investment.investor_id, "inv-1");
        assert_eq!(investment.investment_type, "FD");
        assert_eq!(investment.amount, 50000.0);
        assert_eq!(investment.interest_day, Some(10));
        assert!(investment.validate().is_ok());
    }

    // ==================== Helper Functions ====================

    fn new_investment(amount: f64) -> NewInvestment {
        NewInvestment {
            investor_id: "investor-1".to_string(),
            name: "Test FD".to_string(),
            investment_type: "FD".to_string(),
            amount,
            purchase_date: None,
            interest_rate: None,
            interest_day: None,
            interest_month: None,
            maturity_date: None,
            description: None,
            issuer: None,
            photo: None,
            custom_fields: HashMap::new(),
        }
    }
}
