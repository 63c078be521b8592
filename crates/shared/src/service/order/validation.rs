use crate::domain::requests::SubmitOrderRequest;

pub const VALID_CATEGORIES: [&str; 5] =
    ["Shirts", "Tarpaulin", "Print & Xerox", "Stickers", "Others"];

/// Checks every rule independently and collects all failing messages, so a
/// customer fixing the form sees everything wrong at once. An empty category
/// trips both the required-field rule and the membership rule.
pub fn validate_order(req: &SubmitOrderRequest) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(&req.customer_name) {
        errors.push("Customer name is required".to_string());
    }

    if is_blank(&req.service_category) {
        errors.push("Service category is required".to_string());
    }

    // upper bound keeps the value representable in the orders table
    if !req
        .quantity
        .is_some_and(|q| (1..=i64::from(i32::MAX)).contains(&q))
    {
        errors.push("Valid quantity is required".to_string());
    }

    if is_blank(&req.due_date) {
        errors.push("Due date is required".to_string());
    }

    let category = req.service_category.as_deref().unwrap_or("");
    if !VALID_CATEGORIES.contains(&category) {
        errors.push("Invalid service category".to_string());
    }

    if category == "Tarpaulin" && is_blank(&req.size) {
        errors.push("Size is required for Tarpaulin orders".to_string());
    }

    if category == "Others" && is_blank(&req.service_name) {
        errors.push("Specific service is required for Others category".to_string());
    }

    errors
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitOrderRequest {
        SubmitOrderRequest {
            customer_name: Some("Maria Santos".into()),
            customer_email: Some("maria@example.com".into()),
            customer_phone: None,
            service_category: Some("Shirts".into()),
            service_name: None,
            size: None,
            quantity: Some(5),
            due_date: Some("2025-04-15".into()),
            instructions: None,
            delivery_preference: Some("pickup".into()),
            files_count: None,
        }
    }

    #[test]
    fn valid_payload_produces_no_errors() {
        assert!(validate_order(&valid_request()).is_empty());
    }

    #[test]
    fn all_failing_rules_contribute_their_message() {
        let req = SubmitOrderRequest {
            customer_name: None,
            quantity: Some(0),
            due_date: Some(String::new()),
            ..valid_request()
        };

        let errors = validate_order(&req);
        assert_eq!(
            errors,
            vec![
                "Customer name is required",
                "Valid quantity is required",
                "Due date is required",
            ]
        );
    }

    #[test]
    fn empty_category_yields_both_category_messages() {
        let req = SubmitOrderRequest {
            service_category: None,
            ..valid_request()
        };

        let errors = validate_order(&req);
        assert!(errors.contains(&"Service category is required".to_string()));
        assert!(errors.contains(&"Invalid service category".to_string()));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let req = SubmitOrderRequest {
            service_category: Some("Mugs".into()),
            ..valid_request()
        };

        assert_eq!(validate_order(&req), vec!["Invalid service category"]);
    }

    #[test]
    fn tarpaulin_requires_a_size() {
        let req = SubmitOrderRequest {
            service_category: Some("Tarpaulin".into()),
            size: None,
            ..valid_request()
        };

        assert_eq!(
            validate_order(&req),
            vec!["Size is required for Tarpaulin orders"]
        );
    }

    #[test]
    fn others_requires_a_specific_service_even_when_everything_else_is_valid() {
        let req = SubmitOrderRequest {
            service_category: Some("Others".into()),
            service_name: Some(String::new()),
            ..valid_request()
        };

        assert_eq!(
            validate_order(&req),
            vec!["Specific service is required for Others category"]
        );
    }

    #[test]
    fn quantity_beyond_the_column_range_is_invalid() {
        let req = SubmitOrderRequest {
            quantity: Some(i64::from(i32::MAX) + 1),
            ..valid_request()
        };

        assert_eq!(validate_order(&req), vec!["Valid quantity is required"]);
    }

    #[test]
    fn missing_quantity_is_invalid() {
        let req = SubmitOrderRequest {
            quantity: None,
            ..valid_request()
        };

        assert_eq!(validate_order(&req), vec!["Valid quantity is required"]);
    }
}
