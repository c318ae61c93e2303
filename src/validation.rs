use chrono::{SubsecRound, Utc};

use crate::error::ApiError;
use crate::schemas::{Expense, ExpenseForm};

/// Upper bound for a single expense, keeps sums over many records finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Checks a submitted expense and turns it into one ready to be stored.
///
/// A missing timestamp becomes the current UTC wall-clock time, and a
/// timestamp carrying an offset keeps its wall-clock reading with the
/// offset dropped. Timestamps are cut to milliseconds, the precision the
/// store keeps.
pub fn validate_expense(form: ExpenseForm) -> Result<Expense, ApiError> {
    if form.amount.is_nan() || form.amount <= 0.0 {
        return Err(ApiError::InvalidExpense(
            "Amount must be greater than zero".to_string(),
        ));
    }
    if form.amount > MAX_AMOUNT {
        return Err(ApiError::InvalidExpense(format!(
            "Amount cannot exceed {MAX_AMOUNT}"
        )));
    }
    if form.description.trim().is_empty() {
        return Err(ApiError::InvalidExpense(
            "Description cannot be empty".to_string(),
        ));
    }
    if form.paid_by.trim().is_empty() {
        return Err(ApiError::InvalidExpense(
            "Paid by cannot be empty".to_string(),
        ));
    }

    let timestamp = match form.timestamp {
        Some(submitted) => submitted.into_naive(),
        None => Utc::now().naive_utc(),
    }
    .trunc_subsecs(3);

    Ok(Expense {
        amount: form.amount,
        description: form.description,
        paid_by: form.paid_by,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::SubmittedTimestamp;
    use chrono::{DateTime, NaiveDate};
    use rstest::rstest;

    fn form(amount: f64, description: &str, paid_by: &str) -> ExpenseForm {
        ExpenseForm {
            amount,
            description: description.to_string(),
            paid_by: paid_by.to_string(),
            timestamp: None,
        }
    }

    #[rstest]
    #[case::zero_amount(form(0.0, "lunch", "Alice"), "Amount must be greater than zero")]
    #[case::negative_amount(form(-4.2, "lunch", "Alice"), "Amount must be greater than zero")]
    #[case::nan_amount(form(f64::NAN, "lunch", "Alice"), "Amount must be greater than zero")]
    #[case::too_large(form(1e308, "yacht", "Alice"), "Amount cannot exceed 1000000000")]
    #[case::infinite(form(f64::INFINITY, "yacht", "Alice"), "Amount cannot exceed 1000000000")]
    #[case::empty_description(form(10.0, "", "Alice"), "Description cannot be empty")]
    #[case::blank_description(form(10.0, "  \t", "Alice"), "Description cannot be empty")]
    #[case::empty_payer(form(10.0, "lunch", ""), "Paid by cannot be empty")]
    #[case::blank_payer(form(10.0, "lunch", "   "), "Paid by cannot be empty")]
    fn rejects_invalid_expenses(#[case] input: ExpenseForm, #[case] message: &str) {
        match validate_expense(input) {
            Err(ApiError::InvalidExpense(actual)) => assert_eq!(actual, message),
            other => panic!("expected InvalidExpense, got {other:?}"),
        }
    }

    #[test]
    fn keeps_fields_unchanged() {
        let expense = validate_expense(form(12.75, " groceries ", "Bob ")).unwrap();
        assert_eq!(expense.amount, 12.75);
        assert_eq!(expense.description, " groceries ");
        assert_eq!(expense.paid_by, "Bob ");
    }

    #[test]
    fn drops_offset_from_aware_timestamp() {
        let mut input = form(5.0, "coffee", "Carol");
        input.timestamp = Some(SubmittedTimestamp::Aware(
            DateTime::parse_from_rfc3339("2024-06-01T08:15:00-05:00").unwrap(),
        ));
        let expense = validate_expense(input).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        assert_eq!(expense.timestamp, expected);
    }

    #[test]
    fn accepts_the_ceiling_itself() {
        assert!(validate_expense(form(MAX_AMOUNT, "rent", "Alice")).is_ok());
    }

    #[test]
    fn cuts_timestamp_to_milliseconds() {
        let mut input = form(5.0, "coffee", "Carol");
        input.timestamp = Some(SubmittedTimestamp::Naive(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_micro_opt(0, 0, 0, 123_456)
                .unwrap(),
        ));
        let expense = validate_expense(input).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(0, 0, 0, 123)
            .unwrap();
        assert_eq!(expense.timestamp, expected);
    }

    #[test]
    fn defaults_timestamp_to_now() {
        let before = Utc::now().naive_utc().trunc_subsecs(3);
        let expense = validate_expense(form(5.0, "coffee", "Carol")).unwrap();
        let after = Utc::now().naive_utc();
        assert!(before <= expense.timestamp && expense.timestamp <= after);
    }
}
