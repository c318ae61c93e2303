use std::collections::{BTreeMap, BTreeSet};

use crate::exchange::round_to_2_decimals;
use crate::schemas::{Expense, UserNick};

pub type Balance = BTreeMap<UserNick, f64>;

/// Net balance of every payer against an equal split of the total.
///
/// Positive means the person is owed money, negative means they owe.
pub fn compute_balance_from_expenses<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> Balance {
    let mut spent_by: BTreeMap<&str, f64> = BTreeMap::new();
    let mut total_spent = 0.0;

    for expense in expenses {
        let amount = expense.amount;
        spent_by
            .entry(expense.paid_by.as_str())
            .and_modify(|v| *v += amount)
            .or_insert(amount);
        total_spent += amount;
    }

    if spent_by.is_empty() {
        return Balance::new();
    }

    let fair_share = total_spent / spent_by.len() as f64;
    spent_by
        .into_iter()
        .map(|(person, spent)| (person.to_string(), round_to_2_decimals(spent - fair_share)))
        .collect()
}

/// Everyone who paid for at least one expense, alphabetically.
pub fn people_from_expenses<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Vec<UserNick> {
    expenses
        .into_iter()
        .map(|expense| expense.paid_by.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
