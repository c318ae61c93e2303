use crate::balance::Balance;
use crate::schemas::UserNick;
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct PersonalBalance {
    pub id: UserNick,
    pub balance: f64,
}

/// One transfer of `amount` from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exchange {
    pub from: UserNick,
    pub to: UserNick,
    pub amount: f64,
}

// Greedy matching of the biggest debtor with the biggest creditor. It keeps
// the number of exchanges low, but it is not guaranteed to be the minimum.
fn get_simplified_exchanges(
    mut debtors: Vec<PersonalBalance>,
    mut creditors: Vec<PersonalBalance>,
) -> Vec<Exchange> {
    // Stable sorts, so equal amounts keep the order they came in
    debtors.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    creditors.sort_by(|a, b| b.balance.total_cmp(&a.balance));

    let mut exchanges = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let amount = debtor.balance.min(creditor.balance);
        exchanges.push(Exchange {
            from: debtor.id.clone(),
            to: creditor.id.clone(),
            amount: round_to_2_decimals(amount),
        });

        // `amount` equals one of both, so at least one side lands on exactly zero
        debtor.balance -= amount;
        creditor.balance -= amount;
        if debtor.balance == 0.0 {
            i += 1;
        }
        if creditor.balance == 0.0 {
            j += 1;
        }
    }
    exchanges
}

/// Rounds half away from zero, the way `f64::round` does.
pub fn round_to_2_decimals(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

pub fn get_exchanges_from_balance(people_balances: &Balance) -> Vec<Exchange> {
    // Divide people into debtors and creditors, people already settled are left out
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for (id, &balance) in people_balances {
        let person = PersonalBalance {
            id: id.clone(),
            balance: balance.abs(),
        };
        if balance < 0.0 {
            debtors.push(person);
        } else if balance > 0.0 {
            creditors.push(person);
        }
    }

    get_simplified_exchanges(debtors, creditors)
}
