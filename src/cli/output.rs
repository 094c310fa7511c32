use std::fmt::Write;

use colored::Colorize;

use crate::currency::{CurrencyCode, Money};
use crate::domain::{Balance, Settlement, Share};
use crate::ledger::GroupSummary;

fn signed(amount: Money) -> String {
    let text = amount.to_string();
    if amount.is_positive() {
        format!("+{text}").green().to_string()
    } else if amount.is_negative() {
        text.red().to_string()
    } else {
        text
    }
}

pub fn section(title: &str) -> String {
    format!("=== {} ===", title.trim()).bold().to_string()
}

pub fn render_balances(balances: &[Balance], currency: &CurrencyCode) -> String {
    let mut out = String::new();
    let width = balances.iter().map(|b| b.name.len()).max().unwrap_or(0);
    for balance in balances {
        let _ = writeln!(
            out,
            "{:<width$}  paid {} {}  share {} {}  net {}",
            balance.name,
            currency.as_str(),
            balance.paid,
            currency.as_str(),
            balance.share,
            signed(balance.net),
        );
    }
    out
}

pub fn render_settlements(settlements: &[Settlement], currency: &CurrencyCode) -> String {
    if settlements.is_empty() {
        return format!("{}\n", "All settled up!".green());
    }
    let mut out = String::new();
    for settlement in settlements {
        let _ = writeln!(
            out,
            "{} pays {} {} {}",
            settlement.from_name,
            settlement.to_name,
            currency.as_str(),
            settlement.amount,
        );
    }
    out
}

pub fn render_summary(group_name: &str, summary: &GroupSummary, currency: &CurrencyCode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", section(group_name));
    let _ = writeln!(
        out,
        "Total spent: {} {}",
        currency.as_str(),
        summary.total_spent
    );
    let _ = writeln!(out, "{}", section("Balances"));
    out.push_str(&render_balances(&summary.balances, currency));
    let _ = writeln!(out, "{}", section("Settlements"));
    out.push_str(&render_settlements(&summary.settlements, currency));
    out
}

pub fn render_shares(shares: &[Share], currency: &CurrencyCode) -> String {
    let mut out = String::new();
    for share in shares {
        let _ = writeln!(
            out,
            "{}: {} {}",
            share.participant_id,
            currency.as_str(),
            share.amount
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_reads_settled() {
        colored::control::set_override(false);
        let text = render_settlements(&[], &CurrencyCode::default());
        assert_eq!(text, "All settled up!\n");
    }

    #[test]
    fn shares_render_one_per_line() {
        colored::control::set_override(false);
        let shares = vec![
            Share::new("a", Money::from_cents(3_334)),
            Share::new("b", Money::from_cents(3_333)),
        ];
        let text = render_shares(&shares, &CurrencyCode::new("USD"));
        assert_eq!(text, "a: USD 33.34\nb: USD 33.33\n");
    }
}
