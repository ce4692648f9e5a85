use rust_decimal::Decimal;

/// Renders a rupee amount with Indian digit grouping, e.g. `₹2,50,000`.
///
/// The fractional part is dropped; every amount in the catalog and the
/// estimator is a whole-rupee figure.
pub fn format_inr(amount: Decimal) -> String {
    let truncated = amount.trunc();
    let digits = truncated.abs().to_string();
    let grouped = group_indian(&digits);

    if truncated.is_sign_negative() && !truncated.is_zero() {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

// Indian grouping: last three digits, then pairs (12,34,56,789).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut index = head.len();

    while index > 2 {
        groups.push(&head[index - 2..index]);
        index -= 2;
    }
    groups.push(&head[..index]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
