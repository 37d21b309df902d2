// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display formatting helpers shared by all subcommands.

use chrono::DateTime;

/// USD amount with thousands separators, e.g. `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Epoch-milliseconds timestamp as a UTC date string.
///
/// The backend stamps records with fractional milliseconds; out-of-range
/// values render as a placeholder rather than panicking.
pub fn format_date(epoch_ms: f64) -> String {
    DateTime::from_timestamp_millis(epoch_ms as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "(invalid date)".to_string())
}

/// First eight characters of an id, with an ellipsis when truncated.
pub fn truncate_id(id: &str) -> String {
    let mut chars = id.chars();
    let prefix: String = chars.by_ref().take(8).collect();
    if chars.next().is_some() {
        format!("{prefix}\u{2026}")
    } else {
        prefix
    }
}

/// Compact a count for headers: `950`, `1.2K`, `3.4M`.
pub fn compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// `(value)` or `-` for optional display fields.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn currency_handles_negatives_and_rounding() {
        assert_eq!(format_currency(-30.0), "-$30.00");
        assert_eq!(format_currency(0.005), "$0.01");
    }

    #[test]
    fn date_renders_epoch_millis_as_utc() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(format_date(1700000000000.0), "2023-11-14 22:13");
        assert_eq!(format_date(f64::MAX), "(invalid date)");
    }

    #[test]
    fn ids_truncate_past_eight_chars() {
        assert_eq!(truncate_id("short"), "short");
        assert_eq!(truncate_id("exactly8"), "exactly8");
        assert_eq!(truncate_id("k17abc123def"), "k17abc12\u{2026}");
    }

    #[test]
    fn counts_compact_to_k_and_m() {
        assert_eq!(compact_count(950), "950");
        assert_eq!(compact_count(1_200), "1.2K");
        assert_eq!(compact_count(3_400_000), "3.4M");
    }

    #[test]
    fn or_dash_substitutes_missing_values() {
        assert_eq!(or_dash(Some("x")), "x");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
    }
}
