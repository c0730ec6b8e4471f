//! Plain-text price message for chat webhooks.

use chrono::{DateTime, FixedOffset, Utc};

use crate::history::HistoryEntry;

/// Pakistan Standard Time, UTC+5, no daylight saving.
const PKT_OFFSET_SECS: i32 = 5 * 3600;

/// Changes smaller than this are shown as unchanged.
const DELTA_EPSILON: f64 = 0.5;

/// Render `entry` for a chat message, with per-tola changes against
/// `previous` when there is one.
pub fn format_price_message(entry: &HistoryEntry, previous: Option<&HistoryEntry>) -> String {
    let currency = entry.currency.as_deref().unwrap_or("PKR");
    let prices = &entry.prices;

    let gold_delta = previous.map(|p| prices.gold.per_tola - p.prices.gold.per_tola);
    let silver_delta = previous.map(|p| prices.silver.per_tola - p.prices.silver.per_tola);

    let mut lines = vec![
        format!("*Gold & Silver Rates* ({})", format_pkt(entry.timestamp)),
        String::new(),
        "Gold (24K)".to_string(),
        format!(
            "  Per tola: {} {}{}",
            currency,
            format_amount(prices.gold.per_tola),
            format_delta(gold_delta)
        ),
        format!(
            "  Per gram: {} {}",
            currency,
            format_amount(prices.gold.per_gram)
        ),
        "Silver".to_string(),
        format!(
            "  Per tola: {} {}{}",
            currency,
            format_amount(prices.silver.per_tola),
            format_delta(silver_delta)
        ),
        format!(
            "  Per kg: {} {}",
            currency,
            format_amount(prices.silver.per_kg)
        ),
        String::new(),
        format!("Gold/Silver ratio: {:.2}", prices.ratio),
    ];

    if let Some(rate) = entry.exchange_rate {
        lines.push(format!(
            "USD/{}: {:.2}{}",
            currency,
            rate,
            if entry.rate_is_fallback {
                " (fallback rate)"
            } else {
                ""
            }
        ));
    }
    if let Some(source) = entry.source.as_deref() {
        lines.push(format!("Source: {}", source));
    }

    lines.join("\n")
}

fn format_pkt(timestamp: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(PKT_OFFSET_SECS) {
        Some(offset) => timestamp
            .with_timezone(&offset)
            .format("%d %b %Y, %I:%M %p PKT")
            .to_string(),
        None => timestamp.format("%d %b %Y, %H:%M UTC").to_string(),
    }
}

fn format_delta(delta: Option<f64>) -> String {
    match delta {
        None => String::new(),
        Some(d) if !d.is_finite() => String::new(),
        Some(d) if d.abs() < DELTA_EPSILON => " (unchanged)".to_string(),
        Some(d) if d > 0.0 => format!(" (up {})", format_amount(d)),
        Some(d) => format!(" (down {})", format_amount(-d)),
    }
}

/// Round to whole units and group thousands with commas.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
