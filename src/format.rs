/// Display formatting shared by every view
use crate::state::data::Price;

/// Group digits in threes: 159900 -> "159,900"
pub fn thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Currency-prefixed price: "₹159,900"
pub fn price(currency: &str, amount: u32) -> String {
    format!("{}{}", currency, thousands(amount))
}

/// Pre-discount price label, `None` when there is no original price
pub fn original_price(price: &Price) -> Option<String> {
    price
        .original
        .map(|original| format!("MRP {}", self::price(&price.currency, original)))
}

/// Percentage saved relative to the original price, rounded to the nearest integer.
///
/// `None` without an original price, or when it is zero.
pub fn discount_percent(price: &Price) -> Option<u32> {
    let original = price.original.filter(|&original| original > 0)?;
    let saved = f64::from(original.saturating_sub(price.current));
    Some((saved / f64::from(original) * 100.0).round() as u32)
}

/// Rating out of five: "4.8/5"
pub fn rating(rating: f32) -> String {
    format!("{}/5", rating)
}

/// Number of filled stars for a rating
pub fn filled_stars(rating: f32) -> usize {
    rating.clamp(0.0, 5.0).floor() as usize
}

/// Review count with the matching noun: "2,847 reviews"
pub fn review_count(count: u32) -> String {
    let noun = if count == 1 { "review" } else { "reviews" };
    format!("{} {}", thousands(count), noun)
}

/// Result count line above the phone list: "3 phones found"
pub fn result_count(count: usize) -> String {
    let noun = if count == 1 { "phone" } else { "phones" };
    format!("{} {} found", count, noun)
}

/// First word of a spec value, used for compact highlights ("A17 Pro Bionic" -> "A17")
pub fn headline(value: &str) -> &str {
    value.split(' ').next().unwrap_or(value)
}
