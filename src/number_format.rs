// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Number rendering for sidebar values.
//!
//! Matches ECMAScript `Number.prototype.toString()` and `toFixed(1)` so cards
//! read the same as in the browser build.

/// Render a number the way ECMAScript `ToString(Number)` does.
///
/// Shortest round-trip digits; exponent form from `1e21` up and below `1e-6`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, (n - 1).abs())
        }
    }
}

/// Render a number with one decimal, like ECMAScript `toFixed(1)`.
///
/// Exact ties round away from zero, `-0` prints as `0.0`, and magnitudes of
/// `1e21` or more fall back to [`format_number`].
pub fn format_fixed1(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.abs() >= 1e21 {
        return format_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // Only multiples of 0.25 with an odd quarter count sit exactly halfway
    // between two tenths.
    let quarters = magnitude * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 == 1.0;

    let body = if is_tie {
        let tenths = (magnitude * 10.0).ceil() as u128;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{:.1}", magnitude)
    };
    format!("{}{}", sign, body)
}
