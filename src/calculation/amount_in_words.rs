//! Amount-in-words rendering in the Indian numbering system.
//!
//! Amounts are grouped as crore (10,000,000), lakh (100,000), thousand and
//! hundred, with each group rendered through the same below-hundred table.
//! Western thousand/million grouping does not apply here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;
const HUNDRED: u64 = 100;

const ONES: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// The closing phrase appended to a rendered amount.
///
/// Invoices and payslips are consumed by different downstream documents that
/// expect one form or the other verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordsSuffix {
    /// `"... Only"`
    #[default]
    Only,
    /// `"... Rupees Only"`
    RupeesOnly,
}

/// Rendering options for [`amount_to_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordsStyle {
    /// The closing phrase.
    #[serde(default)]
    pub suffix: WordsSuffix,
    /// Whether a fractional amount is rendered as `"and N Paisa"`.
    /// When false the fraction is dropped.
    #[serde(default)]
    pub include_paise: bool,
}

/// Renders 1..=99 (0 yields an empty string).
fn below_hundred(n: u64) -> String {
    if n < 20 {
        ONES[n as usize].to_string()
    } else {
        let tens = TENS[(n / 10) as usize];
        match n % 10 {
            0 => tens.to_string(),
            ones => format!("{} {}", tens, ONES[ones as usize]),
        }
    }
}

/// Renders a positive integer without any suffix.
fn integer_words(n: u64) -> String {
    let groups = [
        (CRORE, "Crore"),
        (LAKH, "Lakh"),
        (THOUSAND, "Thousand"),
        (HUNDRED, "Hundred"),
    ];

    for (unit, name) in groups {
        if n >= unit {
            let head = format!("{} {}", integer_words(n / unit), name);
            let rest = n % unit;
            return if rest == 0 {
                head
            } else {
                format!("{} {}", head, integer_words(rest))
            };
        }
    }

    below_hundred(n)
}

/// Converts a whole amount into Indian-English words ending in "Only".
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::number_to_indian_words;
///
/// assert_eq!(number_to_indian_words(0), "Zero Only");
/// assert_eq!(number_to_indian_words(100000), "One Lakh Only");
/// assert_eq!(
///     number_to_indian_words(12345678),
///     "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Only"
/// );
/// ```
pub fn number_to_indian_words(n: u64) -> String {
    render(n, 0, WordsStyle::default())
}

fn render(rupees: u64, paise: u64, style: WordsStyle) -> String {
    let mut words = if rupees == 0 {
        "Zero".to_string()
    } else {
        integer_words(rupees)
    };

    if style.suffix == WordsSuffix::RupeesOnly {
        words.push_str(" Rupees");
    }

    if style.include_paise && paise > 0 {
        words.push_str(" and ");
        words.push_str(&below_hundred(paise));
        words.push_str(" Paisa");
    }

    words.push_str(" Only");
    words
}

/// Converts a decimal amount into words using the given style.
///
/// Negative amounts render as zero. With `include_paise` the amount is first
/// rounded to two decimals; otherwise the fractional part is dropped.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::{amount_to_words, WordsStyle, WordsSuffix};
/// use rust_decimal::Decimal;
///
/// let style = WordsStyle { suffix: WordsSuffix::RupeesOnly, include_paise: true };
/// assert_eq!(
///     amount_to_words(Decimal::new(150050, 2), style),
///     "One Thousand Five Hundred Rupees and Fifty Paisa Only"
/// );
/// ```
pub fn amount_to_words(amount: Decimal, style: WordsStyle) -> String {
    let amount = amount.max(Decimal::ZERO);

    if style.include_paise {
        let total_paise = (amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .unwrap_or(0);
        render(total_paise / 100, total_paise % 100, style)
    } else {
        render(amount.trunc().to_u64().unwrap_or(0), 0, style)
    }
}
