use chrono::NaiveDateTime;

const KEPT_HEAD: usize = 6;
const KEPT_TAIL: usize = 4;
const GROUP: usize = 4;

/// Splits an identifier into (digits, everything else), each in original order.
pub fn split_digits(identifier: &str) -> (String, String) {
    identifier.chars().partition(|c| c.is_ascii_digit())
}

pub fn format_date(timestamp: NaiveDateTime) -> String {
    timestamp.format("%d.%m.%Y").to_string()
}

/// `Visa Gold 7756673469642839` becomes `Visa Gold 7756 67** **** 2839`.
///
/// Identifiers with fewer than ten digits have nothing between the kept head
/// and tail, so their digits are shown unmasked.
pub fn mask_source(identifier: &str) -> String {
    let (digits, label) = split_digits(identifier);
    let digits: Vec<char> = digits.chars().collect();

    let masked: String = if digits.len() < KEPT_HEAD + KEPT_TAIL {
        digits.iter().collect()
    } else {
        let tail_start = digits.len() - KEPT_TAIL;
        digits
            .iter()
            .enumerate()
            .map(|(i, &c)| if i < KEPT_HEAD || i >= tail_start { c } else { '*' })
            .collect()
    };

    let grouped = group(&masked, GROUP);
    let label = label.trim();

    let rendered = if label.is_empty() || grouped.is_empty() {
        format!("{}{}", label, grouped)
    } else {
        format!("{} {}", label, grouped)
    };
    rendered.replace("  ", " ")
}

/// `Счет 48943806953649539453` becomes `Счет**9453`. Short digit runs are
/// shown as they are.
pub fn mask_destination(identifier: &str) -> String {
    let (digits, label) = split_digits(identifier);
    let tail: String = {
        let chars: Vec<char> = digits.chars().collect();
        chars[chars.len().saturating_sub(KEPT_TAIL)..].iter().collect()
    };

    format!("{}**{}", label.trim(), tail)
}

fn group(code: &str, size: usize) -> String {
    code.chars()
        .collect::<Vec<_>>()
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
