// Lines in text reports that carry no data: rules, column headers, banners,
// estimates and footers.

const HEADER_WORDS: [&str; 4] = ["hour", "day", "month", "year"];
const BANNER_WORDS: [&str; 4] = ["hourly", "daily", "monthly", "yearly"];
const FOOTER_WORDS: [&str; 2] = ["sum", "total:"];

/// True when the line should be ignored without a warning.
pub(super) fn is_noise(line: &str) -> bool {
    let t = line.trim();
    if t.is_empty() || is_separator(t) {
        return true;
    }
    let words = words(t);
    is_column_header(&words) || is_estimate(&words) || is_banner(&words) || is_footer(&words)
}

fn words(t: &str) -> Vec<String> {
    t.split(|c: char| c.is_whitespace() || c == '|')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn is_separator(t: &str) -> bool {
    t.chars()
        .all(|c| matches!(c, '-' | '+' | '=' | '|') || c.is_whitespace())
}

fn is_column_header(words: &[String]) -> bool {
    let first_is_header = words
        .first()
        .is_some_and(|w| HEADER_WORDS.contains(&w.as_str()));
    let has_rx_tx = words.iter().any(|w| w == "rx") && words.iter().any(|w| w == "tx");
    first_is_header || has_rx_tx
}

fn is_estimate(words: &[String]) -> bool {
    words.iter().any(|w| w.contains("estimated"))
}

/// "eth0  /  hourly"
fn is_banner(words: &[String]) -> bool {
    words.iter().any(|w| w == "/")
        && words
            .last()
            .is_some_and(|w| BANNER_WORDS.contains(&w.as_str()))
}

fn is_footer(words: &[String]) -> bool {
    words
        .first()
        .is_some_and(|w| FOOTER_WORDS.contains(&w.as_str()))
}
