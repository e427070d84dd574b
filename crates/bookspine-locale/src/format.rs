//! `%`-directive substitution for message templates.
//!
//! Templates come from locale catalogs and use printf-flavored directives:
//! `%d` (decimal), `%s` (string), `%pA`/`%pa` (alphabetic numbering),
//! `%pR`/`%pr` (roman numerals) and `%%` (a literal percent sign).
//! Substitution is positional and total: a directive with no argument left
//! is kept verbatim and surplus arguments are ignored, so a mistranslated
//! template can never abort a compilation run.

use std::sync::OnceLock;

use regex::Regex;

use crate::MessageArg;

fn directive_regex() -> &'static Regex {
    static DIRECTIVE_REGEX: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE_REGEX
        .get_or_init(|| Regex::new(r"%(?:p[AaRr]|[ds%])").expect("Invalid directive regex"))
}

/// Substitute `args` into the `%`-directives of `template`, positionally.
///
/// Each directive other than `%%` consumes the next argument. Text between
/// directives, unknown `%`-sequences, and directives left without an
/// argument pass through unchanged.
pub fn substitute(template: &str, args: &[MessageArg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;
    let mut next_arg = 0;

    for directive in directive_regex().find_iter(template) {
        out.push_str(&template[cursor..directive.start()]);
        cursor = directive.end();

        if directive.as_str() == "%%" {
            out.push('%');
            continue;
        }
        match args.get(next_arg) {
            Some(arg) => {
                out.push_str(&render(directive.as_str(), *arg));
                next_arg += 1;
            }
            None => out.push_str(directive.as_str()),
        }
    }
    out.push_str(&template[cursor..]);
    out
}

fn render(directive: &str, arg: MessageArg<'_>) -> String {
    match (directive, arg) {
        (_, MessageArg::Text(s)) => s.to_string(),
        ("%pA", MessageArg::Number(n)) => alpha_label(n),
        ("%pa", MessageArg::Number(n)) => alpha_label(n).to_ascii_lowercase(),
        ("%pR", MessageArg::Number(n)) => roman_label(n),
        ("%pr", MessageArg::Number(n)) => roman_label(n).to_ascii_lowercase(),
        // %d and %s both print numbers in decimal.
        (_, MessageArg::Number(n)) => n.to_string(),
    }
}

/// Alphabetic numbering: 1 → "A", 26 → "Z", 27 → "AA" (bijective base-26).
///
/// Used by appendix labels ("Appendix A"). 0 has no alphabetic form and
/// renders as "0".
pub fn alpha_label(n: u32) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut n = n;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Roman numerals in standard subtractive form: 4 → "IV", 1990 → "MCMXC".
///
/// 0 has no roman form and renders as "0".
pub fn roman_label(n: u32) -> String {
    if n == 0 {
        return "0".to_string();
    }
    const VALUES: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut n = n;
    let mut out = String::new();
    for (value, numeral) in VALUES {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
