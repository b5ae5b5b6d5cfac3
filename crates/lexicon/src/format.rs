//! printf-style formatting of translated text.
//!
//! Translations are data, so their format verbs are only known at runtime and
//! `format!` cannot be used. [`sprintf`] understands a small verb set:
//!
//! | Verb | Output |
//! |------|--------|
//! | `%s`, `%v`, `%d` | the argument's `Display` output |
//! | `%f` | `Display` with precision 6 unless one is given |
//! | `%q` | the `Display` output, double-quoted and escaped |
//! | `%%` | a literal `%` |
//!
//! Each verb may carry a `-` (left align) or `0` (zero pad) flag, a width, and
//! a `.N` precision, as in `%-8s` or `%06.2f`.
//!
//! Arguments are only seen through `Display`, so verbs do not check types:
//! `%d` with `1.5` prints `1.5`, and a precision on an integer is ignored as
//! `format!("{:.2}", 3)` ignores it.
//!
//! Count mismatches are rendered inline instead of failing: a verb without an
//! argument becomes `%!s(MISSING)`, an unknown verb `%!z(arg)`, and unused
//! arguments are appended as `%!(EXTRA a, b)`.

use std::fmt::{Display, Write};

#[derive(Debug, Default)]
struct Directive {
    left_align: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    fn render(&self, verb: char, arg: &dyn Display) -> String {
        let precision = match (verb, self.precision) {
            (_, Some(p)) => Some(p),
            ('f', None) => Some(6),
            _ => None,
        };
        let text = match precision {
            Some(p) => format!("{arg:.p$}"),
            None => arg.to_string(),
        };
        let text = if verb == 'q' { format!("{text:?}") } else { text };
        self.pad(text)
    }

    fn pad(&self, text: String) -> String {
        let len = text.chars().count();
        let Some(width) = self.width.filter(|w| *w > len) else {
            return text;
        };
        let fill = width - len;
        if self.left_align {
            format!("{text}{}", " ".repeat(fill))
        } else if self.zero_pad {
            match text.strip_prefix('-') {
                Some(digits) => format!("-{}{digits}", "0".repeat(fill)),
                None => format!("{}{text}", "0".repeat(fill)),
            }
        } else {
            format!("{}{text}", " ".repeat(fill))
        }
    }
}

/// Formats `format` with positional `args`. See the module docs for the
/// supported verbs.
pub fn sprintf(format: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.left_align = true,
                '0' => directive.zero_pad = true,
                _ => break,
            }
            chars.next();
        }
        directive.width = take_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(take_number(&mut chars).unwrap_or(0));
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };

        let Some(arg) = args.get(next_arg) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next_arg += 1;

        match verb {
            's' | 'v' | 'd' | 'f' | 'q' => out.push_str(&directive.render(verb, *arg)),
            _ => {
                let _ = write!(out, "%!{verb}({arg})");
            }
        }
    }

    if next_arg < args.len() {
        let extra: Vec<String> = args[next_arg..].iter().map(ToString::to_string).collect();
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    value
}
