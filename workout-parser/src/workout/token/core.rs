//! Step token definitions
//!
//! The step text after the `-` marker is split into these tokens by a logos lexer. Every
//! value-carrying shape normalizes at lex time: durations become seconds or meters, ranges
//! become `(low, high)` pairs with single values written as `low == high`.
//!
//! Any whitespace-separated word that matches no shape is a [`Token::Word`]. Shapes take
//! precedence over words only when they cover the whole word, so `rampart` and `Tempo` stay
//! label text and `5min` stays one (invalid) word instead of `5m` followed by `in`.
//!
//! A callback that rejects its slice (overflow, an unknown `intensity=` class) makes logos
//! yield an error for that word.

use crate::workout::ast::{Decimal, IntensityClass, TargetBasis};
use logos::{Lexer, Logos};

#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// `1h`, `90m`, `30s` or descending combinations such as `1h30m` and `1m30s`, in seconds.
    #[regex(r"[0-9]+h([0-9]+m)?([0-9]+s)?|[0-9]+m([0-9]+s)?|[0-9]+s", time_seconds, priority = 3)]
    Time(u64),

    /// `2km`, `0.5kms` or `400mtr`, in meters.
    #[regex(r"[0-9]+(\.[0-9]+)?(km|kms|mtr)", distance_meters, priority = 3)]
    Distance(Decimal),

    /// `75%` or `50-55%`.
    #[regex(r"[0-9]+(\.[0-9]+)?(-[0-9]+(\.[0-9]+)?)?%", percent_range, priority = 3)]
    Percent((Decimal, Decimal)),

    /// `z2` or `z1-z2`. Ids are not range checked here; one too large for `u32` saturates so
    /// the resolver reports it like any other out-of-range zone.
    #[regex(r"[zZ][0-9]+(-[zZ][0-9]+)?", zone_range, priority = 3)]
    Zone((u32, u32)),

    /// `250W` or `200-250W`.
    #[regex(r"[0-9]+(-[0-9]+)?W", |lex| int_range(lex.slice(), "W"), priority = 3)]
    Watts((u32, u32)),

    /// `90rpm` or `85-95rpm`.
    #[regex(r"[0-9]+(-[0-9]+)?rpm", |lex| int_range(lex.slice(), "rpm"), priority = 3)]
    Cadence((u32, u32)),

    /// `3x` repeat marker. Only meaningful on a line of its own.
    #[regex(r"[0-9]+[xX]", repeat_count, priority = 3)]
    Repeat(u32),

    #[regex(r"[rR][aA][mM][pP]", priority = 3)]
    Ramp,

    #[token("Pace")]
    Pace,

    #[token("HR")]
    HeartRate,

    #[token("freeride")]
    FreeRide,

    #[token("maxeffort")]
    MaxEffort,

    #[token("hidepower")]
    HidePower,

    /// `ftp`, `MMP` or `LTHR` after a target.
    #[regex(r"[fF][tT][pP]", |_| TargetBasis::Ftp, priority = 3)]
    #[regex(r"[mM][mM][pP]", |_| TargetBasis::Mmp, priority = 3)]
    #[regex(r"[lL][tT][hH][rR]", |_| TargetBasis::Lthr, priority = 3)]
    Basis(TargetBasis),

    #[regex(r"intensity=[a-z]+", intensity_class)]
    Intensity(IntensityClass),

    /// Anything else, kept verbatim.
    #[regex(r"[^ \t\r\f\n]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

fn time_seconds(lex: &mut Lexer<Token>) -> Option<u64> {
    let mut total: u64 = 0;
    let mut value: u64 = 0;
    for c in lex.slice().chars() {
        match c {
            '0'..='9' => {
                value = value
                    .checked_mul(10)?
                    .checked_add(u64::from(c.to_digit(10)?))?;
            }
            unit => {
                let scale = match unit {
                    'h' => 3600,
                    'm' => 60,
                    _ => 1,
                };
                total = total.checked_add(value.checked_mul(scale)?)?;
                value = 0;
            }
        }
    }
    Some(total)
}

fn distance_meters(lex: &mut Lexer<Token>) -> Option<Decimal> {
    let slice = lex.slice();
    let split = slice.find(|c: char| c.is_ascii_alphabetic())?;
    let (number, unit) = slice.split_at(split);
    let value: Decimal = number.parse().ok()?;
    if unit.starts_with('k') {
        value.checked_mul_int(1000)
    } else {
        Some(value)
    }
}

fn percent_range(lex: &mut Lexer<Token>) -> Option<(Decimal, Decimal)> {
    let body = lex.slice().strip_suffix('%')?;
    match body.split_once('-') {
        Some((low, high)) => Some((low.parse().ok()?, high.parse().ok()?)),
        None => {
            let value: Decimal = body.parse().ok()?;
            Some((value, value))
        }
    }
}

fn zone_range(lex: &mut Lexer<Token>) -> Option<(u32, u32)> {
    // The regex guarantees digits, so a failed parse can only be overflow.
    let zone = |text: &str| -> Option<u32> { Some(text[1..].parse().unwrap_or(u32::MAX)) };
    let slice = lex.slice();
    match slice.split_once('-') {
        Some((low, high)) => Some((zone(low)?, zone(high)?)),
        None => {
            let value = zone(slice)?;
            Some((value, value))
        }
    }
}

fn int_range(slice: &str, unit: &str) -> Option<(u32, u32)> {
    let body = slice.strip_suffix(unit)?;
    match body.split_once('-') {
        Some((low, high)) => Some((low.parse().ok()?, high.parse().ok()?)),
        None => {
            let value = body.parse().ok()?;
            Some((value, value))
        }
    }
}

fn repeat_count(lex: &mut Lexer<Token>) -> Option<u32> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse().ok()
}

fn intensity_class(lex: &mut Lexer<Token>) -> Option<IntensityClass> {
    lex.slice()
        .strip_prefix("intensity=")?
        .parse::<IntensityClass>()
        .ok()
}

impl Token {
    pub fn is_duration(&self) -> bool {
        matches!(self, Token::Time(_) | Token::Distance(_))
    }

    /// Percent, zone and watts tokens all set the step's intensity.
    pub fn is_intensity(&self) -> bool {
        matches!(self, Token::Percent(_) | Token::Zone(_) | Token::Watts(_))
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}
