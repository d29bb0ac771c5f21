/// A span of time stored as a signed nanosecond count.
///
/// Durations enter the language through suffixed numeric literals
/// (`2h`, `1.5s`, `500ms`) and through caller bindings, and they mix
/// with the numeric kinds in arithmetic: a bare integer or float acts
/// as a number of seconds wherever it meets a duration.
///
/// The textual rendering uses the largest fitting units, e.g. `2h0m0s`,
/// `1m30s`, `1.5s`, `500ms`, `100ns`, which is also what string
/// concatenation produces.
///
/// # Example
/// ```
/// use predica::Duration;
///
/// assert_eq!(Duration::from_secs(7200).to_string(), "2h0m0s");
/// assert_eq!(Duration::from_nanos(1_500_000_000).to_string(), "1.5s");
/// assert_eq!(Duration::MILLISECOND.to_string(), "1ms");
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    nanos: i64,
}

/// Nanoseconds per unit, indexed by the literal suffixes the parser
/// recognizes. `us` and `µs` are the same unit.
const UNITS: &[(&str, i64)] = &[("ns", 1),
                                ("us", 1_000),
                                ("µs", 1_000),
                                ("ms", 1_000_000),
                                ("s", 1_000_000_000),
                                ("m", 60 * 1_000_000_000),
                                ("h", 3600 * 1_000_000_000)];

impl Duration {
    /// One nanosecond.
    pub const NANOSECOND: Self = Self { nanos: 1 };
    /// One microsecond.
    pub const MICROSECOND: Self = Self { nanos: 1_000 };
    /// One millisecond.
    pub const MILLISECOND: Self = Self { nanos: 1_000_000 };
    /// One second.
    pub const SECOND: Self = Self { nanos: 1_000_000_000 };
    /// One minute.
    pub const MINUTE: Self = Self { nanos: 60 * 1_000_000_000 };
    /// One hour.
    pub const HOUR: Self = Self { nanos: 3600 * 1_000_000_000 };

    /// Creates a duration from a raw nanosecond count.
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from whole seconds, saturating at the
    /// representable range.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self { nanos: secs.saturating_mul(1_000_000_000) }
    }

    /// Creates a duration from fractional seconds, saturating at the
    /// representable range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_secs_f64(secs: f64) -> Self {
        Self { nanos: (secs * 1e9) as i64 }
    }

    /// Gets the raw nanosecond count.
    #[must_use]
    pub const fn nanos(&self) -> i64 {
        self.nanos
    }

    /// Gets the duration as fractional seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(&self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Returns the suffixes recognized after a numeric literal, longest
    /// shared prefixes first so `ns` wins over `s`.
    #[must_use]
    pub fn suffixes() -> impl Iterator<Item = &'static str> {
        UNITS.iter().map(|(suffix, _)| *suffix)
    }

    /// Parses the numeric portion of a duration literal against a unit
    /// suffix previously matched by the parser.
    ///
    /// The number is a decimal with an optional fraction; underscores
    /// and empty digit runs are rejected, as is any value outside the
    /// representable nanosecond range.
    ///
    /// # Returns
    /// `None` if the literal is malformed or out of range.
    #[must_use]
    pub fn parse_literal(number: &str, suffix: &str) -> Option<Self> {
        let unit = UNITS.iter()
                        .find(|(name, _)| *name == suffix)
                        .map(|(_, nanos)| *nanos)?;

        let (int_part, frac_part) = match number.split_once('.') {
            Some((i, f)) => (i, f),
            None => (number, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
           || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let unit = u128::from(unit.unsigned_abs());
        let mut total = if int_part.is_empty() {
            0
        } else {
            int_part.parse::<u128>().ok()?.checked_mul(unit)?
        };
        if !frac_part.is_empty() {
            let scale = 10u128.checked_pow(u32::try_from(frac_part.len()).ok()?)?;
            let frac = frac_part.parse::<u128>().ok()?;
            total = total.checked_add(frac.checked_mul(unit)? / scale)?;
        }

        i64::try_from(total).ok().map(Self::from_nanos)
    }
}

impl std::ops::Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self { nanos: self.nanos.wrapping_neg() }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.nanos == 0 {
            return write!(f, "0s");
        }
        if self.nanos < 0 {
            write!(f, "-")?;
        }

        let n = self.nanos.unsigned_abs();
        if n < 1_000 {
            return write!(f, "{n}ns");
        }
        if n < 1_000_000 {
            return write!(f, "{}µs", fraction(n / 1_000, n % 1_000, 3));
        }
        if n < 1_000_000_000 {
            return write!(f, "{}ms", fraction(n / 1_000_000, n % 1_000_000, 6));
        }

        let secs = n / 1_000_000_000;
        let out = format!("{}s", fraction(secs % 60, n % 1_000_000_000, 9));
        let minutes = secs / 60;
        if minutes == 0 {
            return write!(f, "{out}");
        }
        let out = format!("{}m{}", minutes % 60, out);
        let hours = minutes / 60;
        if hours == 0 {
            return write!(f, "{out}");
        }
        write!(f, "{hours}h{out}")
    }
}

/// Renders `integral` with `frac` as a fractional tail of `digits`
/// decimal places, trailing zeros trimmed.
fn fraction(integral: u64, frac: u64, digits: usize) -> String {
    if frac == 0 {
        return integral.to_string();
    }
    let mut tail = format!("{frac:0digits$}");
    while tail.ends_with('0') {
        tail.pop();
    }
    format!("{integral}.{tail}")
}
