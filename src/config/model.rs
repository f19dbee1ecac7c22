use chrono::NaiveDate;

/// Birth date used whenever the configured one is missing or malformed.
pub const DEFAULT_BIRTH_DATE: &str = "2000-01-01";

/// Time-visualization scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Weeks of an 80-year life.
    Life,
    /// Days of the current year.
    #[default]
    Year,
    /// The 75-day challenge.
    Hard75,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Life, Mode::Year, Mode::Hard75];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Life => "LIFE",
            Mode::Year => "YEAR",
            Mode::Hard75 => "HARD75",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// Visual form of one mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DotShape {
    #[default]
    Square,
    Circle,
    Rounded,
    Star,
    Fire,
    Dollar,
    Check,
    Cross,
}

/// How a shape is painted, which decides how the styler treats each category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeFamily {
    /// Solid square/circle/rounded-square blocks.
    Geometric,
    /// Star and flame: filled or outlined.
    Iconographic,
    /// Dollar, check and cross: stroked only.
    Glyph,
}

impl DotShape {
    pub const ALL: [DotShape; 8] = [
        DotShape::Square,
        DotShape::Circle,
        DotShape::Rounded,
        DotShape::Star,
        DotShape::Fire,
        DotShape::Dollar,
        DotShape::Check,
        DotShape::Cross,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DotShape::Square => "square",
            DotShape::Circle => "circle",
            DotShape::Rounded => "rounded",
            DotShape::Star => "star",
            DotShape::Fire => "fire",
            DotShape::Dollar => "dollar",
            DotShape::Check => "check",
            DotShape::Cross => "cross",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }

    pub fn family(self) -> ShapeFamily {
        match self {
            DotShape::Square | DotShape::Circle | DotShape::Rounded => ShapeFamily::Geometric,
            DotShape::Star | DotShape::Fire => ShapeFamily::Iconographic,
            DotShape::Dollar | DotShape::Check | DotShape::Cross => ShapeFamily::Glyph,
        }
    }
}

/// Which kind of inspirational text accompanies the wallpaper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    #[default]
    None,
    Quote,
    Quran,
}

impl QuoteKind {
    pub const ALL: [QuoteKind; 3] = [QuoteKind::None, QuoteKind::Quote, QuoteKind::Quran];

    pub fn as_str(self) -> &'static str {
        match self {
            QuoteKind::None => "none",
            QuoteKind::Quote => "quote",
            QuoteKind::Quran => "quran",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == s)
    }
}

/// The full set of user-chosen parameters determining a render.
///
/// The birth date is kept as the raw `YYYY-MM-DD` text the user entered so that an unusual
/// value survives an encode/decode round trip; [`Configuration::birth_date`] interprets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub birth_date: String,
    pub mode: Mode,
    pub theme_id: i64,
    pub shape: DotShape,
    pub quote_type: QuoteKind,
    pub quote_tag: String,
    pub quote_text: String,
    pub phone_model: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            birth_date: DEFAULT_BIRTH_DATE.to_string(),
            mode: Mode::default(),
            theme_id: 0,
            shape: DotShape::default(),
            quote_type: QuoteKind::default(),
            quote_tag: String::new(),
            quote_text: String::new(),
            phone_model: String::new(),
        }
    }
}

impl Configuration {
    /// Parsed birth date; malformed or missing input fails closed to 2000-01-01.
    pub fn birth_date(&self) -> NaiveDate {
        parse_birth_date(&self.birth_date)
    }

    /// `true` when a quote kind is selected but no text was supplied, meaning a collaborator
    /// should fetch one before (or after) rendering.
    pub fn wants_quote_fetch(&self) -> bool {
        self.quote_type != QuoteKind::None && self.quote_text.is_empty()
    }
}

pub(crate) fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse a `YYYY-MM-DD` birth date, substituting 2000-01-01 on any failure.
pub fn parse_birth_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").unwrap_or_else(|_| default_birth_date())
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
