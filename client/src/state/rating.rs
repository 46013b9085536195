//! Star-rating input state and display rule.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

/// Number of stars in the widget.
pub const STAR_COUNT: u8 = 5;

const MAX_RATING: f64 = 5.0;

/// Icon drawn at one star position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarIcon {
    Full,
    Half,
    Empty,
}

/// Icon size preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RatingSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl RatingSize {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "rating__star--sm",
            Self::Md => "rating__star--md",
            Self::Lg => "rating__star--lg",
        }
    }
}

/// Icon for `star` (1-based) given the value currently displayed.
///
/// A half star only appears when the displayed value sits exactly half a
/// star below this position; hover never previews halves.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn star_icon(displayed: f64, star: u8) -> StarIcon {
    let position = f64::from(star);
    if displayed - position + 0.5 == 0.0 {
        StarIcon::Half
    } else if displayed >= position {
        StarIcon::Full
    } else {
        StarIcon::Empty
    }
}

/// Clamp to [0, 5] and snap to half-star steps.
#[must_use]
pub fn normalize_rating(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value.clamp(0.0, MAX_RATING) * 2.0).round() / 2.0
}

/// Local state of one rating input.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingState {
    pub committed: f64,
    pub hover: Option<u8>,
    pub readonly: bool,
}

impl RatingState {
    #[must_use]
    pub fn new(initial: f64, readonly: bool) -> Self {
        Self { committed: normalize_rating(initial), hover: None, readonly }
    }

    /// Hover preview wins over the committed value.
    #[must_use]
    pub fn displayed(&self) -> f64 {
        self.hover.map_or(self.committed, f64::from)
    }

    /// Preview `star`. Returns `true` only when the preview changed.
    pub fn hover(&mut self, star: u8) -> bool {
        if self.readonly || !(1..=STAR_COUNT).contains(&star) || self.hover == Some(star) {
            return false;
        }
        self.hover = Some(star);
        true
    }

    /// Clear the preview. Returns `true` only when one was showing.
    pub fn leave(&mut self) -> bool {
        self.hover.take().is_some()
    }

    /// Commit a whole-star value. Returns the value to report upward, or
    /// `None` when the input is read-only or the position is out of range.
    pub fn click(&mut self, star: u8) -> Option<f64> {
        if self.readonly || !(1..=STAR_COUNT).contains(&star) {
            return None;
        }
        self.committed = f64::from(star);
        Some(self.committed)
    }

    #[must_use]
    pub fn icons(&self) -> Vec<StarIcon> {
        let displayed = self.displayed();
        (1..=STAR_COUNT).map(|star| star_icon(displayed, star)).collect()
    }
}

/// Short text next to the stars, e.g. `"3.5/5"`.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn rating_summary(value: f64) -> String {
    if value <= 0.0 {
        return "Not rated yet".to_owned();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}/5")
    } else {
        format!("{value:.1}/5")
    }
}
