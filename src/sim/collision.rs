//! Hitbox collision between the actor and obstacles
//!
//! Two passes: a cheap broad-phase AABB test on the raw boxes, then a
//! narrow-phase test on boxes shrunk by a fixed padding. Sprites carry
//! transparent margins, so only the narrow-phase result ends a run.

use super::rect::Rect;

/// Outcome of testing one pair of boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Raw boxes are apart
    Clear,
    /// Raw boxes overlap but padded boxes don't
    Graze,
    /// Padded boxes overlap
    Hit,
}

impl Contact {
    #[inline]
    pub fn is_hit(self) -> bool {
        self == Contact::Hit
    }
}

/// Classify the contact between two boxes
pub fn check_contact(a: &Rect, b: &Rect, padding: f32) -> Contact {
    if !a.overlaps(b) {
        return Contact::Clear;
    }
    if a.shrink(padding).overlaps(&b.shrink(padding)) {
        Contact::Hit
    } else {
        Contact::Graze
    }
}

/// Index of the first box in `others` that `subject` hits, if any
pub fn first_hit<'a, I>(subject: &Rect, others: I, padding: f32) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    others
        .into_iter()
        .position(|other| check_contact(subject, other, padding).is_hit())
}
