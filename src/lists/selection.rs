//! Filters applied when totalling or slicing a list.

use crate::models::Tagged;

/// Restriction on a record's type tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter<'a> {
    /// Every record, including those with no type.
    #[default]
    Any,
    /// Records whose type equals the given tag.
    Is(&'a str),
    /// Records whose type is one of the given tags.
    AnyOf(&'a [&'a str]),
}

/// Restriction on a record's owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnerFilter<'a> {
    /// Ignore ownership.
    #[default]
    Any,
    /// The owner question was asked but left empty. Matches nothing.
    Empty,
    /// Records owned by exactly this owner.
    Is(&'a str),
}

/// Which records of a list an operation applies to.
///
/// Records without a type never match a type filter, and records without an
/// owner never match an owner filter.
///
/// # Example
///
/// ```
/// use interview_finance::lists::Selection;
/// use interview_finance::models::{Income, Period};
/// use rust_decimal::Decimal;
///
/// let income = Income::new("wages", Decimal::new(100, 0), Period::WEEKLY).with_owner("client");
/// assert!(Selection::kind("wages").owned_by("client").accepts(&income));
/// assert!(!Selection::kinds(&["SSI", "SSDI"]).accepts(&income));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Type restriction.
    pub kind: KindFilter<'a>,
    /// Owner restriction.
    pub owner: OwnerFilter<'a>,
}

impl<'a> Selection<'a> {
    /// Selects every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Selects records of one type.
    pub fn kind(kind: &'a str) -> Self {
        Self {
            kind: KindFilter::Is(kind),
            owner: OwnerFilter::Any,
        }
    }

    /// Selects records whose type is any of `kinds`.
    pub fn kinds(kinds: &'a [&'a str]) -> Self {
        Self {
            kind: KindFilter::AnyOf(kinds),
            owner: OwnerFilter::Any,
        }
    }

    /// Further restricts to records owned by `owner`.
    pub fn owned_by(mut self, owner: &'a str) -> Self {
        self.owner = OwnerFilter::Is(owner);
        self
    }

    /// Further restricts by an owner answer that may be unset.
    ///
    /// `None` leaves ownership unrestricted; an empty string is treated as the
    /// unanswered sentinel and matches nothing.
    pub fn owner_answer(mut self, owner: Option<&'a str>) -> Self {
        self.owner = match owner {
            None => OwnerFilter::Any,
            Some("") => OwnerFilter::Empty,
            Some(owner) => OwnerFilter::Is(owner),
        };
        self
    }

    /// Whether `record` passes both filters.
    pub fn accepts<T: Tagged + ?Sized>(&self, record: &T) -> bool {
        self.accepts_kind(record.kind()) && self.accepts_owner(record.owner())
    }

    fn accepts_kind(&self, kind: Option<&str>) -> bool {
        match (self.kind, kind) {
            (KindFilter::Any, _) => true,
            (_, None) => false,
            (KindFilter::Is(wanted), Some(kind)) => wanted == kind,
            (KindFilter::AnyOf(wanted), Some(kind)) => wanted.iter().any(|w| *w == kind),
        }
    }

    fn accepts_owner(&self, owner: Option<&str>) -> bool {
        match (self.owner, owner) {
            (OwnerFilter::Any, _) => true,
            (OwnerFilter::Empty, _) => false,
            (OwnerFilter::Is(wanted), Some(owner)) => wanted == owner,
            (OwnerFilter::Is(_), None) => false,
        }
    }
}

impl<'a> From<&'a str> for Selection<'a> {
    fn from(kind: &'a str) -> Self {
        Selection::kind(kind)
    }
}

impl<'a> From<&'a [&'a str]> for Selection<'a> {
    fn from(kinds: &'a [&'a str]) -> Self {
        Selection::kinds(kinds)
    }
}

impl<'a> From<KindFilter<'a>> for Selection<'a> {
    fn from(kind: KindFilter<'a>) -> Self {
        Self {
            kind,
            owner: OwnerFilter::Any,
        }
    }
}
