// ============================================================================
// Optional Ordering & Extrema
// Total order over optional values with absence as the bottom element
// ============================================================================
//
// Instants and spans share one comparison rule: an absent value sorts
// strictly below every present value, and two absent values are equal. All
// predicates and the extrema reducers derive from the single three-way
// `compare` so the rule is encoded exactly once.

use std::cmp::Ordering;

/// Canonical three-way comparison over optional values.
///
/// `None` is the bottom element of the order.
#[inline]
pub fn compare<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(y),
    }
}

/// `a == b` under the optional order.
#[inline]
pub fn equals<T: Ord>(a: Option<&T>, b: Option<&T>) -> bool {
    compare(a, b) == Ordering::Equal
}

/// `a != b` under the optional order.
#[inline]
pub fn not_equals<T: Ord>(a: Option<&T>, b: Option<&T>) -> bool {
    compare(a, b) != Ordering::Equal
}

/// `a < b` under the optional order.
#[inline]
pub fn less_than<T: Ord>(a: Option<&T>, b: Option<&T>) -> bool {
    compare(a, b) == Ordering::Less
}

/// `a <= b` under the optional order.
#[inline]
pub fn less_or_equal<T: Ord>(a: Option<&T>, b: Option<&T>) -> bool {
    compare(a, b) != Ordering::Greater
}

/// `a > b` under the optional order.
#[inline]
pub fn greater_than<T: Ord>(a: Option<&T>, b: Option<&T>) -> bool {
    compare(a, b) == Ordering::Greater
}

/// `a >= b` under the optional order.
#[inline]
pub fn greater_or_equal<T: Ord>(a: Option<&T>, b: Option<&T>) -> bool {
    compare(a, b) != Ordering::Less
}

fn pairwise_max<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    if compare(b.as_ref(), a.as_ref()) == Ordering::Greater {
        b
    } else {
        a
    }
}

fn pairwise_min<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    if compare(b.as_ref(), a.as_ref()) == Ordering::Less {
        b
    } else {
        a
    }
}

/// Left-to-right pairwise maximum of two or more optional values.
///
/// A present value always beats an absent one; the maximum is absent only
/// when every operand is absent.
pub fn max_of<T, I>(first: Option<T>, second: Option<T>, rest: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = Option<T>>,
{
    let mut best = pairwise_max(first, second);
    for candidate in rest {
        best = pairwise_max(best, candidate);
    }
    best
}

/// Left-to-right pairwise minimum of two or more optional values.
///
/// Absence is the bottom element, so it propagates: the minimum is absent as
/// soon as any operand is absent.
pub fn min_of<T, I>(first: Option<T>, second: Option<T>, rest: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = Option<T>>,
{
    let mut best = pairwise_min(first, second);
    for candidate in rest {
        best = pairwise_min(best, candidate);
    }
    best
}
