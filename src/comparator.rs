use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// total ordering over floats (NaN gets a stable position)
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::datatype::{Order, SortValue};
use crate::error::{Result, SortError};
use crate::selector::{Record, Selector};

/// Compare two extracted values under the fixed precedence rules.
///
/// 1. Strict equality yields `Equal`.
/// 2. An absent value sorts before any present value.
/// 3. Two numbers compare numerically (total order, infinities included).
/// 4. Two texts compare case-folded first, by raw code points on a tie,
///    so letter identity outranks letter case.
/// 5. Two instants compare by epoch milliseconds.
/// 6. Everything else falls back to relational order: booleans with
///    `false < true`, mixed-type pairs by a fixed variant rank so the
///    result stays deterministic and antisymmetric.
///
/// The precedence is fixed: two numbers always take the numeric rule even
/// though the fallback could also order them.
pub fn compare(a: &SortValue, b: &SortValue) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a, b) {
        (SortValue::Null, _) => Ordering::Less,
        (_, SortValue::Null) => Ordering::Greater,
        (SortValue::Number(x), SortValue::Number(y)) => OrderedFloat(*x).cmp(&OrderedFloat(*y)),
        (SortValue::Text(x), SortValue::Text(y)) => compare_text(x, y),
        (SortValue::Instant(x), SortValue::Instant(y)) => {
            x.timestamp_millis().cmp(&y.timestamp_millis())
        }
        (SortValue::Boolean(x), SortValue::Boolean(y)) => x.cmp(y),
        _ => a.rank().cmp(&b.rank()),
    }
}

// case-folded primary pass, raw code points break the tie
fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        Ordering::Equal => a.cmp(b),
        decisive => decisive,
    }
}

/// One tier of a multi-key sort: a selector paired with a direction.
pub struct Criterion<R> {
    pub selector: Selector<R>,
    pub order: Order,
}

impl<R> Criterion<R> {
    pub fn new(selector: impl Into<Selector<R>>, order: Order) -> Self {
        Criterion {
            selector: selector.into(),
            order,
        }
    }

    pub fn asc(selector: impl Into<Selector<R>>) -> Self {
        Criterion::new(selector, Order::Ascending)
    }

    pub fn desc(selector: impl Into<Selector<R>>) -> Self {
        Criterion::new(selector, Order::Descending)
    }
}

impl<R> From<Selector<R>> for Criterion<R> {
    fn from(selector: Selector<R>) -> Criterion<R> {
        Criterion {
            selector,
            order: Order::default(),
        }
    }
}

impl<R> Clone for Criterion<R> {
    fn clone(&self) -> Self {
        Criterion {
            selector: self.selector.clone(),
            order: self.order,
        }
    }
}

impl<R> fmt::Debug for Criterion<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Criterion")
            .field("selector", &self.selector)
            .field("order", &self.order)
            .finish()
    }
}

/// Parses one textual tier: a dot-path optionally followed by an order
/// word, e.g. `"age desc"` or `"address.city"`.
impl<R> FromStr for Criterion<R> {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let path = tokens.next().ok_or_else(|| SortError::Parse {
            message: "empty criterion".to_string(),
        })?;
        let order = match tokens.next() {
            Some(word) => word.parse::<Order>()?,
            None => Order::default(),
        };
        if let Some(extra) = tokens.next() {
            return Err(SortError::Parse {
                message: format!("unexpected token: {extra}"),
            });
        }
        Ok(Criterion::new(path, order))
    }
}

/// Parse a comma-separated sort specification into criteria,
/// e.g. `"age desc, name"`.
pub fn parse_criteria<R>(spec: &str) -> Result<Vec<Criterion<R>>> {
    if spec.trim().is_empty() {
        return Err(SortError::Parse {
            message: "empty sort specification".to_string(),
        });
    }
    let criteria = spec
        .split(',')
        .map(|tier| tier.parse::<Criterion<R>>())
        .collect::<Result<Vec<_>>>()?;
    debug!(tiers = criteria.len(), "parsed sort specification");
    Ok(criteria)
}

/// Build an ascending comparator over a single selector.
///
/// The returned closure is pure and reentrant: it reads its two records,
/// allocates no shared state, and may be called any number of times, which
/// is what a generic sort routine requires of it.
pub fn by<R, S>(selector: S) -> impl Fn(&R, &R) -> Ordering
where
    R: Record,
    S: Into<Selector<R>>,
{
    by_with(selector, Order::Ascending)
}

/// Build a comparator over a single selector with an explicit order.
pub fn by_with<R, S>(selector: S, order: Order) -> impl Fn(&R, &R) -> Ordering
where
    R: Record,
    S: Into<Selector<R>>,
{
    let selector = selector.into();
    move |a, b| order.apply(compare(&selector.resolve(a), &selector.resolve(b)))
}

/// Build a comparator cascading over several criteria, each with its own
/// direction. Criteria are applied left to right; the first non-equal
/// result wins, and a full tie yields `Equal` so a stable host sort keeps
/// the original relative order.
pub fn by_criteria<R, I>(criteria: I) -> impl Fn(&R, &R) -> Ordering
where
    R: Record,
    I: IntoIterator<Item = Criterion<R>>,
{
    let criteria: Vec<Criterion<R>> = criteria.into_iter().collect();
    trace!(tiers = criteria.len(), "compiled comparator");
    move |a, b| {
        for criterion in &criteria {
            let ordering = criterion.order.apply(compare(
                &criterion.selector.resolve(a),
                &criterion.selector.resolve(b),
            ));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Build a cascading comparator from bare selectors sharing one overall
/// order.
pub fn by_keys<R, I, S>(selectors: I, order: Order) -> impl Fn(&R, &R) -> Ordering
where
    R: Record,
    I: IntoIterator<Item = S>,
    S: Into<Selector<R>>,
{
    by_criteria(
        selectors
            .into_iter()
            .map(move |selector| Criterion::new(selector, order)),
    )
}
