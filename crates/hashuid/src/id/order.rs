use crate::Uid;
use core::cmp::Ordering;
use std::collections::BTreeMap;

/// Null-tolerant comparison of two possibly absent identifiers.
///
/// Two absent identifiers are equal, an absent identifier sorts before any
/// present one, and present identifiers use their [`Ord`].
///
/// # Example
///
/// ```
/// use hashuid::{HashUid, compare};
/// use std::cmp::Ordering;
///
/// let uid = HashUid::from_hashes(1, 2, 3);
/// assert_eq!(compare::<HashUid>(None, None), Ordering::Equal);
/// assert_eq!(compare(Some(&uid), None), Ordering::Greater);
/// assert_eq!(compare(None, Some(&uid)), Ordering::Less);
/// ```
#[must_use]
pub fn compare<U: Ord>(a: Option<&U>, b: Option<&U>) -> Ordering {
    a.cmp(&b)
}

/// Compares two identifiers by their sharded portion only, ignoring extras.
#[must_use]
pub fn compare_sharded<U: Uid>(a: &U, b: &U) -> Ordering {
    a.sharded_portion().cmp(&b.sharded_portion())
}

/// Sorts identifiers by sharded portion. The sort is stable, so identifiers
/// sharing a placement key keep their relative order.
pub fn sort_by_shard<U: Uid>(uids: &mut [U]) {
    uids.sort_by_cached_key(U::sharded_portion);
}

/// Groups identifiers by sharded portion, in placement-key order.
#[must_use]
pub fn group_by_shard<U, I>(uids: I) -> BTreeMap<String, Vec<U>>
where
    U: Uid,
    I: IntoIterator<Item = U>,
{
    let mut groups: BTreeMap<String, Vec<U>> = BTreeMap::new();
    for uid in uids {
        groups.entry(uid.sharded_portion()).or_default().push(uid);
    }
    groups
}
