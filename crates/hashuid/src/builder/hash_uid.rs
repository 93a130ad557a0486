use crate::{
    ContentHasher, Extra, HashUid, SystemClock, TimeSource, UidBuilder, Xxh3Hasher, time_of_day,
};
use std::time::SystemTime;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Derives [`HashUid`]s from record content.
///
/// The builder holds a [`ContentHasher`] for the three hash components and a
/// [`TimeSource`] used by [`HashUidBuilder::new_id_now`]. Times are stored as
/// the millisecond of the UTC day (see [`time_of_day`]).
///
/// # Example
///
/// ```
/// use hashuid::{Extra, HashUidBuilder, Uid, UidBuilder};
///
/// let builder = HashUidBuilder::new();
/// let uid = builder.new_id(Some(b"20100901: the quick brown fox".as_slice()));
/// assert_eq!(uid.time(), None);
///
/// let child = builder
///     .new_child_id(Some(&uid), Some(Extra::new("attachment.1")?))
///     .unwrap();
/// assert_eq!(child.sharded_portion(), uid.to_string());
/// assert_eq!(child.to_string(), format!("{uid}.attachment.1"));
/// # Ok::<(), hashuid::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct HashUidBuilder<H = Xxh3Hasher, T = SystemClock>
where
    H: ContentHasher,
    T: TimeSource,
{
    hasher: H,
    clock: T,
}

impl HashUidBuilder {
    /// Creates a builder with the default seeded [`Xxh3Hasher`] and the
    /// [`SystemClock`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hasher: Xxh3Hasher::with_seed(crate::DEFAULT_SEED),
            clock: SystemClock,
        }
    }
}

impl<H> HashUidBuilder<H, SystemClock>
where
    H: ContentHasher,
{
    /// Creates a builder with a custom hasher and the [`SystemClock`].
    pub const fn with_hasher(hasher: H) -> Self {
        Self {
            hasher,
            clock: SystemClock,
        }
    }
}

impl<H, T> HashUidBuilder<H, T>
where
    H: ContentHasher,
    T: TimeSource,
{
    /// Creates a builder from a hasher and a time source.
    pub const fn from_parts(hasher: H, clock: T) -> Self {
        Self { hasher, clock }
    }

    /// Derives an identifier from raw content, stamped with the current time
    /// of this builder's [`TimeSource`].
    pub fn new_id_now(&self, data: Option<&[u8]>) -> HashUid {
        self.new_id_at(data, Some(self.clock.now()))
    }

    fn hash(&self, data: Option<&[u8]>) -> HashUid {
        let [h0, h1, h2] = self.hasher.hash(data.unwrap_or_default());
        HashUid::from_hashes(h0, h1, h2)
    }
}

impl<H, T> UidBuilder<HashUid> for HashUidBuilder<H, T>
where
    H: ContentHasher,
    T: TimeSource,
{
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, data), fields(len = data.map_or(0, <[u8]>::len)), ret(Display))
    )]
    fn new_id_with_extra(
        &self,
        data: Option<&[u8]>,
        time: Option<SystemTime>,
        extra: Option<Extra>,
    ) -> HashUid {
        let uid = self.hash(data);
        let uid = match time.map(time_of_day) {
            Some(millis) => uid.stamped(millis),
            None => uid,
        };
        uid.with_extra(extra)
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn new_child_id(&self, parent: Option<&HashUid>, extra: Option<Extra>) -> Option<HashUid> {
        parent.map(|parent| parent.clone().with_extra(extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MILLIS_PER_DAY, Uid};
    use std::time::{Duration, UNIX_EPOCH};

    struct FixedTime(u64);

    impl TimeSource for FixedTime {
        fn now(&self) -> SystemTime {
            UNIX_EPOCH + Duration::from_millis(self.0)
        }
    }

    fn extra(s: &str) -> Option<Extra> {
        Some(Extra::new(s).unwrap())
    }

    #[test]
    fn none_content_hashes_as_empty() {
        let builder = HashUidBuilder::new();
        let uid = builder.new_id(None);
        assert_eq!(uid, builder.new_id(Some(b"".as_slice())));
        assert_eq!(uid.time(), None);
        assert!(uid.raw_time() < 0);
    }

    #[test]
    fn none_parent_yields_none() {
        let builder = HashUidBuilder::new();
        assert_eq!(builder.new_child_id(None, None), None);
        assert_eq!(builder.new_child_id(None, extra("x")), None);
    }

    #[test]
    fn child_replaces_extra_and_keeps_time() {
        let builder = HashUidBuilder::from_parts(Xxh3Hasher::default(), FixedTime(42));
        let parent = builder.new_id_now(Some(b"record".as_slice())).with_extra(extra("old.path"));
        let child = builder.new_child_id(Some(&parent), extra("new")).unwrap();
        assert_eq!(child.time(), Some(42));
        assert_eq!(child.extra().unwrap(), "new");
        assert_eq!(child.sharded_portion(), parent.sharded_portion());

        let bare = builder.new_child_id(Some(&parent), None).unwrap();
        assert_eq!(bare, parent.without_extra());
    }

    #[test]
    fn time_is_the_millisecond_of_the_day() {
        let builder = HashUidBuilder::from_parts(
            Xxh3Hasher::default(),
            FixedTime(10 * MILLIS_PER_DAY as u64 + 1_000),
        );
        let uid = builder.new_id_now(Some(b"record".as_slice()));
        assert_eq!(uid.time(), Some(1_000));
        assert!(uid.to_string().ends_with("+rs"));
    }

    #[test]
    fn custom_hasher_is_used() {
        let builder = HashUidBuilder::with_hasher(|data: &[u8]| [data.len() as i32, -1, 36]);
        let uid = builder.new_id_with_extra(Some(b"abc".as_slice()), None, extra("e"));
        assert_eq!(uid.to_string(), "3.-1.10.e");
        assert_eq!(uid.option_prefix(), "3");
    }

    #[test]
    fn seed_changes_identifiers() {
        let a = HashUidBuilder::new().new_id(Some(b"record".as_slice()));
        let b = HashUidBuilder::with_hasher(Xxh3Hasher::with_seed(7)).new_id(Some(b"record".as_slice()));
        assert_ne!(a, b);
    }
}
