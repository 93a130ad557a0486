use crate::{Extra, Uid};
use std::time::SystemTime;

/// A minimal interface for deriving identifiers from record content.
///
/// Builders are stateless with respect to the identifiers they produce: the
/// same content, time and extra always yield the same identifier.
pub trait UidBuilder<U: Uid> {
    /// Derives an identifier from raw content, with no time and no extra.
    ///
    /// `None` content is hashed as empty content.
    fn new_id(&self, data: Option<&[u8]>) -> U {
        self.new_id_with_extra(data, None, None)
    }

    /// Derives an identifier from raw content, stamped with a time derived
    /// from `time` when one is given.
    fn new_id_at(&self, data: Option<&[u8]>, time: Option<SystemTime>) -> U {
        self.new_id_with_extra(data, time, None)
    }

    /// Derives an identifier from raw content, an optional point in time and
    /// an optional extra.
    fn new_id_with_extra(
        &self,
        data: Option<&[u8]>,
        time: Option<SystemTime>,
        extra: Option<Extra>,
    ) -> U;

    /// Derives a child of `parent`: same hash and time, with its extra
    /// replaced by `extra`.
    ///
    /// A `None` parent has nothing to derive from and yields `None`.
    fn new_child_id(&self, parent: Option<&U>, extra: Option<Extra>) -> Option<U>;
}
