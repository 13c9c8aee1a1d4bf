//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  A `NodeId` is a flat index into a
//! grid's node arena: two ids name the same node iff they hold the same index.

use std::fmt;

/// Generate a typed `u32` index wrapper with a short display prefix.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident = $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Sentinel for "no id"; never produced by a grid or a store.
            pub const INVALID: $name = $name(u32::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Checked conversion from a `Vec` index.  `None` if the index
            /// does not fit or would collide with `INVALID`.
            #[inline]
            pub fn from_index(i: usize) -> Option<$name> {
                u32::try_from(i).ok().filter(|&n| n != u32::MAX).map($name)
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($prefix, "{}"), self.0)
                } else {
                    f.write_str(concat!($prefix, "-"))
                }
            }
        }
    };
}

typed_id! {
    /// Index of a node in a grid's arena (`x * height + y`).
    pub struct NodeId = "n";
}

typed_id! {
    /// Index of an agent in mobility storage.
    pub struct AgentId = "a";
}
