//! Sequences over interchangeable backing stores.
//!
//! This crate provides one generic sequence type, [`Seq`], covering a 2×2
//! matrix of behavior. The key insight: the backing store and the mutation
//! discipline are strategy parameters, not subclasses.
//!
//! ```text
//! DynArray / Chain  - backing stores, own their memory exclusively
//! SeqStore          - structural primitives, implemented once per store
//! Seq<T, S, D>      - the sequence; D selects the mutation discipline
//! ```
//!
//! The four concrete variants:
//!
//! | Alias | Backing store | Structural operations |
//! |-------|---------------|-----------------------|
//! | [`ArraySeq`] | contiguous buffer | mutate in place, return the same handle |
//! | [`ListSeq`] | doubly linked list | mutate in place, return the same handle |
//! | [`PersistentArraySeq`] | contiguous buffer | copy, mutate the copy, return it |
//! | [`PersistentListSeq`] | doubly linked list | copy, mutate the copy, return it |
//!
//! Because the discipline is a type parameter, a persistent sequence cannot
//! be mutated through any code path: the in-place operations simply do not
//! exist on it, and the persistent ones take `&self`.
//!
//! # Quick Start
//!
//! ```
//! use polyseq::{zip, ArraySeq, PersistentListSeq, Seq};
//!
//! // In place: one handle, mutated as it goes.
//! let mut squares: ArraySeq<u64> = ArraySeq::new();
//! for i in 1..=4 {
//!     squares.append(i * i);
//! }
//! assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
//!
//! // Persistent: every structural call returns a new sequence.
//! let base: PersistentListSeq<u64> = Seq::from_slice(&[1, 2]);
//! let grown = base.append(3);
//! assert_eq!(base.len(), 2);
//! assert_eq!(grown.to_vec(), vec![1, 2, 3]);
//!
//! // Combinators and pairing work across kinds.
//! let doubled = squares.map(|n| n * 2);
//! let paired = zip(&squares, &grown);
//! assert_eq!(paired.len(), 3);
//! assert_eq!(doubled.to_vec(), vec![2, 8, 18, 32]);
//! ```
//!
//! # Subranges
//!
//! `sub_seq(start, end)` is inclusive on both ends and bidirectional: a
//! `start` greater than `end` walks the range backward and yields the
//! elements in reverse positional order, so callers can fetch descending
//! ranges without reversing afterward.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for the stores and sequences,
//!   encoded as a plain list of elements.

#![warn(missing_docs)]

pub mod array;
pub mod chain;
pub mod error;
pub mod pair;
pub mod seq;
pub mod store;

pub use array::DynArray;
pub use chain::Chain;
pub use error::{Empty, OutOfRange};
pub use pair::{unzip, zip};
pub use seq::{
    ArraySeq, Discipline, InPlace, ListSeq, Persistent, PersistentArraySeq, PersistentListSeq, Seq,
};
pub use store::SeqStore;
