//! Element-wise pairing across two sequences.
//!
//! Both operations consume only the public sequence contract, so the inputs
//! may mix backing stores and mutation disciplines freely. Results are
//! array-backed in-place sequences.

use crate::seq::{ArraySeq, Discipline, Seq};
use crate::store::SeqStore;

/// Pairs `a` and `b` element-wise.
///
/// The result has length `min(a.len(), b.len())`; surplus elements of the
/// longer input are silently dropped.
///
/// # Example
///
/// ```
/// use polyseq::{zip, ArraySeq, ListSeq, Seq};
///
/// let numbers: ArraySeq<u32> = Seq::from_slice(&[1, 2, 3]);
/// let names: ListSeq<&str> = Seq::from_slice(&["a", "b"]);
///
/// let paired = zip(&numbers, &names);
/// assert_eq!(paired.to_vec(), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B, SA, SB, DA, DB>(a: &Seq<A, SA, DA>, b: &Seq<B, SB, DB>) -> ArraySeq<(A, B)>
where
    A: Clone,
    B: Clone,
    SA: SeqStore<A>,
    SB: SeqStore<B>,
    DA: Discipline,
    DB: Discipline,
{
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x.clone(), y.clone()))
        .collect()
}

/// Splits a sequence of pairs into its component sequences, preserving
/// order.
///
/// `unzip(&zip(a, b))` recovers `a` and `b` truncated to their common
/// length.
pub fn unzip<A, B, S, D>(zipped: &Seq<(A, B), S, D>) -> (ArraySeq<A>, ArraySeq<B>)
where
    A: Clone,
    B: Clone,
    S: SeqStore<(A, B)>,
    D: Discipline,
{
    let mut firsts = ArraySeq::new();
    let mut seconds = ArraySeq::new();
    for (x, y) in zipped.iter() {
        firsts.append(x.clone());
        seconds.append(y.clone());
    }
    (firsts, seconds)
}
