//! Pure functional operations over sequences and maps.
//!
//! Every function takes its input by shared reference and returns a freshly
//! allocated result; [`chunk`] is the one exception and hands back sub-slices
//! of its input. [`reverse_in_place`] is the only function that mutates.
//!
//! Inputs are anything implementing [`Sequence`] (slices, vectors, arrays and
//! `Option`s of those) or [`Mapping`] (hash maps, b-tree maps and `Option`s of
//! those). An absent input (`None`) is treated exactly like an empty one.
//!
//! The `try_` family stops at the first failing callback and returns the work
//! done so far together with the error, see [`Partial`].
//!
//! ```
//! use seqkit::{chunk, intersection, try_reduce, unique, Partial};
//!
//! assert_eq!(unique(&[3, 1, 3, 2]), vec![3, 1, 2]);
//! assert_eq!(intersection(&[4, 1, 2], &[2, 4]), vec![4, 2]);
//!
//! let absent: Option<Vec<i32>> = None;
//! assert!(unique(&absent).is_empty());
//!
//! let total = try_reduce(&[1, 2, 3, 4, 5], 0, |acc, x| {
//!     if *x == 4 {
//!         Err("four")
//!     } else {
//!         Ok(acc + x)
//!     }
//! });
//! assert_eq!(total, Err(Partial::new(6, "four")));
//!
//! assert!(chunk(&[1, 2, 3], 0).is_err());
//! ```

mod error;
mod fallible;
mod group;
mod mapping;
mod projection;
mod reshape;
mod search;
mod sequence;
mod set;
mod transform;

pub use error::{Error, Partial, PartialResult, Result};
pub use fallible::{try_filter, try_map, try_reduce};
pub use group::group_by;
pub use mapping::Mapping;
pub use projection::{keys, map_to_vec, sorted_keys, values};
pub use reshape::{chunk, flatten, reverse, reverse_in_place};
pub use search::{all, any, contains, find, first, last, position};
pub use sequence::Sequence;
pub use set::{difference, intersection, union, union_sorted, unique};
pub use transform::{filter, map, reduce};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
