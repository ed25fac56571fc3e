//! A course's worth of data structures and discrete maths, written out by hand.
//!
//! # Purpose
//! Every module here started life as a lab assignment: first the classic collections (linked
//! lists, stacks, queues, hash tables, search trees and Huffman codes), then the discrete maths
//! that builds on them (binary relations, routes through graphs, spanning forests, Euler and
//! Hamilton, propositional logic and a small processor simulation). Writing them properly, rather
//! than just enough to pass, is the point.
//!
//! # Method
//! Collections are built on each other rather than on [`std`] where that is what the exercise is
//! about, so the [`Stack`](stack::Stack) is a [`ForwardList`](linked::ForwardList) underneath and
//! the [`Queue`](queue::Queue) is a [`LinkedList`](linked::LinkedList). Outside of that, [`Vec`]
//! and friends are used freely.
//!
//! # Error Handling
//! Fallible operations come in pairs where it makes sense: a `try_` method returning a strongly
//! typed [`Result`] and a panicking twin for callers that know better. Errors are small structs
//! implementing [`Error`](std::error::Error), grouped into enums for static dispatch when an
//! operation can fail in more than one way.
//!
//! # Dependencies
//! `derive_more` removes the boilerplate from the error enums and `rand` generates the random
//! graphs used by [`euler`].
//!
//! # Features
//! Each module sits behind a feature of the same name. `collections-all` and `labs` turn on the
//! two halves of the crate, and both are on by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "string")]
pub mod string;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "tree")]
pub mod tree;
#[cfg(feature = "huffman")]
pub mod huffman;
#[cfg(feature = "graph")]
pub mod graph;

#[cfg(feature = "relation")]
pub mod relation;
#[cfg(feature = "route")]
pub mod route;
#[cfg(feature = "forest")]
pub mod forest;
#[cfg(feature = "euler")]
pub mod euler;
#[cfg(feature = "logic")]
pub mod logic;
#[cfg(feature = "sim")]
pub mod sim;

#[allow(dead_code)]
pub(crate) mod util;
