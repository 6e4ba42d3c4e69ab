//! # pennant
//!
//! A small registry for POSIX/GNU style command line flags. Each flag binds
//! a long name (and optional one-letter shorthand) to a typed [`value::Value`]
//! that knows how to parse a textual token into itself and print itself back
//! out. A registration may declare a no-argument default token; such a flag
//! can appear bare on the command line (`-v -v -v`) and the parser feeds it
//! the declared sentinel instead of consuming an argument.
//!
//! The worked value type is the count flag ([`value::count`]): it increments
//! on every bare occurrence and can be overwritten with an explicit integer
//! literal (`-v=5`).
pub mod set;
pub mod spec;
pub mod value;
