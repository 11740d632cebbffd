//! `holdem_eval` is a library for fast Texas Hold'em hand evaluation.
//!
//! Given a seven-card [`CardSet`](holdem_base::CardSet) — two hole cards
//! plus five community cards — [`poker_rank`] classifies the best
//! five-card hand it contains and returns a [`HandRanking`] that totally
//! orders against every other seven-card hand's ranking, kicker-by-kicker.
//!
//! # Flags
//!
//! This crate has the following Cargo features:
//!
//! - `std`: by default, `holdem_eval` is a `#![no_std]` crate; enable `std`
//!   to additionally pull in `holdem_base`'s `std`-gated pieces.
//!
//! # Example
//!
//! ```
//! use holdem_base::CardSet;
//! use holdem_eval::poker_rank;
//!
//! let hand: CardSet = "Ks Kd Ac 6s 4c Jc Th".parse()?;
//! let ranking = poker_rank(&hand);
//! println!("{}", ranking.category());
//! # Ok::<(), holdem_base::ParseError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod standard;

pub use standard::{poker_rank, HandCategory, HandRanking};
