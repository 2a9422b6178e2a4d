//! Coursework algorithms: a comparison sort family with a pluggable stability policy, plus the
//! companion exercises (bracket balance, palindromes, nearest phone numbers, quickselect median,
//! capacity bounded containers).

pub mod brackets;
pub mod containers;
pub mod element;
pub mod median;
pub mod nearest;
pub mod palindrome;
pub mod patterns;
pub mod phone;
pub mod sorts;
pub mod trace;

pub use element::Element;
pub use sorts::Stability;
pub use trace::{LogTrace, NoTrace, Recorder, Step, Trace};
