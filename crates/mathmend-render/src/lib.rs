//! # MathMend Render
//!
//! Two independent back-ends over the canonical command vocabulary:
//!
//! - [`to_unicode`] — a Unicode plain-text approximation for contexts
//!   without a math typesetting renderer (`\frac{1}{2}` → `½`, `x^{2}` →
//!   `x²`).
//! - [`to_speech`] — a Turkish spoken-phrase sequence for audio narration
//!   (`x^{2}` → `x kare`). [`to_speech_brief`] is the reduced variant for
//!   callers that only need the basic transformations.
//!
//! Both are total functions: any string in, a string out, unknown commands
//! silently deleted rather than leaked to the consumer. The shared
//! conversion tables live in [`tables`].

pub mod speech;
pub mod tables;
pub mod unicode;

mod scan;

pub use speech::{to_speech, to_speech_brief};
pub use unicode::{to_plain_text, to_unicode};
