//! # MathMend Core
//!
//! Repair front-end for LaTeX math emitted by a generative text source.
//!
//! Generators routinely produce markup that is almost, but not quite, LaTeX:
//! missing backslashes (`times` instead of `\times`), stray zero-width
//! characters, unbalanced braces, half-filled commands. This crate holds the
//! three pure stages that turn that output into a canonical form a math
//! renderer can consume:
//!
//! ```text
//! raw text ──► sanitize ──► normalize ──► canonical text
//!                                │
//!                                └──► validate ──► ValidationReport
//! ```
//!
//! - [`sanitize`] removes invisible characters, collapses over-escaping,
//!   heuristically balances braces and drops empty-argument commands. It is
//!   idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
//! - [`normalize`] applies the ordered [`rules::REWRITE_RULES`] table to
//!   restore missing escape prefixes, repairs tabular row separators and
//!   converts plain-text arrows found outside math spans.
//! - [`validate`] reports structural problems as data. It never mutates its
//!   input and never fails; a broken formula still flows through the rest of
//!   the pipeline.
//!
//! Every function here is referentially transparent and safe to call from
//! any number of threads. The conversion back-ends live in
//! `mathmend-render`; composition and streaming live in `mathmend-pipeline`.

pub mod normalizer;
pub mod rules;
pub mod sanitizer;
pub mod validator;

pub use normalizer::normalize;
pub use rules::{RewriteRule, RuleCategory};
pub use sanitizer::sanitize;
pub use validator::{ValidationIssue, ValidationReport, is_valid, validate};
