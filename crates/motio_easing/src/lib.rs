//! Motio Easing Catalogue
//!
//! Classical easing curves for value animation, exposed two ways:
//!
//! - **Free functions** ([`penner`]): Robert Penner's equations over the
//!   `(t, b, c, d)` contract, one per family and direction
//! - **Named catalogue** ([`Ease`]): a closed enum over the same functions,
//!   for selecting a curve from serialized animation definitions
//!
//! Every curve starts at `b` and ends at `b + c`; the family only decides
//! the pacing in between.
//!
//! # Example
//!
//! ```rust
//! use motio_easing::Ease;
//!
//! // Halfway through a quadratic ease-in, a quarter of the change has
//! // been applied.
//! let v = Ease::QuadIn.apply(0.5, 0.0, 1.0, 1.0);
//! assert_eq!(v, 0.25);
//!
//! // Curves are addressable by name for config-driven animation.
//! let ease: Ease = "bounce_out".parse().unwrap();
//! assert!((ease.apply(1.0, 0.0, 1.0, 1.0) - 1.0).abs() < 1e-6);
//! ```

pub mod ease;
pub mod penner;

pub use ease::{Ease, EaseFn, ParseEaseError};
