//! The `ndarray-descent` crate provides gradient descent methods that
//! can be used to minimize a smooth function of an `ndarray` vector.
//!
//! Two step-size strategies are included:
//! - Armijo backtracking line search
//! - Heavy-ball momentum with a fixed step
//!
//! Both take the objective and its gradient as plain closures, an initial
//! guess, and an explicit [`Tolerances`](smooth/struct.Tolerances.html) value.
//! They never fail: a run that does not converge still returns its last
//! iterate, together with the reason it stopped.
//!
//! ```
//! use ndarray::prelude::*;
//! use ndarray_descent::smooth::{armijo_descent, nop, ArmijoParams, Termination, Tolerances};
//!
//! let c = array![1., -3.];
//! let sol = armijo_descent(
//!     |x: ArrayView1<f64>| (&x - &c).mapv(|v| v * v).sum(),
//!     |x: ArrayView1<f64>| (&x - &c) * 2.,
//!     array![0., 0.].view(),
//!     &Tolerances::default(),
//!     ArmijoParams::default(),
//!     nop,
//! );
//! assert_eq!(sol.termination, Termination::Gradient);
//! assert_eq!(sol.x, c);
//! ```

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

pub mod smooth;
