//! First Order Methods for Smooth Minimization
//!
//! For minimizing a "smooth" objective function, $`f`$, with a
//! continuous gradient $`\nabla f`$. Two step-size strategies are provided:
//! - [Armijo descent](fn.armijo_descent.html): the step is chosen each iteration
//!   by halving a trial step until it gives sufficient decrease,
//! - [heavy-ball descent](fn.heavy_ball_descent.html): a fixed step with a
//!   decaying momentum term.
//!
//! Both methods share the same stopping rule, see [`Termination`](enum.Termination.html),
//! and report the final iterate together with why the iteration stopped.

mod armijo;
pub use armijo::*;
mod heavy_ball;
pub use heavy_ball::*;
mod params;
pub use params::*;

use ndarray::prelude::*;
use ndarray::NdFloat;
use num_traits::Float;

/// Do nothing function for optional user callback (returns false)
#[allow(clippy::needless_pass_by_value)]
pub fn nop<T, D>(_x: ArrayView<T, D>, _itr: usize) -> bool {
    false
}

/// Euclidean norm, $`\|v\|_2 = \sqrt{\sum_i v_i^2}`$
pub fn l2norm<S: NdFloat>(v: ArrayView1<S>) -> S {
    Float::sqrt(v.dot(&v))
}

/// Why a descent method stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The gradient residual fell to `eps_r` or below.
    Gradient,
    /// The last step was no longer than `eps_s`.
    StepLength,
    /// `max_iter` outer iterations were performed.
    IterationLimit,
    /// The user callback asked to stop.
    Callback,
}

impl Termination {
    /// Whether the run stopped on one of the two tolerances.
    pub fn converged(self) -> bool {
        match self {
            Termination::Gradient | Termination::StepLength => true,
            Termination::IterationLimit | Termination::Callback => false,
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Gradient => write!(f, "gradient norm below tolerance"),
            Termination::StepLength => write!(f, "step length below tolerance"),
            Termination::IterationLimit => write!(f, "maximum iterations reached"),
            Termination::Callback => write!(f, "stopped by callback"),
        }
    }
}

/// Final iterate of a descent run
#[derive(Clone, Debug)]
pub struct Solution<S> {
    /// The last iterate.
    pub x: Array1<S>,
    /// Objective value at `x`.
    pub value: S,
    /// Norm of the gradient at `x`.
    pub grad_norm: S,
    /// Number of outer iterations performed.
    pub iterations: usize,
    /// Why the iteration stopped.
    pub termination: Termination,
}

impl<S: NdFloat> Tolerances<S> {
    /// Checks the gate in order: gradient residual, then step length.
    ///
    /// Comparisons against NaN are false, so a diverged run is never
    /// reported as converged.
    pub fn check(&self, grad_norm: S, step_len: S) -> Option<Termination> {
        if grad_norm <= self.eps_r {
            Some(Termination::Gradient)
        } else if step_len <= self.eps_s {
            Some(Termination::StepLength)
        } else {
            None
        }
    }
}

/// Backtracking line search on the Armijo condition
///
/// Tries $`\alpha = \alpha_0, \alpha_0/2, \alpha_0/4, \dots`$, at most `ntries` times,
/// and accepts the first step with
/// ```math
/// f(x) - f(x - \alpha g) \geq \sigma \alpha \|g\|_2^2
/// ```
/// Returns the step together with whether the condition was met. If no trial
/// step is accepted, the last (smallest) one tried is returned.
///
/// Parameters
/// ----------
/// - __func:__          objective function $`f`$
/// - __x:__             current point
/// - __fx:__            $`f(x)`$
/// - __grad:__          gradient $`g`$ at `x`
/// - __grad_norm_sq:__  $`\|g\|_2^2`$
/// - __alpha0:__        initial trial step
/// - __sigma:__         sufficient-decrease factor
/// - __ntries:__        maximum number of trial steps
pub fn armijo_backtracking<S: NdFloat>(
    func: impl Fn(ArrayView1<S>) -> S,
    x: ArrayView1<S>,
    fx: S,
    grad: ArrayView1<S>,
    grad_norm_sq: S,
    alpha0: S,
    sigma: S,
    ntries: usize,
) -> (S, bool) {
    let two = S::from(2.).unwrap();
    let mut alpha = alpha0;
    let mut candidate = x.to_owned();

    for attempt in 1..=ntries {
        candidate.assign(&x);
        candidate.scaled_add(-alpha, &grad);
        if fx - func(candidate.view()) >= sigma * alpha * grad_norm_sq {
            return (alpha, true);
        }
        if attempt < ntries {
            alpha = alpha / two;
        }
    }
    (alpha, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn l2norm_values() {
        assert_eq!(l2norm(array![3., 4.].view()), 5.0);
        assert_eq!(l2norm(array![0., 0.].view()), 0.0);
        assert_abs_diff_eq!(l2norm(array![1.0f32, 1., 1., 1.].view()), 2.0);
    }

    #[test]
    fn gate_prefers_gradient() {
        let tol = Tolerances {
            eps_s: 1e-6,
            eps_r: 1e-6,
            max_iter: 10,
        };
        assert_eq!(tol.check(0.0, 0.0), Some(Termination::Gradient));
        assert_eq!(tol.check(1.0, 1e-7), Some(Termination::StepLength));
        assert_eq!(tol.check(1.0, f64::INFINITY), None);
        assert_eq!(tol.check(f64::NAN, f64::NAN), None);
    }

    #[test]
    fn backtracking_accepts_first_step() {
        // f(x) = x^2 / 2 at x = 1: a unit step lands on the minimum
        let f = |x: ArrayView1<f64>| 0.5 * x.dot(&x);
        let x = array![1.];
        let (alpha, ok) = armijo_backtracking(f, x.view(), 0.5, x.view(), 1.0, 1.0, 0.5, 10);
        assert!(ok);
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn backtracking_halves_until_decrease() {
        // f(x) = 5 x^2 at x = 1, g = 10: alpha must satisfy 1 - (1 - 10 alpha)^2 >= 10 alpha
        let f = |x: ArrayView1<f64>| 5.0 * x.dot(&x);
        let x = array![1.];
        let g = array![10.];
        let (alpha, ok) = armijo_backtracking(f, x.view(), 5.0, g.view(), 100.0, 1.0, 0.5, 20);
        assert!(ok);
        assert_eq!(alpha, 0.0625);
    }

    #[test]
    fn backtracking_accepts_equality() {
        // |x - c|^2 from the origin: alpha = 1/2 lands on c with f(x) - f(c) = sigma alpha |g|^2
        let c = array![1., -3.];
        let f = |x: ArrayView1<f64>| (&x - &c).mapv(|v| v * v).sum();
        let x = array![0., 0.];
        let g = array![-2., 6.];
        let (alpha, ok) =
            armijo_backtracking(f, x.view(), 10.0, g.view(), g.dot(&g), 1.0, 0.5, 10);
        assert!(ok);
        assert_eq!(alpha, 0.5);
    }

    #[test]
    fn backtracking_soft_failure() {
        // a flat objective never decreases
        let f = |_x: ArrayView1<f64>| 1.0;
        let x = array![1., 2.];
        let g = array![1., 0.];
        let (alpha, ok) = armijo_backtracking(f, x.view(), 1.0, g.view(), 1.0, 1.0, 0.5, 3);
        assert!(!ok);
        assert_eq!(alpha, 0.25);

        let (alpha, ok) = armijo_backtracking(f, x.view(), 1.0, g.view(), 1.0, 1.0, 0.5, 0);
        assert!(!ok);
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn termination_converged() {
        assert!(Termination::Gradient.converged());
        assert!(Termination::StepLength.converged());
        assert!(!Termination::IterationLimit.converged());
        assert_eq!(
            Termination::IterationLimit.to_string(),
            "maximum iterations reached"
        );
    }
}
