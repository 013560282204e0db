use super::{armijo_backtracking, l2norm, ArmijoParams, Solution, Termination, Tolerances};
use ndarray::prelude::*;
use ndarray::NdFloat; // includes LinalgScalar and ScalarOperand

/// Gradient Descent with an Armijo backtracking line search
///
/// Also known as steepest descent with sufficient-decrease step control.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// g_i &= \nabla f(x_i) \\
/// \alpha_i &= \max_{k \geq 0} \left\{ \alpha_0 2^{-k} :
///     f(x_i) - f(x_i - \alpha_0 2^{-k} g_i) \geq \sigma \alpha_0 2^{-k} \|g_i\|_2^2 \right\} \\
/// x_{i+1} &= x_i - \alpha_i g_i
/// \end{aligned}
/// ```
/// The search tries at most `max_iter` steps; if none satisfies the
/// condition the smallest one is taken anyway.
///
/// The iteration stops before an update once $`\|g_i\|_2 \leq \epsilon_r`$
/// or $`\|x_i - x_{i-1}\|_2 \leq \epsilon_s`$, or after `max_iter` updates.
///
/// Parameters
/// ----------
/// - __func:__      objective function $`f`$
/// - __grad:__      function that computes gradient g(x) of the objective
/// - __x0:__        initial guess
/// - __tol:__       step-length and residual tolerances, iteration limit
/// - __params:__    initial trial step $`\alpha_0`$ and decrease factor $`\sigma`$
/// - __callback:__  User-defined function to be evaluated with two arguments (x,iter).
///                   It is evaluated at (x0,0) and then after each iteration.
///                   If it returns True, the function terminates early.
pub fn armijo_descent<S: NdFloat>(
    func: impl Fn(ArrayView1<S>) -> S,
    grad: impl Fn(ArrayView1<S>) -> Array1<S>,
    x0: ArrayView1<S>,
    tol: &Tolerances<S>,
    params: ArmijoParams<S>,
    mut callback: impl FnMut(ArrayView1<S>, usize) -> bool,
) -> Solution<S> {
    let mut x = x0.to_owned();
    let mut g = grad(x.view());
    let mut grad_norm = l2norm(g.view());
    let mut step_len = S::infinity();
    let mut iterations = 0;

    let termination = if callback(x.view(), 0) {
        Termination::Callback
    } else {
        loop {
            if let Some(reason) = tol.check(grad_norm, step_len) {
                break reason;
            }
            if iterations == tol.max_iter {
                break Termination::IterationLimit;
            }
            iterations += 1;

            let (alpha, _accepted) = armijo_backtracking(
                &func,
                x.view(),
                func(x.view()),
                g.view(),
                g.dot(&g),
                params.alpha0,
                params.sigma,
                tol.max_iter,
            );
            x.scaled_add(-alpha, &g);
            step_len = alpha * grad_norm;

            g = grad(x.view());
            grad_norm = l2norm(g.view());
            if callback(x.view(), iterations) {
                break Termination::Callback;
            }
        }
    };

    Solution {
        value: func(x.view()),
        x,
        grad_norm,
        iterations,
        termination,
    }
}
