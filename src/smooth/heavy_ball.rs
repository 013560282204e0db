use super::{l2norm, HeavyBallParams, Solution, Termination, Tolerances};
use ndarray::prelude::*;
use ndarray::NdFloat;

/// Heavy-Ball Gradient Descent
///
/// Polyak's momentum method with a fixed step. The previous step is
/// kept as a direction and decayed by $`\eta`$ every iteration.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// d_0 &= -\alpha \nabla f(x_0) \\
/// x_{i+1} &= x_i + d_i \\
/// d_{i+1} &= \eta d_i - \alpha \nabla f(x_{i+1})
/// \end{aligned}
/// ```
/// With $`\eta = 0`$ this is plain gradient descent with step $`\alpha`$.
///
/// The stopping rule is the same as for [`armijo_descent`](fn.armijo_descent.html).
/// `func` is not needed by the update and is only evaluated once, to report
/// the objective value of the final iterate.
///
/// Parameters
/// ----------
/// - __func:__      objective function $`f`$
/// - __grad:__      function that computes gradient g(x) of the objective
/// - __x0:__        initial guess
/// - __tol:__       step-length and residual tolerances, iteration limit
/// - __params:__    step $`\alpha`$ and momentum decay $`\eta`$
/// - __callback:__  User-defined function to be evaluated with two arguments (x,iter).
///                   It is evaluated at (x0,0) and then after each iteration.
///                   If it returns True, the function terminates early.
pub fn heavy_ball_descent<S: NdFloat>(
    func: impl Fn(ArrayView1<S>) -> S,
    grad: impl Fn(ArrayView1<S>) -> Array1<S>,
    x0: ArrayView1<S>,
    tol: &Tolerances<S>,
    params: HeavyBallParams<S>,
    mut callback: impl FnMut(ArrayView1<S>, usize) -> bool,
) -> Solution<S> {
    let HeavyBallParams { alpha, eta } = params;

    let mut x = x0.to_owned();
    let mut g = grad(x.view());
    let mut grad_norm = l2norm(g.view());
    let mut dir = &g * (-alpha);
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

            x += &dir;
            step_len = l2norm(dir.view());

            g = grad(x.view());
            grad_norm = l2norm(g.view());
            dir.mapv_inplace(|d| d * eta);
            dir.scaled_add(-alpha, &g);
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
