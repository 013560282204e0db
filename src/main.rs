//! Runs both descent methods on a fixed quartic test objective

use ndarray::prelude::*;
use ndarray_descent::smooth::{
    armijo_descent, heavy_ball_descent, nop, ArmijoParams, HeavyBallParams, Tolerances,
};

/// $`f(x) = x_1 x_2 + 4 x_1^4 + x_2^2 + 3 x_1`$
fn objective(x: ArrayView1<f64>) -> f64 {
    x[0] * x[1] + 4. * x[0].powi(4) + x[1].powi(2) + 3. * x[0]
}

fn gradient(x: ArrayView1<f64>) -> Array1<f64> {
    array![x[1] + 16. * x[0].powi(3) + 3., x[0] + 2. * x[1]]
}

fn main() {
    let x0 = array![2., 2.];
    let tol = Tolerances::default();

    let armijo = armijo_descent(
        objective,
        gradient,
        x0.view(),
        &tol,
        ArmijoParams::default(),
        nop,
    );
    let heavy_ball = heavy_ball_descent(
        objective,
        gradient,
        x0.view(),
        &tol,
        HeavyBallParams::default(),
        nop,
    );

    println!("Initial guess: x1={}, x2={}", x0[0], x0[1]);
    println!("Result Armijo-GD: x1={}, x2={}", armijo.x[0], armijo.x[1]);
    println!(
        "Result heavy-ball-GD: x1={}, x2={}",
        heavy_ball.x[0], heavy_ball.x[1]
    );
}
