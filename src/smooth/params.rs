//! Run configuration shared by the descent methods

use ndarray::NdFloat;

/// Error returned by the checked constructors when a parameter lies
/// outside the range a method is documented for.
#[derive(Clone, Copy, Debug, thiserror::Error, PartialEq)]
pub enum ParamError {
    #[error("tolerance `{name}` must be non-negative")]
    NegativeTolerance { name: &'static str },
    #[error("step size `{name}` must be strictly positive")]
    NonPositiveStep { name: &'static str },
    #[error("`sigma` must lie in the open interval (0, 1)")]
    SigmaOutOfRange,
    #[error("`eta` must lie in the half-open interval [0, 1)")]
    EtaOutOfRange,
}

/// Outer-loop gate shared by every method
///
/// Parameters
/// ----------
/// - __eps_s:__     step-length tolerance, stop once $`\|x_{k+1} - x_k\|_2 \leq \epsilon_s`$
/// - __eps_r:__     gradient residual tolerance, stop once $`\|\nabla f(x_k)\|_2 \leq \epsilon_r`$
/// - __max_iter:__  maximum number of outer iterations. Armijo descent also uses it
///                   as the number of trial steps of its backtracking search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances<S> {
    pub eps_s: S,
    pub eps_r: S,
    pub max_iter: usize,
}

impl<S: NdFloat> Tolerances<S> {
    pub fn new(eps_s: S, eps_r: S, max_iter: usize) -> Result<Self, ParamError> {
        if !(eps_s >= S::zero()) {
            return Err(ParamError::NegativeTolerance { name: "eps_s" });
        }
        if !(eps_r >= S::zero()) {
            return Err(ParamError::NegativeTolerance { name: "eps_r" });
        }
        Ok(Tolerances {
            eps_s,
            eps_r,
            max_iter,
        })
    }
}

impl<S: NdFloat> Default for Tolerances<S> {
    fn default() -> Self {
        Tolerances {
            eps_s: S::from(1e-6).unwrap(),
            eps_r: S::from(1e-6).unwrap(),
            max_iter: 10_000,
        }
    }
}

/// Backtracking parameters of [`armijo_descent`](super::armijo_descent)
///
/// - __alpha0:__  initial trial step, $`\alpha_0 > 0`$
/// - __sigma:__   sufficient-decrease factor, $`\sigma \in (0, 1)`$
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmijoParams<S> {
    pub alpha0: S,
    pub sigma: S,
}

impl<S: NdFloat> ArmijoParams<S> {
    pub fn new(alpha0: S, sigma: S) -> Result<Self, ParamError> {
        if !(alpha0 > S::zero()) {
            return Err(ParamError::NonPositiveStep { name: "alpha0" });
        }
        if !(sigma > S::zero() && sigma < S::one()) {
            return Err(ParamError::SigmaOutOfRange);
        }
        Ok(ArmijoParams { alpha0, sigma })
    }
}

impl<S: NdFloat> Default for ArmijoParams<S> {
    fn default() -> Self {
        ArmijoParams {
            alpha0: S::one(),
            sigma: S::from(0.5).unwrap(),
        }
    }
}

/// Momentum parameters of [`heavy_ball_descent`](super::heavy_ball_descent)
///
/// - __alpha:__  fixed step scale, $`\alpha > 0`$
/// - __eta:__    momentum decay, $`\eta \in [0, 1)`$
///
/// For an $`L`$-smooth objective the iteration is only stable for
/// $`\alpha L < 2(1 + \eta)`$.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeavyBallParams<S> {
    pub alpha: S,
    pub eta: S,
}

impl<S: NdFloat> HeavyBallParams<S> {
    pub fn new(alpha: S, eta: S) -> Result<Self, ParamError> {
        if !(alpha > S::zero()) {
            return Err(ParamError::NonPositiveStep { name: "alpha" });
        }
        if !(eta >= S::zero() && eta < S::one()) {
            return Err(ParamError::EtaOutOfRange);
        }
        Ok(HeavyBallParams { alpha, eta })
    }
}

impl<S: NdFloat> Default for HeavyBallParams<S> {
    fn default() -> Self {
        HeavyBallParams {
            alpha: S::from(0.01).unwrap(),
            eta: S::from(0.9).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armijo_params_ranges() {
        assert!(ArmijoParams::new(1.0, 0.5).is_ok());
        assert_eq!(
            ArmijoParams::new(0.0, 0.5),
            Err(ParamError::NonPositiveStep { name: "alpha0" })
        );
        assert_eq!(ArmijoParams::new(1.0, 1.0), Err(ParamError::SigmaOutOfRange));
        assert_eq!(ArmijoParams::new(1.0, 0.0), Err(ParamError::SigmaOutOfRange));
        assert_eq!(
            ArmijoParams::new(1.0, f64::NAN),
            Err(ParamError::SigmaOutOfRange)
        );
    }

    #[test]
    fn heavy_ball_params_ranges() {
        assert!(HeavyBallParams::new(1.0f32, 0.0).is_ok());
        assert!(HeavyBallParams::new(1.0f32, 0.9).is_ok());
        assert_eq!(HeavyBallParams::new(1.0, 1.0), Err(ParamError::EtaOutOfRange));
        assert_eq!(
            HeavyBallParams::new(-1.0, 0.5),
            Err(ParamError::NonPositiveStep { name: "alpha" })
        );
    }

    #[test]
    fn tolerances_reject_negative() {
        assert!(Tolerances::new(0.0, 1e-6, 0).is_ok());
        let err = Tolerances::new(1e-6, -1.0, 10).unwrap_err();
        assert_eq!(err, ParamError::NegativeTolerance { name: "eps_r" });
        assert_eq!(err.to_string(), "tolerance `eps_r` must be non-negative");
    }

    #[test]
    fn defaults_match_demo_configuration() {
        let tol = Tolerances::<f64>::default();
        assert_eq!(tol.max_iter, 10_000);
        assert_eq!(tol.eps_s, 1e-6);
        let armijo = ArmijoParams::<f64>::default();
        assert_eq!(armijo, ArmijoParams::new(1.0, 0.5).unwrap());
    }
}
