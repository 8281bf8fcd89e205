//! Adaptive Gauss–Kronrod quadrature on a finite interval.
//!
//! Purpose
//! -------
//! Integrate a smooth scalar function over `[a, b]` to a requested
//! absolute/relative accuracy. This is the numerical engine behind the
//! per-customer integral of the GGompertz/NBD likelihood.
//!
//! Key behaviors
//! -------------
//! - Each subinterval is estimated with the 21-point Kronrod rule and its
//!   embedded 10-point Gauss rule; the difference, rescaled the QUADPACK way,
//!   is the local error estimate.
//! - The subinterval with the largest error estimate is bisected first.
//! - Iteration stops when the summed error estimate is at most
//!   `max(epsabs, epsrel · |result|)` (converged), when `limit` subintervals
//!   are in use, when an interval can no longer be split in floating point,
//!   or when the running estimate becomes non-finite. In the last three cases
//!   the best estimate is returned with `converged == false`.
//! - A zero-length interval integrates to exactly `0.0`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The integrand is evaluated only at interior nodes of `[a, b]` (the
//!   Kronrod nodes never touch the endpoints).
//! - [`QuadratureWorkspace`] is single-owner scratch space; concurrent
//!   callers each hold their own.
//!
//! Conventions
//! -----------
//! - `a > b` is allowed and yields the negated integral.
//!
//! Testing notes
//! -------------
//! - Unit tests integrate closed-form functions (polynomial, trigonometric,
//!   square root with an endpoint derivative singularity), check the
//!   zero-length and reversed intervals, and force non-convergence with a
//!   small subinterval cap.
use crate::ggomnbd::core::options::QuadratureOptions;

// Kronrod abscissae on [-1, 1]; odd indices are the embedded Gauss nodes.
const XGK: [f64; 11] = [
    0.995657163025808080735527280689003,
    0.973906528517171720077964012084452,
    0.930157491355708226001207180059508,
    0.865063366688984510732096688423493,
    0.780817726586416897063717578345042,
    0.679409568299024406234327365114874,
    0.562757134668604683339000099272694,
    0.433395394129247190799265943165784,
    0.294392862701460198131126603103866,
    0.148874338981631210884826001129720,
    0.000000000000000000000000000000000,
];

// Kronrod weights, paired with XGK.
const WGK: [f64; 11] = [
    0.011694638867371874278064396062192,
    0.032558162307964727478818972459390,
    0.054755896574351996031381300244580,
    0.075039674810919952767043140916190,
    0.093125454583697605535065465083366,
    0.109387158802297641899210590325805,
    0.123491976262065851077208980634203,
    0.134709217311473325928054001771707,
    0.142775938577060080797094273138717,
    0.147739104901338491374841515972068,
    0.149445554002916905664936468389821,
];

// Gauss weights, paired with XGK[1], XGK[3], .., XGK[9].
const WG: [f64; 5] = [
    0.066671344308688137593568809893332,
    0.149451349150580593145776339657697,
    0.219086362515982043995534934228163,
    0.269266719309996355091226921569469,
    0.295524224714752870173892994651338,
];

/// `QuadratureOutcome` — result of one adaptive integration.
///
/// Fields
/// ------
/// - `value`: best estimate of the integral.
/// - `abs_error`: summed error estimate over all subintervals.
/// - `n_intervals`: subintervals in use when iteration stopped.
/// - `converged`: `true` iff the error target was met.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureOutcome {
    pub value: f64,
    pub abs_error: f64,
    pub n_intervals: usize,
    pub converged: bool,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Local estimate of a single 21-point Gauss–Kronrod application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gk21Estimate {
    /// Kronrod estimate of the integral.
    pub value: f64,
    /// Rescaled error estimate.
    pub error: f64,
}

/// Apply the 21-point Gauss–Kronrod rule to `f` on `[a, b]`.
pub fn gk21<F>(f: &F, a: f64, b: f64) -> Gk21Estimate
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let abs_half = half.abs();

    let fc = f(center);
    let mut res_gauss = 0.0;
    let mut res_kronrod = WGK[10] * fc;
    let mut resabs = res_kronrod.abs();
    let mut fv1 = [0.0; 10];
    let mut fv2 = [0.0; 10];

    for j in 0..10 {
        let abscissa = half * XGK[j];
        let f1 = f(center - abscissa);
        let f2 = f(center + abscissa);
        fv1[j] = f1;
        fv2[j] = f2;
        if j % 2 == 1 {
            res_gauss += WG[j / 2] * (f1 + f2);
        }
        res_kronrod += WGK[j] * (f1 + f2);
        resabs += WGK[j] * (f1.abs() + f2.abs());
    }

    let mean = 0.5 * res_kronrod;
    let mut resasc = WGK[10] * (fc - mean).abs();
    for j in 0..10 {
        resasc += WGK[j] * ((fv1[j] - mean).abs() + (fv2[j] - mean).abs());
    }

    let value = res_kronrod * half;
    resabs *= abs_half;
    resasc *= abs_half;
    let mut error = ((res_kronrod - res_gauss) * half).abs();
    if resasc != 0.0 && error != 0.0 {
        error = resasc * (200.0 * error / resasc).powf(1.5).min(1.0);
    }
    if resabs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        error = error.max(50.0 * f64::EPSILON * resabs);
    }

    Gk21Estimate { value, error }
}

/// `QuadratureWorkspace` — reusable subinterval storage for [`integrate`].
///
/// One workspace per thread; [`QuadratureWorkspace::integrate`] clears it on
/// entry, so it can be reused across customers without reallocation.
#[derive(Debug, Clone, Default)]
pub struct QuadratureWorkspace {
    segments: Vec<Segment>,
}

impl QuadratureWorkspace {
    /// Allocate a workspace able to hold `limit` subintervals.
    pub fn new(limit: usize) -> Self {
        QuadratureWorkspace { segments: Vec::with_capacity(limit) }
    }

    /// Integrate `f` over `[a, b]`.
    ///
    /// Parameters
    /// ----------
    /// - `f`: integrand, evaluated at interior points only.
    /// - `a`, `b`: finite interval endpoints; `a > b` negates the result.
    /// - `opts`: tolerances and subinterval cap.
    ///
    /// Returns
    /// -------
    /// [`QuadratureOutcome`] with the best estimate whether or not the error
    /// target was met.
    pub fn integrate<F>(&mut self, f: F, a: f64, b: f64, opts: &QuadratureOptions) -> QuadratureOutcome
    where
        F: Fn(f64) -> f64,
    {
        self.segments.clear();
        if a == b {
            return QuadratureOutcome { value: 0.0, abs_error: 0.0, n_intervals: 0, converged: true };
        }

        let tolerance = |value: f64| opts.epsabs.max(opts.epsrel * value.abs());

        let first = gk21(&f, a, b);
        self.segments.push(Segment { a, b, value: first.value, error: first.error });
        let mut value = first.value;
        let mut abs_error = first.error;
        let mut converged = abs_error <= tolerance(value);

        while !converged && value.is_finite() && self.segments.len() < opts.limit {
            let worst = self.worst_segment();
            let seg = self.segments[worst];
            let mid = 0.5 * (seg.a + seg.b);
            if mid == seg.a || mid == seg.b {
                break;
            }

            let left = gk21(&f, seg.a, mid);
            let right = gk21(&f, mid, seg.b);
            self.segments[worst] = Segment { a: seg.a, b: mid, value: left.value, error: left.error };
            self.segments.push(Segment { a: mid, b: seg.b, value: right.value, error: right.error });

            value = self.segments.iter().map(|s| s.value).sum();
            abs_error = self.segments.iter().map(|s| s.error).sum();
            converged = abs_error <= tolerance(value);
        }

        QuadratureOutcome { value, abs_error, n_intervals: self.segments.len(), converged }
    }

    // Index of the subinterval with the largest error; NaN errors never win.
    fn worst_segment(&self) -> usize {
        let mut best = 0;
        for (i, seg) in self.segments.iter().enumerate().skip(1) {
            if seg.error > self.segments[best].error {
                best = i;
            }
        }
        best
    }
}

/// Convenience wrapper allocating a fresh workspace.
pub fn integrate<F>(f: F, a: f64, b: f64, opts: &QuadratureOptions) -> QuadratureOutcome
where
    F: Fn(f64) -> f64,
{
    QuadratureWorkspace::new(opts.limit).integrate(f, a, b, opts)
}
