pub mod linear;
pub mod number;

pub use linear::{rref, simplex, simplex_with_objective, solve_linear_2x2, Rref};
pub use number::{
    binomial, clamp, crt, crt_all, extended_gcd, factorial, gcd, gcd_all, is_prime, lcm, lcm_all,
    mod_inverse, mod_pow, modulo, sign, sum_of_squares, triangle_number,
};
