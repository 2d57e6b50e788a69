#![no_std]

use common_constants::{
    HALF_PERCENTAGE_FACTOR, HALF_RAY, HALF_WAD, HALF_WAD_RAY_RATIO, PERCENTAGE_FACTOR, RAY,
    SECONDS_PER_YEAR, UINT256_BYTES, WAD, WAD_RAY_RATIO,
};
use common_errors::{ERROR_ARITHMETIC_OVERFLOW, ERROR_DIVISION_BY_ZERO};

multiversx_sc::imports!();

/// Fixed point arithmetic shared by every ledger of the pool.
///
/// Values are raw integers: rays carry 27 decimals, wads 18 and percentages are basis points.
/// `BigUint` never overflows on its own, so every helper checks that the intermediate result
/// still fits in an unsigned 256 bit word and aborts with `ERROR_ARITHMETIC_OVERFLOW` otherwise.
/// Division by zero aborts with `ERROR_DIVISION_BY_ZERO`.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// Multiplies two rays, rounding half up: `(a * b + RAY / 2) / RAY`.
    fn ray_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let numerator = a * b + BigUint::from(HALF_RAY);
        self.require_fits_uint256(&numerator);

        numerator / BigUint::from(RAY)
    }

    /// Divides two rays, rounding half up: `(a * RAY + b / 2) / b`.
    fn ray_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        require!(b != &BigUint::zero(), ERROR_DIVISION_BY_ZERO);

        let numerator = a * &BigUint::from(RAY) + b / 2u64;
        self.require_fits_uint256(&numerator);

        numerator / b
    }

    /// Multiplies two wads, rounding half up.
    fn wad_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let numerator = a * b + BigUint::from(HALF_WAD);
        self.require_fits_uint256(&numerator);

        numerator / BigUint::from(WAD)
    }

    /// Divides two wads, rounding half up.
    fn wad_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        require!(b != &BigUint::zero(), ERROR_DIVISION_BY_ZERO);

        let numerator = a * &BigUint::from(WAD) + b / 2u64;
        self.require_fits_uint256(&numerator);

        numerator / b
    }

    /// Converts a wad into a ray. Lossless, ray carries 9 more digits.
    fn wad_to_ray(&self, a: &BigUint) -> BigUint {
        let result = a * WAD_RAY_RATIO;
        self.require_fits_uint256(&result);

        result
    }

    /// Converts a ray into a wad, rounding half up.
    fn ray_to_wad(&self, a: &BigUint) -> BigUint {
        (a + HALF_WAD_RAY_RATIO) / WAD_RAY_RATIO
    }

    /// Applies a basis point percentage to `value`, rounding half up.
    fn percent_mul(&self, value: &BigUint, percentage: u64) -> BigUint {
        let numerator = value * percentage + HALF_PERCENTAGE_FACTOR;
        self.require_fits_uint256(&numerator);

        numerator / PERCENTAGE_FACTOR
    }

    /// Divides `value` by a basis point percentage, rounding half up.
    fn percent_div(&self, value: &BigUint, percentage: u64) -> BigUint {
        require!(percentage != 0, ERROR_DIVISION_BY_ZERO);

        let numerator = value * PERCENTAGE_FACTOR + percentage / 2;
        self.require_fits_uint256(&numerator);

        numerator / percentage
    }

    /// Calculates the interest accumulated with a linear rate between two timestamps.
    ///
    /// **Formula**: `RAY + rate * (current_timestamp - last_update_timestamp) / SECONDS_PER_YEAR`
    ///
    /// Supply side interest only compounds at the discrete points where the liquidity index is
    /// refreshed, hence the linear shape.
    ///
    /// # Arguments
    /// - `rate`: Annual rate, in ray.
    /// - `last_update_timestamp`: Start of the accrual interval, in seconds.
    /// - `current_timestamp`: End of the accrual interval, in seconds.
    ///
    /// # Returns
    /// - `BigUint`: The growth factor over the interval, in ray.
    fn calculate_linear_interest(
        &self,
        rate: &BigUint,
        last_update_timestamp: u64,
        current_timestamp: u64,
    ) -> BigUint {
        let elapsed = current_timestamp.saturating_sub(last_update_timestamp);
        let accrued = rate * elapsed;
        self.require_fits_uint256(&accrued);

        self.ray() + accrued / SECONDS_PER_YEAR
    }

    /// Approximates `(1 + rate / SECONDS_PER_YEAR) ^ elapsed` with the first terms of its binomial
    /// expansion.
    ///
    /// **Formula**:
    /// - `x = rate / SECONDS_PER_YEAR`, `n = elapsed`
    /// - `RAY + n * x + n * (n - 1) * x^2 / 2 + n * (n - 1) * (n - 2) * x^3 / 6`
    ///
    /// The series is truncated after the cubic term. Both powers are computed with `ray_mul` and
    /// integer division in this exact order; settled debt depends on it.
    ///
    /// # Arguments
    /// - `rate`: Annual rate, in ray.
    /// - `last_update_timestamp`: Start of the accrual interval, in seconds.
    /// - `current_timestamp`: End of the accrual interval, in seconds.
    ///
    /// # Returns
    /// - `BigUint`: The compounded growth factor over the interval, in ray. Exactly `RAY` for an
    ///   empty interval.
    fn calculate_compounded_interest(
        &self,
        rate: &BigUint,
        last_update_timestamp: u64,
        current_timestamp: u64,
    ) -> BigUint {
        let exp = current_timestamp.saturating_sub(last_update_timestamp);
        if exp == 0 {
            return self.ray();
        }

        let exp_minus_one = exp - 1;
        let exp_minus_two = if exp > 2 { exp - 2 } else { 0 };

        let seconds_per_year_sq = BigUint::from(SECONDS_PER_YEAR) * SECONDS_PER_YEAR;
        let base_power_two = self.ray_mul(rate, rate) / seconds_per_year_sq;
        let base_power_three = self.ray_mul(&base_power_two, rate) / SECONDS_PER_YEAR;

        let second_term = BigUint::from(exp) * exp_minus_one * &base_power_two;
        self.require_fits_uint256(&second_term);
        let second_term = second_term / 2u64;

        let third_term = BigUint::from(exp) * exp_minus_one * exp_minus_two * &base_power_three;
        self.require_fits_uint256(&third_term);
        let third_term = third_term / 6u64;

        let first_term = rate * exp;
        self.require_fits_uint256(&first_term);

        self.ray() + first_term / SECONDS_PER_YEAR + second_term + third_term
    }

    fn require_fits_uint256(&self, value: &BigUint) {
        require!(
            value.to_bytes_be_buffer().len() <= UINT256_BYTES,
            ERROR_ARITHMETIC_OVERFLOW
        );
    }

    fn ray(&self) -> BigUint {
        BigUint::from(RAY)
    }

    fn wad(&self) -> BigUint {
        BigUint::from(WAD)
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
