// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

/// Convert a foreign-currency amount to Thai baht with a user-supplied rate.
/// Decimal multiplication, so repeated conversions never accumulate
/// floating-point drift.
pub fn convert_to_thb(amount: Decimal, rate_to_thb: Decimal) -> Decimal {
    amount * rate_to_thb
}
