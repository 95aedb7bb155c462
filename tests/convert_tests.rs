// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use tripclip::fx::convert_to_thb;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn ten_at_35_5_is_exactly_355() {
    assert_eq!(convert_to_thb(dec("10"), dec("35.5")), dec("355.0"));
}

#[test]
fn repeated_conversions_do_not_drift() {
    // 1000 x 0.1 @ 35.5 must land on exactly 3550
    let mut sum = Decimal::ZERO;
    for _ in 0..1000 {
        sum += convert_to_thb(dec("0.1"), dec("35.5"));
    }
    assert_eq!(sum, dec("3550"));
}

#[test]
fn zero_rate_gives_zero() {
    assert_eq!(convert_to_thb(dec("123.45"), Decimal::ZERO), Decimal::ZERO);
}
