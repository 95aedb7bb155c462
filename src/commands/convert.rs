// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::fx::convert_to_thb;
use crate::utils::parse_decimal;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(m.get_one::<String>("amount").unwrap())?;
    let rate = parse_decimal(m.get_one::<String>("rate").unwrap())?;
    let thb = convert_to_thb(amount, rate);
    println!("{} @ {} = ฿{}", amount, rate, thb);
    Ok(())
}
