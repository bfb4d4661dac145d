// Copyright 2026 the waypoint-smoother Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth a fixed set of waypoints and print the result, one `x, y` pair per line.

#[cfg(feature = "std")]
fn main() {
    use waypoint_smoother::{generate_smooth_path, Path};

    let waypoints = Path::from([
        (10.0, 7.0),
        (15.0, 10.0),
        (20.0, 13.0),
        (25.0, 12.0),
        (30.0, 7.0),
        (35.0, 8.0),
        (40.0, 10.0),
    ]);
    match generate_smooth_path(&waypoints) {
        Ok(smooth) => println!("{smooth}"),
        Err(e) => {
            eprintln!("could not smooth waypoints: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "std"))]
fn main() {
    println!("This example requires the standard library");
}
