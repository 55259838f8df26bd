// File: crates/axis-core/tests/range.rs
// Purpose: Validate the Range value type (construction, union, padding fallback).

use axis_core::{Range, RangeError};

#[test]
fn new_orders_endpoints() {
    assert_eq!(Range::new(3.0, 1.0), Range::new(1.0, 3.0));
    let r = Range::new(5.0, -2.0);
    assert_eq!(r.min, -2.0);
    assert_eq!(r.max, 5.0);
}

#[test]
fn try_new_rejects_inverted_bounds() {
    assert_eq!(Range::try_new(1.0, 2.0), Ok(Range::new(1.0, 2.0)));
    assert_eq!(
        Range::try_new(2.0, 1.0),
        Err(RangeError::Inverted { min: 2.0, max: 1.0 })
    );
}

#[test]
fn union_takes_outer_bounds() {
    let a = Range::new(0.0, 10.0);
    let b = Range::new(5.0, 20.0);
    assert_eq!(a.union(b), Range::new(0.0, 20.0));
    assert_eq!(b.union(a), Range::new(0.0, 20.0));
    // interior range leaves the outer one unchanged
    assert_eq!(a.union(Range::new(2.0, 3.0)), a);
}

#[test]
fn padded_normal_case() {
    // width 10 at fraction 0.1 => pad 1 on each side
    assert_eq!(Range::new(0.0, 10.0).padded(0.1), Range::new(-1.0, 11.0));
}

#[test]
fn padded_zero_width_falls_back_to_one_unit() {
    // single-point extent must still yield a renderable range
    assert_eq!(Range::new(5.0, 5.0).padded(0.1), Range::new(4.0, 6.0));
}

#[test]
fn padded_zero_fraction_still_hits_fallback() {
    // fraction 0 makes the computed pad exactly zero, which the fallback
    // replaces with one absolute unit (fixed compatibility behavior)
    assert_eq!(Range::new(0.0, 10.0).padded(0.0), Range::new(-1.0, 11.0));
}

#[test]
fn padded_negative_fraction_inverts() {
    // documented behavior: negative fractions shrink instead of grow
    assert_eq!(Range::new(0.0, 10.0).padded(-0.1), Range::new(1.0, 9.0));
}

#[test]
fn display_format() {
    assert_eq!(Range::new(-1.5, 2.0).to_string(), "[-1.5, 2]");
}
