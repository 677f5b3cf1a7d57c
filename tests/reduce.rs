/*
    Reductions
*/

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::time::Duration;

use numeric_caps::*;

#[test]
fn sums() {
    assert_eq!(sum_of([1i32, 2, 3]), 6);
    assert_eq!(sum_of(vec![1.0f64, 2.0]), 3.0);
    assert_eq!(sum_of(1u64..=100), 5050);
    assert_eq!(sum_of_seeded([1i32, 2, 3], 10), 16);
}

#[test]
fn products() {
    assert_eq!(product_of([1i32, 2, 3, 4]), 24);
    assert_eq!(product_of(1u64..=20), 2_432_902_008_176_640_000);
    assert_eq!(product_of_seeded([2.0f32, 0.5], 3.0), 3.0);
}

#[test]
fn empty_sequences() {
    assert_eq!(sum_of(Vec::<i32>::new()), 0);
    assert_eq!(sum_of_seeded(Vec::<i32>::new(), -9), -9);
    assert_eq!(product_of(Vec::<u8>::new()), 1);
    assert_eq!(product_of_seeded(Vec::<u8>::new(), 0), 0);
    assert_eq!(sum_of(std::iter::empty::<f64>()), 0.0);
    assert_eq!(try_sum_of(Vec::<i8>::new()), Ok(0));
    assert_eq!(try_product_of(Vec::<i8>::new()), Ok(1));
    assert_eq!(wrapping_product_of(Vec::<u16>::new()), 1);
}

#[test]
fn variadic() {
    assert_eq!(sum_of!(1, 2, 3), 6);
    assert_eq!(sum_of!(1u8, 2, 3,), 6);
    assert_eq!(product_of!(2i64, 3, 4), 24);
    assert_eq!(product_of!(1.5f64), 1.5);

    let none: i32 = sum_of!();
    assert_eq!(none, 0);
    let none: u32 = product_of!();
    assert_eq!(none, 1);
}

#[test]
fn sequence_accessors() {
    let xs = [3i32, -4, 5];
    assert_eq!(xs.sum(), 4);
    assert_eq!(xs.product(), -60);

    let ys: Vec<f64> = vec![0.25, 0.25, 0.5];
    assert_eq!(ys.sum(), 1.0);
    assert_eq!(ys[..2].product(), 0.0625);

    let empty: &[u16] = &[];
    assert_eq!(empty.sum(), 0);
    assert_eq!(empty.product(), 1);
}

#[test]
fn sequence_accessors_on_collections() {
    let mut window: VecDeque<i64> = VecDeque::new();
    window.push_back(4);
    window.push_front(-2);
    window.push_back(10);
    assert_eq!(window.sum(), 12);
    assert_eq!(window.product(), -80);

    let distinct: BTreeSet<u32> = [3, 3, 5, 7, 5].into_iter().collect();
    assert_eq!(distinct.sum(), 15);
    assert_eq!(distinct.product(), 105);

    let chain: LinkedList<f32> = [0.5, 4.0].into_iter().collect();
    assert_eq!(chain.product(), 2.0);

    assert_eq!(BTreeSet::<u8>::new().product(), 1);
}

#[test]
#[should_panic(expected = "arithmetic overflow: `+` on `u8`")]
fn collection_sum_overflow_traps() {
    let _ = VecDeque::from([u8::MAX, 1]).sum();
}

#[test]
fn folds_left_to_right() {
    let mut seen = Vec::new();
    let total = sum_of([1i32, 2, 3].into_iter().inspect(|x| seen.push(*x)));
    assert_eq!(total, 6);
    assert_eq!(seen, [1, 2, 3]);
}

#[test]
#[should_panic(expected = "arithmetic overflow: `+` on `u8`")]
fn sum_overflow_traps() {
    let _ = sum_of([200u8, 100]);
}

#[test]
#[should_panic(expected = "arithmetic overflow: `*` on `i16`")]
fn product_overflow_traps() {
    let _ = product_of([300i16, 300]);
}

#[test]
fn wrapping_reductions() {
    assert_eq!(wrapping_sum_of([200u8, 100]), 44);
    assert_eq!(wrapping_sum_of_seeded([1i8], i8::MAX), i8::MIN);
    assert_eq!(wrapping_product_of([16u8, 16, 3]), 0);
    assert_eq!(wrapping_product_of_seeded([2u8], 129), 2);
}

#[test]
fn checked_reductions() {
    assert_eq!(try_sum_of([100u8, 100, 55]), Ok(255));
    assert_eq!(
        try_sum_of([i32::MAX, 1]),
        Err(ArithmeticError::Overflow {
            op: Operation::Add,
            ty: "i32",
        })
    );
    assert_eq!(try_sum_of_seeded([1u8], u8::MAX).map_err(|e| e.operation()), Err(Operation::Add));
    assert_eq!(try_product_of([2i64, 3, 7]), Ok(42));
    assert_eq!(
        try_product_of([1u32 << 16, 1 << 16]),
        Err(ArithmeticError::overflow::<u32>(Operation::Mul))
    );
    assert_eq!(try_product_of_seeded([5u8], 0), Ok(0));
}

#[test]
fn checked_reduction_stops_at_first_overflow() {
    let mut consumed = 0;
    let result = try_sum_of([u8::MAX, 1, 1, 1].into_iter().inspect(|_| consumed += 1));
    assert!(result.is_err());
    assert_eq!(consumed, 2);
}

#[test]
fn duration_sums() {
    let laps = [
        Duration::from_millis(900),
        Duration::from_millis(1_100),
        Duration::from_secs(3),
    ];
    assert_eq!(sum_of(laps), Duration::from_secs(5));
    assert_eq!(laps.sum(), Duration::from_secs(5));
    assert!(try_sum_of([Duration::MAX, Duration::from_secs(1)]).is_err());
}

#[cfg(feature = "bigint")]
mod bigint {
    use num_bigint::{BigInt, BigUint};
    use numeric_caps::*;

    #[test]
    fn factorial() {
        let thirty: BigUint = product_of((1u32..=30).map(BigUint::from));
        let expected: BigUint = "265252859812191058636308480000000".parse().unwrap();
        assert_eq!(thirty, expected);
        assert_eq!(try_product_of((1u32..=30).map(BigUint::from)), Ok(expected));
    }

    #[test]
    fn sums_past_machine_width() {
        let total = sum_of([BigInt::from(i64::MAX), BigInt::from(i64::MAX), BigInt::from(2)]);
        assert_eq!(total, BigInt::from(u64::MAX) + BigInt::from(1));
        assert_eq!(sum_of(Vec::<BigInt>::new()), BigInt::zero());
    }
}
