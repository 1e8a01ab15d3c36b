//! 字典序比较的性质验证。
//!
//! # 覆盖性质（What）
//! 1. 反对称：`compare(x, y) == compare(y, x).reverse()`；
//! 2. 自反：`compare(x, x) == Equal`（包括内容相同但对象不同的副本）；
//! 3. 首个差异定胜负：在公共前缀后插入差异，结果只取决于差异位置的元素；
//! 4. 形态无关：数组切片、`Vec`、`LinkedList` 给出同样的结果；
//! 5. 容差序在非 NaN 的整数值浮点上退化为自然序。

use std::collections::LinkedList;

use core::cmp::Ordering;

use proptest::prelude::*;
use spark_compare::{TolerantOrd, collection, slice};

fn pair_of_equal_length() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (0usize..24).prop_flat_map(|len| {
        (
            prop::collection::vec(-5i64..5, len),
            prop::collection::vec(-5i64..5, len),
        )
    })
}

proptest! {
    #[test]
    fn prop_antisymmetric((x, y) in pair_of_equal_length()) {
        let forward = slice::compare(&x, &y).unwrap();
        let backward = slice::compare(&y, &x).unwrap();
        prop_assert_eq!(forward, backward.reverse());
    }

    #[test]
    fn prop_reflexive_on_copies(x in prop::collection::vec(any::<i32>(), 0..32)) {
        let copy = x.clone();
        prop_assert_eq!(slice::compare(&x, &copy), Ok(Ordering::Equal));
        prop_assert_eq!(collection::compare(&x, &x), Ok(Ordering::Equal));
    }

    #[test]
    fn prop_first_difference_decides(
        prefix in prop::collection::vec(any::<u8>(), 0..16),
        a in any::<u8>(),
        b in any::<u8>(),
        tail_x in prop::collection::vec(any::<u8>(), 8),
        tail_y in prop::collection::vec(any::<u8>(), 8),
    ) {
        prop_assume!(a != b);
        let mut x = prefix.clone();
        x.push(a);
        x.extend_from_slice(&tail_x);
        let mut y = prefix;
        y.push(b);
        y.extend_from_slice(&tail_y);
        prop_assert_eq!(slice::compare(&x, &y), Ok(a.cmp(&b)));
    }

    #[test]
    fn prop_representations_agree((x, y) in pair_of_equal_length()) {
        let expected = slice::compare(&x, &y);
        let list_x: LinkedList<i64> = x.iter().copied().collect();
        let list_y: LinkedList<i64> = y.iter().copied().collect();
        prop_assert_eq!(collection::compare(&x, &y), expected.clone());
        prop_assert_eq!(collection::compare(&list_x, &list_y), expected.clone());
        prop_assert_eq!(collection::compare(&x, &list_y), expected);
    }

    #[test]
    fn prop_tolerant_matches_natural_on_integral_values(a in -1000i32..1000, b in -1000i32..1000) {
        let (fa, fb) = (f64::from(a), f64::from(b));
        prop_assert_eq!(fa.tolerant_cmp(&fb), a.cmp(&b));
        prop_assert_eq!((a as f32).tolerant_cmp(&(b as f32)), a.cmp(&b));
    }

    #[test]
    fn prop_tolerant_antisymmetric(a in any::<f64>(), b in any::<f64>()) {
        prop_assert_eq!(a.tolerant_cmp(&b), b.tolerant_cmp(&a).reverse());
    }
}
