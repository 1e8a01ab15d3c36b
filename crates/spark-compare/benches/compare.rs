use criterion::{Criterion, black_box};
use spark_compare::{TolerantOrd, collection, slice};
use std::{collections::LinkedList, env, time::Duration};

/// 字典序比较的基准：对比切片直接扫描、集合游标扫描与浮点容差序的单次比较成本。
///
/// # 逻辑解析（How）
/// - 所有用例的差异都放在最后一个元素，迫使扫描走完全程；
/// - `--quick` 模式缩短采样，便于在 CI 中快速回归。
fn bench_compare(c: &mut Criterion) {
    let len = 4096;
    let left: Vec<u64> = (0..len).collect();
    let mut right = left.clone();
    if let Some(last) = right.last_mut() {
        *last += 1;
    }

    c.bench_function("slice_natural_4k", |b| {
        b.iter(|| slice::compare(black_box(&left), black_box(&right)))
    });

    let list_left: LinkedList<u64> = left.iter().copied().collect();
    let list_right: LinkedList<u64> = right.iter().copied().collect();
    c.bench_function("linked_list_natural_4k", |b| {
        b.iter(|| collection::compare(black_box(&list_left), black_box(&list_right)))
    });

    let float_left: Vec<f64> = left.iter().map(|v| *v as f64 * 0.1).collect();
    let float_right: Vec<f64> = float_left.iter().map(|v| v + 1e-12).collect();
    c.bench_function("slice_tolerant_f64_4k", |b| {
        b.iter(|| slice::compare_tolerant(black_box(&float_left), black_box(&float_right)))
    });

    c.bench_function("tolerant_cmp_near_equal", |b| {
        b.iter(|| black_box(0.1_f64 + 0.2).tolerant_cmp(black_box(&0.3)))
    });
}

fn main() {
    let mut quick_mode = false;
    for arg in env::args().skip(1) {
        if arg == "--quick" {
            quick_mode = true;
        }
    }

    let mut criterion = Criterion::default();
    if quick_mode {
        criterion = criterion
            .sample_size(10)
            .warm_up_time(Duration::from_millis(100))
            .measurement_time(Duration::from_millis(250));
    }

    bench_compare(&mut criterion);
    criterion.final_summary();
}
