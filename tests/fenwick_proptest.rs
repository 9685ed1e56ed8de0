use partial_sums::FenwickTree;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Add(usize, i64),
    Set(usize, i64),
    Multiply(usize, i64),
    ShiftAll(i64),
    ScaleAll(i64),
    RangeShift(usize, usize, i64),
    RangeScale(usize, usize, i64),
    RangeAdd(usize, Vec<i64>),
    RangeSet(usize, Vec<i64>),
    Push(i64),
    Extend(Vec<i64>),
}

fn values(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-1000i64..1000, 0..max_len)
}

fn operation() -> impl Strategy<Value = Operation> {
    // Indices deliberately overshoot the tree to exercise clamping.
    let index = 0usize..80;
    let small = -2i64..3;
    prop_oneof![
        (index.clone(), -1000i64..1000).prop_map(|(i, d)| Operation::Add(i, d)),
        (index.clone(), -1000i64..1000).prop_map(|(i, v)| Operation::Set(i, v)),
        (index.clone(), small.clone()).prop_map(|(i, f)| Operation::Multiply(i, f)),
        (-50i64..50).prop_map(Operation::ShiftAll),
        small.clone().prop_map(Operation::ScaleAll),
        (index.clone(), index.clone(), -50i64..50).prop_map(|(a, b, d)| Operation::RangeShift(a, b, d)),
        (index.clone(), index.clone(), small).prop_map(|(a, b, f)| Operation::RangeScale(a, b, f)),
        (index.clone(), values(8)).prop_map(|(i, v)| Operation::RangeAdd(i, v)),
        (index, values(8)).prop_map(|(i, v)| Operation::RangeSet(i, v)),
        (-1000i64..1000).prop_map(Operation::Push),
        values(12).prop_map(Operation::Extend),
    ]
}

fn apply(model: &mut Vec<i64>, op: &Operation) {
    let n = model.len();
    match op {
        Operation::Add(i, d) => {
            if let Some(v) = model.get_mut(*i) {
                *v += d;
            }
        }
        Operation::Set(i, x) => {
            if let Some(v) = model.get_mut(*i) {
                *v = *x;
            }
        }
        Operation::Multiply(i, f) => {
            if let Some(v) = model.get_mut(*i) {
                *v *= f;
            }
        }
        Operation::ShiftAll(d) => model.iter_mut().for_each(|v| *v += d),
        Operation::ScaleAll(f) => model.iter_mut().for_each(|v| *v *= f),
        Operation::RangeShift(lo, hi, d) => {
            for v in model.iter_mut().take(*hi.min(&n)).skip(*lo) {
                *v += d;
            }
        }
        Operation::RangeScale(lo, hi, f) => {
            for v in model.iter_mut().take(*hi.min(&n)).skip(*lo) {
                *v *= f;
            }
        }
        Operation::RangeAdd(lo, ds) => {
            for (v, d) in model.iter_mut().skip(*lo).zip(ds) {
                *v += d;
            }
        }
        Operation::RangeSet(lo, xs) => {
            for (v, x) in model.iter_mut().skip(*lo).zip(xs) {
                *v = *x;
            }
        }
        Operation::Push(x) => model.push(*x),
        Operation::Extend(xs) => model.extend_from_slice(xs),
    }
}

fn run(ft: &mut FenwickTree<i64>, op: &Operation) {
    match op {
        Operation::Add(i, d) => ft.add_value(*i, *d),
        Operation::Set(i, v) => ft.set_value(*i, *v),
        Operation::Multiply(i, f) => {
            let expected = ft.value(*i) * f;
            assert_eq!(ft.multiply_value(*i, *f), expected);
        }
        Operation::ShiftAll(d) => ft.shift_all(*d),
        Operation::ScaleAll(f) => ft.scale_all(*f),
        Operation::RangeShift(lo, hi, d) => ft.range_shift(*lo, *hi, *d),
        Operation::RangeScale(lo, hi, f) => ft.range_scale(*lo, *hi, *f),
        Operation::RangeAdd(lo, ds) => ft.range_add(*lo, ds),
        Operation::RangeSet(lo, xs) => ft.range_set(*lo, xs),
        Operation::Push(x) => ft.push(*x),
        Operation::Extend(xs) => ft.extend_from_slice(xs),
    }
}

proptest! {
    #[test]
    fn test_round_trip(seq in values(200)) {
        let ft = FenwickTree::from_slice(&seq);
        let mut buffer = vec![0; seq.len()];
        prop_assert_eq!(ft.bulk_values(&mut buffer), seq.len());
        prop_assert_eq!(&buffer, &seq);
        prop_assert_eq!(ft.into_values(), seq);
    }

    #[test]
    fn test_prefix_and_range_sums(seq in values(100), lo in 0usize..120, hi in 0usize..120) {
        let ft = FenwickTree::from_slice(&seq);
        let mut running = 0;
        for (i, v) in seq.iter().enumerate() {
            running += v;
            prop_assert_eq!(ft.prefix_sum(i), running);
        }
        let n = seq.len();
        let expected: i64 = if lo < hi.min(n) { seq[lo..hi.min(n)].iter().sum() } else { 0 };
        prop_assert_eq!(ft.range_sum(lo, hi), expected);
    }

    #[test]
    fn test_add_inverse_restores(seq in values(100), i in 0usize..100, d in -1000i64..1000) {
        let original = FenwickTree::from_slice(&seq);
        let mut ft = original.clone();
        ft.add_value(i, d);
        ft.add_value(i, -d);
        prop_assert_eq!(ft, original);
    }

    #[test]
    fn test_append_equivalence(seq in values(150), split in 0usize..150) {
        let k = split.min(seq.len());
        let mut grown = FenwickTree::from_slice(&seq[..k]);
        grown.extend_from_slice(&seq[k..]);
        prop_assert_eq!(&grown, &FenwickTree::from_slice(&seq));

        let mut pushed = FenwickTree::from_slice(&seq[..k]);
        for &v in &seq[k..] {
            pushed.push(v);
        }
        prop_assert_eq!(pushed, grown);
    }

    #[test]
    fn test_copy_matches_padded_or_truncated(src in values(60), dest in values(60)) {
        let source = FenwickTree::from_slice(&src);
        let mut target = FenwickTree::from_slice(&dest);
        prop_assert_eq!(target.copy_from(&source), dest.len());

        let mut expected = src.clone();
        expected.resize(dest.len(), 0);
        prop_assert_eq!(target.values(), expected);
    }

    #[test]
    fn test_search_finds_every_prefix(seq in proptest::collection::vec(1i64..100, 1..150)) {
        let ft = FenwickTree::from_slice(&seq);
        for i in 0..seq.len() {
            let prefix = ft.prefix_sum(i);
            prop_assert_eq!(ft.search_sum(prefix), (Some(i), prefix));
            // One short of the next prefix still lands on `i`.
            if i + 1 < seq.len() {
                let next = ft.prefix_sum(i + 1);
                prop_assert_eq!(ft.search_sum(next - 1), (Some(i), prefix));
            }
        }
        prop_assert_eq!(ft.search_sum(seq[0] - 1), (None, 0));
    }

    #[test]
    fn test_operations_match_model(
        seq in values(64),
        ops in proptest::collection::vec(operation(), 1..30),
    ) {
        let mut model = seq.clone();
        let mut ft = FenwickTree::from_slice(&seq);
        for op in &ops {
            apply(&mut model, op);
            run(&mut ft, op);
            prop_assert_eq!(ft.values(), model.clone(), "after {:?}", op);
        }
        prop_assert_eq!(ft, FenwickTree::from_slice(&model));
    }
}
