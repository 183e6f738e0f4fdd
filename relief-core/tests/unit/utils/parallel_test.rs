use super::*;

#[test]
fn can_collect_in_source_order() {
    let source = (0..1000).collect::<Vec<i32>>();

    let result = parallel_collect(&source, |value| value * 2);

    assert_eq!(result, source.iter().map(|value| value * 2).collect::<Vec<_>>());
}
