use boxlabel_pdf::{BoxNumber, BoxNumberAllocator, Error};

fn collect<F: FnMut(&str) -> bool>(allocator: BoxNumberAllocator<F>) -> Vec<BoxNumber> {
    allocator
        .map(|number| number.expect("allocation succeeds"))
        .collect()
}

#[test]
fn yields_exactly_count_numbers_in_increasing_order() {
    let numbers = collect(BoxNumberAllocator::new(7, 5, |_| false).unwrap());
    let ids: Vec<u32> = numbers.iter().map(|n| n.number).collect();
    assert_eq!(ids, vec![7, 8, 9, 10, 11]);
}

#[test]
fn labels_carry_the_prefix_and_five_digit_padding() {
    let numbers = collect(BoxNumberAllocator::new(123, 2, |_| false).unwrap());
    assert_eq!(numbers[0].label, "BOX00123");
    assert_eq!(numbers[1].label, "BOX00124");
}

#[test]
fn skips_numbers_the_lookup_reports_as_taken() {
    let taken = ["BOX00008", "BOX00009"];
    let numbers = collect(BoxNumberAllocator::new(7, 3, |label| taken.contains(&label)).unwrap());
    let ids: Vec<u32> = numbers.iter().map(|n| n.number).collect();
    assert_eq!(ids, vec![7, 10, 11]);
}

#[test]
fn no_yielded_number_satisfies_the_lookup() {
    // every even number is taken
    let numbers = collect(
        BoxNumberAllocator::new(1, 4, |label: &str| {
            label[3..].parse::<u32>().unwrap() % 2 == 0
        })
        .unwrap(),
    );
    let ids: Vec<u32> = numbers.iter().map(|n| n.number).collect();
    assert_eq!(ids, vec![1, 3, 5, 7]);
}

#[test]
fn rejects_a_zero_start() {
    let err = BoxNumberAllocator::new(0, 5, |_| false)
        .err()
        .expect("zero start must be rejected");
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn rejects_a_zero_count() {
    let err = BoxNumberAllocator::new(1, 0, |_| false)
        .err()
        .expect("zero count must be rejected");
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn surfaces_exhaustion_instead_of_probing_forever() {
    let mut allocator = BoxNumberAllocator::new(1, 1, |_| true).unwrap();
    let first = allocator.next().expect("one item");
    assert!(matches!(first, Err(Error::AllocationExhausted { .. })));
    assert!(allocator.next().is_none());
}
