use xoro::table::{page_count, PaginationState, Paginator};

fn assert_in_range(pager: &Paginator) {
    assert!(pager.page_size() >= 1);
    assert!(
        pager.page_index() < pager.page_count().max(1),
        "index {} out of range for {} pages",
        pager.page_index(),
        pager.page_count()
    );
    let range = pager.page_range();
    assert!(range.start <= range.end && range.end <= pager.total_rows());
}

#[test]
fn page_index_stays_in_range_under_any_operation() {
    for total in 0..=45 {
        for size in 0..=12 {
            let mut pager = Paginator::new(size, total);
            assert_in_range(&pager);

            for _ in 0..8 {
                pager.next_page();
                assert_in_range(&pager);
            }
            pager.last_page();
            assert_eq!(pager.page_index(), pager.page_count().saturating_sub(1));
            assert!(!pager.can_next_page());

            pager.set_page_index(usize::MAX);
            assert_in_range(&pager);

            pager.set_page_size(size * 3);
            assert_in_range(&pager);

            pager.set_total_rows(total / 2);
            assert_in_range(&pager);

            pager.first_page();
            assert_eq!(pager.page_index(), 0);
            assert!(!pager.can_previous_page());
        }
    }
}

#[test]
fn page_count_matches_ceiling_division() {
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_count(1, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(25, 10), 3);
    assert_eq!(page_count(5, 0), 5);
}

#[test]
fn twenty_five_rows_in_pages_of_ten() {
    let mut pager = Paginator::new(10, 25);
    assert_eq!(pager.page_count(), 3);
    assert_eq!(pager.to_string(), "Page 1 of 3");
    assert!(!pager.can_previous_page());
    assert!(pager.can_next_page());

    pager.next_page();
    pager.next_page();
    assert_eq!(pager.page_index(), 2);
    assert_eq!(pager.page_range(), 20..25);
    assert_eq!(pager.to_string(), "Page 3 of 3");
    assert!(!pager.can_next_page());

    pager.next_page();
    assert_eq!(pager.page_index(), 2);
}

#[test]
fn previous_on_first_page_is_a_no_op() {
    let mut pager = Paginator::new(10, 25);
    pager.previous_page();
    assert_eq!(pager.state(), PaginationState { page_index: 0, page_size: 10 });
}

#[test]
fn empty_dataset_reads_page_one_of_one() {
    let mut pager = Paginator::new(10, 0);
    assert_eq!(pager.page_count(), 0);
    assert_eq!(pager.to_string(), "Page 1 of 1");
    assert!(!pager.can_next_page());
    assert!(!pager.can_previous_page());
    pager.next_page();
    pager.last_page();
    assert_eq!(pager.page_index(), 0);
    assert_eq!(pager.page_range(), 0..0);
}

#[test]
fn growing_page_size_pulls_index_back() {
    let mut pager = Paginator::new(10, 25);
    pager.last_page();
    pager.set_page_size(50);
    assert_eq!(pager.page_index(), 0);
    assert_eq!(pager.page_range(), 0..25);
}

#[test]
fn zero_page_size_is_clamped_to_one() {
    let mut pager = Paginator::new(10, 3);
    pager.set_page_size(0);
    assert_eq!(pager.page_size(), 1);
    assert_eq!(pager.page_count(), 3);
}
