/// Sorts `v` with repeated passes that swap adjacent out-of-order pairs.
///
/// Everything after the last swap of a pass is already in its final place, so the next pass
/// stops there. A pass without swaps ends the sort, which makes sorted input cost a single pass.
pub fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut unsorted_end = v.len();

    while unsorted_end > 1 {
        let mut last_swap = 0;

        for i in 1..unsorted_end {
            // Only strictly smaller elements move left, equal neighbours keep their order.
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                last_swap = i;
            }
        }

        unsorted_end = last_swap;
    }
}
