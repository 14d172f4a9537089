pub mod rust_bubble_sort;
pub mod rust_insertion_sort;

// Top-down merge sort, merging through an auxiliary buffer.
pub mod rust_merge_sort;

// Top-down merge sort, merging by block rotation.
pub mod rust_merge_sort_in_place;

// Distribution sorts, keyed by an integer extracted from each element.
pub mod rust_counting_sort;
pub mod rust_radix_sort;
