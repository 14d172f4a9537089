pub mod rust_heapsort;

// Shell sort with the gap sequence generated for the input length.
pub mod rust_shell_sort_ciura;
pub mod rust_shell_sort_knuth;
pub mod rust_shell_sort_shell;

// Quicksort, one module per pivot strategy.
pub mod rust_quicksort_first;
pub mod rust_quicksort_middle;
pub mod rust_quicksort_random;

// Distribution sort, keyed by an integer extracted from each element.
pub mod rust_american_flag_sort;
