use core::mem;
use core::ptr;

use crate::config::SpaceStrategy;

/// Sorts `v` with a top-down merge sort, merging the way `space` selects.
///
/// This sort is stable for both strategies.
pub fn merge_sort_with<T, F>(v: &mut [T], space: SpaceStrategy, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    match space {
        SpaceStrategy::NotInPlace => merge_sort(v, is_less),
        SpaceStrategy::InPlace => merge_sort_in_place(v, is_less),
    }
}

/// Sorts `v` with a top-down merge sort that merges through an auxiliary buffer.
///
/// The buffer is allocated once per call. A merge only ever copies the shorter of its two runs
/// into it, so half the length of `v` is enough.
pub fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    if v.len() < 2 {
        return;
    }

    // Allocate a buffer to use as scratch memory. We keep the length 0 so we can keep in it
    // shallow copies of the contents of `v` without risking the dtors running on copies if
    // `is_less` panics.
    let mut buf = Vec::<T>::with_capacity(v.len() / 2);

    merge_sort_rec(v, buf.as_mut_ptr(), is_less);
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort_rec(&mut v[..mid], buf, is_less);
    merge_sort_rec(&mut v[mid..], buf, is_less);

    // The runs are already in order relative to each other.
    if !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    // SAFETY: both runs are non-empty, the shorter one has at most `len / 2` elements which fits
    // into `buf`, and `T` is not zero-sized.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// # Safety
///
/// The two slices must be non-empty and `mid` must be in bounds. Buffer `buf` must be long enough
/// to hold a copy of the shorter slice. Also, `T` must not be a zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let arr_ptr = v.as_mut_ptr();
    let (v_mid, v_end) = (arr_ptr.add(mid), arr_ptr.add(len));

    // The shorter run is copied into `buf`. Then the copy and the longer run are traced forwards
    // (or backwards), and the lesser (or greater) of their next unconsumed elements is written
    // into `v`.
    //
    // If `is_less` panics, `hole` gets dropped and copies the unconsumed part of `buf` into the
    // gap in `v`, so `v` still holds every element exactly once.
    let mut hole;

    if mid <= len - mid {
        // The left run is shorter.
        ptr::copy_nonoverlapping(arr_ptr, buf, mid);
        hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: arr_ptr,
        };

        let left = &mut hole.start;
        let mut right = v_mid;
        let out = &mut hole.dest;

        while *left < hole.end && right < v_end {
            // Consume the lesser side.
            // If equal, prefer the left run to maintain stability.
            let to_copy = if is_less(&*right, &**left) {
                get_and_increment(&mut right)
            } else {
                get_and_increment(left)
            };
            ptr::copy_nonoverlapping(to_copy, get_and_increment(out), 1);
        }
    } else {
        // The right run is shorter.
        ptr::copy_nonoverlapping(v_mid, buf, len - mid);
        hole = MergeHole {
            start: buf,
            end: buf.add(len - mid),
            dest: v_mid,
        };

        let left = &mut hole.dest;
        let right = &mut hole.end;
        let mut out = v_end;

        while arr_ptr < *left && buf < *right {
            // Consume the greater side.
            // If equal, prefer the right run to maintain stability.
            let to_copy = if is_less(&*right.sub(1), &*left.sub(1)) {
                decrement_and_get(left)
            } else {
                decrement_and_get(right)
            };
            ptr::copy_nonoverlapping(to_copy, decrement_and_get(&mut out), 1);
        }
    }
    // Finally, `hole` gets dropped. If the shorter run was not fully consumed, whatever remains of
    // it will now be copied into the hole in `v`.

    unsafe fn get_and_increment<T>(ptr: &mut *mut T) -> *mut T {
        let old = *ptr;
        *ptr = ptr.add(1);
        old
    }

    unsafe fn decrement_and_get<T>(ptr: &mut *mut T) -> *mut T {
        *ptr = ptr.sub(1);
        *ptr
    }

    // When dropped, copies the range `start..end` into `dest..`.
    struct MergeHole<T> {
        start: *mut T,
        end: *mut T,
        dest: *mut T,
    }

    impl<T> Drop for MergeHole<T> {
        fn drop(&mut self) {
            // SAFETY: `T` is not a zero-sized type, and these are pointers into the same buffer.
            unsafe {
                let len = self.end.offset_from(self.start) as usize;
                ptr::copy_nonoverlapping(self.start, self.dest, len);
            }
        }
    }
}

/// Sorts `v` with a top-down merge sort that merges by rotating blocks, without any auxiliary
/// buffer.
///
/// A merge of `n` elements costs *O*(*n* \* log(*n*)) moves instead of *O*(*n*), so the whole sort
/// is a log factor slower than [`merge_sort`] in the worst case.
pub fn merge_sort_in_place<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort_in_place(&mut v[..mid], is_less);
    merge_sort_in_place(&mut v[mid..], is_less);
    merge_in_place(v, mid, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` in place.
///
/// Cuts the longer run in half, finds the matching cut in the other run by binary search, and
/// rotates the two inner blocks past each other. That leaves two independent, smaller merges.
fn merge_in_place<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if mid == 0 || mid == len || !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    if len == 2 {
        v.swap(0, 1);
        return;
    }

    let (first_cut, second_cut) = if mid > len - mid {
        let first_cut = mid / 2;
        // Right elements equal to the cut element must stay behind it.
        let second_cut = mid + lower_bound(&v[mid..], &v[first_cut], is_less);
        (first_cut, second_cut)
    } else {
        let second_cut = mid + (len - mid) / 2;
        // Left elements equal to the cut element must stay in front of it.
        let first_cut = upper_bound(&v[..mid], &v[second_cut], is_less);
        (first_cut, second_cut)
    };

    v[first_cut..second_cut].rotate_left(mid - first_cut);

    let new_mid = first_cut + (second_cut - mid);
    let (left, right) = v.split_at_mut(new_mid);
    merge_in_place(left, first_cut, is_less);
    merge_in_place(right, mid - first_cut, is_less);
}

/// Index of the first element of `v` that is not less than `x`.
fn lower_bound<T, F>(v: &[T], x: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut lo, mut hi) = (0, v.len());
    while lo < hi {
        let m = lo + (hi - lo) / 2;
        if is_less(&v[m], x) {
            lo = m + 1;
        } else {
            hi = m;
        }
    }
    lo
}

/// Index of the first element of `v` that is greater than `x`.
fn upper_bound<T, F>(v: &[T], x: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut lo, mut hi) = (0, v.len());
    while lo < hi {
        let m = lo + (hi - lo) / 2;
        if is_less(x, &v[m]) {
            hi = m;
        } else {
            lo = m + 1;
        }
    }
    lo
}
