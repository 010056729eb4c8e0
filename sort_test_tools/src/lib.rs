/// A sort implementation under test.
///
/// The generic test bodies in `tests` only talk to implementations through this trait, and compare
/// their results against `slice::sort`.
pub trait Sort {
    fn name() -> String;

    /// Stable sorts get additionally checked for preserving the order of equal elements.
    fn is_stable() -> bool {
        true
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
