// In no-std environments, the implementor must define these functions.
//
// Normally these make use of thread-local storage, but if you want them to be
// completely disabled simply return dummy values or store it in static storage
// (if single threaded).
extern "C" {
    /// Take the given amount of memory from the current budget. Return `false`
    /// if the budget has been breached, or `true` otherwise.
    ///
    /// If this is called before `__lazy_vec_memory_replace` then it should
    /// usually just return `true`.
    pub(crate) fn __lazy_vec_memory_take(amount: usize) -> bool;

    /// Release the given amount of memory to the current budget.
    pub(crate) fn __lazy_vec_memory_release(amount: usize);

    /// Get the remaining memory budget for the current thread.
    pub(crate) fn __lazy_vec_memory_get() -> usize;

    /// Replace the memory budget for the current thread and return the one
    /// which was previously set.
    pub(crate) fn __lazy_vec_memory_replace(value: usize) -> usize;
}
