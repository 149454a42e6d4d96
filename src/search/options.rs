//! Hooks that steer a search.
//!
//! A search consults five policies while it runs:
//!
//! | hook           | called with  | meaning                                              |
//! |----------------|--------------|------------------------------------------------------|
//! | base case      | `v`          | stop here, `v` is the target                         |
//! | vertex filter  | `src, dst`   | may the search step from `src` onto unvisited `dst`  |
//! | early return   | `src, dst`   | stop when `dst` was already seen or was filtered out |
//! | pre-visit      | `src, dst`   | side effect right before `dst` is entered            |
//! | deferred       | `v`          | side effect once every neighbour of `v` is handled   |
//!
//! Each hook is a strategy object. Closures implement the strategy traits
//! directly, and [`NoHook`] is the null object used for anything left unset.

pub trait BaseCase<V> {
    fn reached(&mut self, v: &V) -> bool;
}

pub trait VertexFilter<V> {
    fn admits(&mut self, src: &V, dst: &V) -> bool;
}

pub trait EarlyReturn<V> {
    fn stops(&mut self, src: &V, dst: &V) -> bool;
}

pub trait PreVisit<V> {
    fn pre_visit(&mut self, src: &V, dst: &V);
}

pub trait Deferred<V> {
    fn deferred(&mut self, v: &V);
}

impl<V, F: FnMut(&V) -> bool> BaseCase<V> for F {
    fn reached(&mut self, v: &V) -> bool {
        self(v)
    }
}

impl<V, F: FnMut(&V, &V) -> bool> VertexFilter<V> for F {
    fn admits(&mut self, src: &V, dst: &V) -> bool {
        self(src, dst)
    }
}

impl<V, F: FnMut(&V, &V) -> bool> EarlyReturn<V> for F {
    fn stops(&mut self, src: &V, dst: &V) -> bool {
        self(src, dst)
    }
}

impl<V, F: FnMut(&V, &V)> PreVisit<V> for F {
    fn pre_visit(&mut self, src: &V, dst: &V) {
        self(src, dst)
    }
}

impl<V, F: FnMut(&V)> Deferred<V> for F {
    fn deferred(&mut self, v: &V) {
        self(v)
    }
}

/// The do-nothing hook: never a base case, admits everything, never returns
/// early, and ignores visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHook;

impl<V> BaseCase<V> for NoHook {
    fn reached(&mut self, _: &V) -> bool {
        false
    }
}

impl<V> VertexFilter<V> for NoHook {
    fn admits(&mut self, _: &V, _: &V) -> bool {
        true
    }
}

impl<V> EarlyReturn<V> for NoHook {
    fn stops(&mut self, _: &V, _: &V) -> bool {
        false
    }
}

impl<V> PreVisit<V> for NoHook {
    fn pre_visit(&mut self, _: &V, _: &V) {}
}

impl<V> Deferred<V> for NoHook {
    fn deferred(&mut self, _: &V) {}
}

/// The full set of hooks as the search loops see it.
pub trait Hooks<V> {
    /// Whether a base case was supplied at all. Breadth-first search returns
    /// its whole flood fill when it was not.
    fn has_base_case(&self) -> bool;

    fn reached(&mut self, v: &V) -> bool;

    fn admits(&mut self, src: &V, dst: &V) -> bool;

    fn stops(&mut self, src: &V, dst: &V) -> bool;

    fn pre_visit(&mut self, src: &V, dst: &V);

    fn deferred(&mut self, v: &V);
}

impl<V, H: Hooks<V> + ?Sized> Hooks<V> for &mut H {
    fn has_base_case(&self) -> bool {
        (**self).has_base_case()
    }

    fn reached(&mut self, v: &V) -> bool {
        (**self).reached(v)
    }

    fn admits(&mut self, src: &V, dst: &V) -> bool {
        (**self).admits(src, dst)
    }

    fn stops(&mut self, src: &V, dst: &V) -> bool {
        (**self).stops(src, dst)
    }

    fn pre_visit(&mut self, src: &V, dst: &V) {
        (**self).pre_visit(src, dst)
    }

    fn deferred(&mut self, v: &V) {
        (**self).deferred(v)
    }
}

impl<V> Hooks<V> for NoHook {
    fn has_base_case(&self) -> bool {
        false
    }

    fn reached(&mut self, v: &V) -> bool {
        BaseCase::reached(self, v)
    }

    fn admits(&mut self, src: &V, dst: &V) -> bool {
        VertexFilter::admits(self, src, dst)
    }

    fn stops(&mut self, src: &V, dst: &V) -> bool {
        EarlyReturn::stops(self, src, dst)
    }

    fn pre_visit(&mut self, src: &V, dst: &V) {
        PreVisit::pre_visit(self, src, dst)
    }

    fn deferred(&mut self, v: &V) {
        Deferred::deferred(self, v)
    }
}

/// Per-call search configuration.
///
/// ```
/// use arborist::search::SearchOptions;
///
/// let mut entered = Vec::new();
/// let options = SearchOptions::new()
///     .with_base_case(|v: &u32| *v == 7)
///     .with_vertex_filter(|_: &u32, dst: &u32| dst % 2 == 1)
///     .with_pre_visit(|_: &u32, dst: &u32| entered.push(*dst));
/// # drop(options);
/// ```
pub struct SearchOptions<'h, V> {
    base_case: Box<dyn BaseCase<V> + 'h>,
    has_base_case: bool,
    vertex_filter: Box<dyn VertexFilter<V> + 'h>,
    early_return: Box<dyn EarlyReturn<V> + 'h>,
    pre_visit: Box<dyn PreVisit<V> + 'h>,
    deferred: Box<dyn Deferred<V> + 'h>,
}

impl<'h, V: 'h> Default for SearchOptions<'h, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h, V: 'h> SearchOptions<'h, V> {
    pub fn new() -> Self {
        SearchOptions {
            base_case: Box::new(NoHook),
            has_base_case: false,
            vertex_filter: Box::new(NoHook),
            early_return: Box::new(NoHook),
            pre_visit: Box::new(NoHook),
            deferred: Box::new(NoHook),
        }
    }

    /// Stops the search at the first vertex the predicate accepts.
    pub fn with_base_case(mut self, predicate: impl FnMut(&V) -> bool + 'h) -> Self {
        self.base_case = Box::new(predicate);
        self.has_base_case = true;
        self
    }

    /// Stops the search at `target`.
    pub fn with_target(self, target: V) -> Self
    where
        V: PartialEq,
    {
        self.with_base_case(move |v: &V| *v == target)
    }

    /// Only unvisited neighbours the predicate accepts are entered.
    pub fn with_vertex_filter(mut self, predicate: impl FnMut(&V, &V) -> bool + 'h) -> Self {
        self.vertex_filter = Box::new(predicate);
        self
    }

    /// Consulted for every neighbour that is not entered; returning `true`
    /// ends the search with the path to the current vertex.
    pub fn with_early_return(mut self, predicate: impl FnMut(&V, &V) -> bool + 'h) -> Self {
        self.early_return = Box::new(predicate);
        self
    }

    pub fn with_pre_visit(mut self, process: impl FnMut(&V, &V) + 'h) -> Self {
        self.pre_visit = Box::new(process);
        self
    }

    /// Runs once all neighbours of a vertex were handled without the search
    /// finishing.
    pub fn with_deferred(mut self, process: impl FnMut(&V) + 'h) -> Self {
        self.deferred = Box::new(process);
        self
    }
}

impl<V> Hooks<V> for SearchOptions<'_, V> {
    fn has_base_case(&self) -> bool {
        self.has_base_case
    }

    fn reached(&mut self, v: &V) -> bool {
        self.base_case.reached(v)
    }

    fn admits(&mut self, src: &V, dst: &V) -> bool {
        self.vertex_filter.admits(src, dst)
    }

    fn stops(&mut self, src: &V, dst: &V) -> bool {
        self.early_return.stops(src, dst)
    }

    fn pre_visit(&mut self, src: &V, dst: &V) {
        self.pre_visit.pre_visit(src, dst)
    }

    fn deferred(&mut self, v: &V) {
        self.deferred.deferred(v)
    }
}

impl<V> std::fmt::Debug for SearchOptions<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchOptions")
            .field("has_base_case", &self.has_base_case)
            .finish_non_exhaustive()
    }
}
