//! Method-set declarations and the interface tag.

use ducktype_types::MethodDescriptor;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// A named, ordered set of method descriptors.
///
/// A method set is an ordinary type declaration until it is marked. Once
/// marked it stays an interface; there is no way to remove the tag. The tag
/// is an atomic flag so a mark made during initialization is visible to every
/// thread that checks against the set afterwards.
///
/// Included sets are shared through `Arc` and cannot be changed after
/// inclusion, so the inclusion graph is always acyclic.
#[derive(Debug)]
pub struct MethodSet {
    name: String,
    methods: Vec<MethodDescriptor>,
    includes: Vec<Arc<MethodSet>>,
    marked: AtomicBool,
}

impl MethodSet {
    /// Declare an unmarked method set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            includes: Vec::new(),
            marked: AtomicBool::new(false),
        }
    }

    /// Declare a method set that is marked as an interface from the start.
    pub fn interface(name: impl Into<String>) -> Self {
        let set = Self::new(name);
        set.mark();
        set
    }

    /// Add a method. A later method with the same name replaces the earlier
    /// one in place.
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        match self.methods.iter_mut().find(|m| m.name == method.name) {
            Some(existing) => *existing = method,
            None => self.methods.push(method),
        }
        self
    }

    /// Include another method set; its methods become part of this one.
    pub fn include(mut self, other: Arc<MethodSet>) -> Self {
        self.includes.push(other);
        self
    }

    /// Tag this declaration as an interface.
    pub fn mark(&self) {
        if !self.marked.swap(true, Ordering::AcqRel) {
            debug!(method_set = %self.name, "Method set marked as interface");
        }
    }

    /// Whether this declaration itself carries the interface tag.
    pub fn is_marked(&self) -> bool {
        self.marked.load(Ordering::Acquire)
    }

    /// Whether this declaration, or any set it transitively includes, is
    /// marked. Each included set is visited at most once.
    pub fn is_interface(&self) -> bool {
        self.is_interface_in(&mut HashSet::new())
    }

    fn is_interface_in(&self, seen: &mut HashSet<*const MethodSet>) -> bool {
        if self.is_marked() {
            return true;
        }
        self.includes
            .iter()
            .any(|inc| seen.insert(Arc::as_ptr(inc)) && inc.is_interface_in(seen))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Methods declared directly on this set.
    pub fn own_methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn includes(&self) -> &[Arc<MethodSet>] {
        &self.includes
    }

    /// The union of this set's methods and those of everything it includes.
    ///
    /// Included sets come first, depth-first in inclusion order, then this
    /// set's own methods. A set reachable along several paths contributes
    /// once. When a name repeats, the later definition replaces the earlier
    /// descriptor but keeps its position.
    pub fn flattened_methods(&self) -> Vec<MethodDescriptor> {
        let mut seen = HashSet::new();
        let mut positions = HashMap::new();
        let mut out = Vec::new();
        self.collect(&mut seen, &mut positions, &mut out);
        out
    }

    fn collect(
        &self,
        seen: &mut HashSet<*const MethodSet>,
        positions: &mut HashMap<String, usize>,
        out: &mut Vec<MethodDescriptor>,
    ) {
        for inc in &self.includes {
            if seen.insert(Arc::as_ptr(inc)) {
                inc.collect(seen, positions, out);
            }
        }
        for method in &self.methods {
            match positions.get(&method.name) {
                Some(&pos) => out[pos] = method.clone(),
                None => {
                    positions.insert(method.name.clone(), out.len());
                    out.push(method.clone());
                }
            }
        }
    }
}
