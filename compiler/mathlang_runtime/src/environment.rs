//! Scope chain for variable bindings.
//!
//! An `Environment` is a handle to one frame of bindings plus an optional
//! parent. Lookups walk outward; mutation touches the local frame only.
//! Frames form a tree through parent handles and never a cycle: a child
//! can only be made from an existing environment, and parents are fixed
//! at creation.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Single-threaded shared handle to a frame.
///
/// All frames are allocated through `LocalScope::new`. Not `Send`; the
/// interpreter runs each session on one thread.
#[repr(transparent)]
struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope level.
#[derive(Default)]
struct Frame {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

/// A variable scope (a session, at top level).
///
/// Cloning yields another handle to the same frame.
#[derive(Clone)]
pub struct Environment {
    frame: LocalScope<Frame>,
}

/// One visible binding, rendered for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariableSnapshot {
    pub name: String,
    pub display: String,
    pub type_name: String,
}

impl Environment {
    /// Fresh root environment with no bindings.
    pub fn new() -> Self {
        Environment {
            frame: LocalScope::new(Frame::default()),
        }
    }

    /// New empty frame whose parent is `self`.
    pub fn create_child(&self) -> Self {
        Environment {
            frame: LocalScope::new(Frame {
                bindings: FxHashMap::default(),
                parent: Some(self.clone()),
            }),
        }
    }

    pub fn parent(&self) -> Option<Environment> {
        self.frame.borrow().parent.clone()
    }

    /// Nearest binding of `name`, searching outward through parents.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let frame = current.frame.borrow();
                if let Some(value) = frame.bindings.get(name) {
                    return Some(value.clone());
                }
                frame.parent.clone()
            };
            current = parent?;
        }
    }

    /// Bind `name` in this frame, shadowing any parent binding.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.frame.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Whether `name` is bound here or in any ancestor.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a binding from this frame only. Returns whether one existed.
    pub fn delete(&self, name: &str) -> bool {
        self.frame.borrow_mut().bindings.remove(name).is_some()
    }

    /// Remove every binding from this frame; parents are untouched.
    pub fn clear(&self) {
        self.frame.borrow_mut().bindings.clear();
    }

    /// Every visible binding. Inner frames override same-named outer ones.
    pub fn list_visible(&self) -> BTreeMap<String, Value> {
        let mut chain = vec![self.clone()];
        while let Some(parent) = chain.last().and_then(Environment::parent) {
            chain.push(parent);
        }

        let mut visible = BTreeMap::new();
        for env in chain.iter().rev() {
            for (name, value) in &env.frame.borrow().bindings {
                visible.insert(name.clone(), value.clone());
            }
        }
        visible
    }

    /// Visible bindings as display strings, sorted by name.
    pub fn snapshot(&self) -> Vec<VariableSnapshot> {
        self.list_visible()
            .into_iter()
            .map(|(name, value)| VariableSnapshot {
                display: value.display(),
                type_name: value.type_name().into_owned(),
                name,
            })
            .collect()
    }

    /// Whether both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.frame.ptr_eq(&other.frame)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.frame.borrow();
        let mut names: Vec<_> = frame.bindings.keys().collect();
        names.sort();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("has_parent", &frame.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
