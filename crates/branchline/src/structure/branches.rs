//! Branch resolution.
//!
//! [`Branches::resolve`] links branches to their parents in two passes:
//!
//! 1. index every branch by name,
//! 2. walk the input list in order, assigning each branch its 1-based lane
//!    `order` and looking its parent up in the index.
//!
//! Because the second pass is driven by the input list and not by the index,
//! the result never depends on map iteration order.
//!
//! A parent name that matches no branch is tolerated: the branch is treated
//! as a root and a warning is logged. Duplicate names and parent cycles are
//! rejected.

use std::ops::Index;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{debug, trace, warn};

use branchline_core::semantic::{BranchSpec, BranchType};

use crate::error::ValidationError;

/// A branch with its lane order and resolved parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    name: String,
    parent_name: String,
    parent: Option<usize>,
    order: usize,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    branch_type: BranchType,
}

impl Branch {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent name as written in the input, empty for roots.
    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }

    /// Returns the 1-based lane position of this branch.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end of the branch, `None` while it is still open.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn branch_type(&self) -> BranchType {
        self.branch_type
    }

    /// Returns `true` when the parent reference resolved.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

/// An ordered collection of resolved branches.
///
/// Iteration follows input order, which is also lane order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branches {
    branches: Vec<Branch>,
    index: IndexMap<String, usize>,
}

impl Branches {
    /// Resolves parent references and lane order for `specs`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a name is empty or used twice, or
    /// when following parent links leads back to a branch already visited.
    pub fn resolve(specs: &[BranchSpec]) -> Result<Self, ValidationError> {
        // Pass 1: name -> position
        let mut index = IndexMap::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            if spec.name().is_empty() {
                return Err(ValidationError::EmptyBranchName { index: position });
            }
            if index.insert(spec.name().to_string(), position).is_some() {
                return Err(ValidationError::DuplicateBranch(spec.name().to_string()));
            }
        }

        // Pass 2: order and parent links, in input order
        let branches = specs
            .iter()
            .enumerate()
            .map(|(position, spec)| {
                let parent = if spec.parent().is_empty() {
                    None
                } else {
                    let parent = index.get(spec.parent()).copied();
                    if parent.is_none() {
                        warn!(
                            branch = spec.name(),
                            parent = spec.parent();
                            "Parent branch not found, drawing branch as a root"
                        );
                    }
                    parent
                };

                let branch = Branch {
                    name: spec.name().to_string(),
                    parent_name: spec.parent().to_string(),
                    parent,
                    order: position + 1,
                    start: spec.start(),
                    end: spec.end(),
                    branch_type: spec.branch_type(),
                };
                trace!(branch:?; "Resolved branch");
                branch
            })
            .collect();

        let branches = Self { branches, index };
        branches.check_cycles()?;

        debug!(branches_count = branches.len(); "Branches resolved");
        Ok(branches)
    }

    /// Walks every ancestor chain; a chain longer than the collection must
    /// revisit a branch.
    fn check_cycles(&self) -> Result<(), ValidationError> {
        for start in 0..self.branches.len() {
            let mut chain = vec![start];
            let mut current = self.branches[start].parent;

            while let Some(next) = current {
                if let Some(first) = chain.iter().position(|&seen| seen == next) {
                    let mut cycle: Vec<String> = chain[first..]
                        .iter()
                        .map(|&i| self.branches[i].name.clone())
                        .collect();
                    cycle.push(self.branches[next].name.clone());
                    return Err(ValidationError::ParentCycle(cycle));
                }
                if chain.len() > self.branches.len() {
                    break;
                }
                chain.push(next);
                current = self.branches[next].parent;
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Iterates branches in lane order.
    pub fn iter(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter()
    }

    /// Looks a branch up by name.
    pub fn get(&self, name: &str) -> Option<&Branch> {
        self.index.get(name).map(|&i| &self.branches[i])
    }

    /// Returns the resolved parent of `branch`, `None` for roots.
    pub fn parent(&self, branch: &Branch) -> Option<&Branch> {
        branch.parent.map(|i| &self.branches[i])
    }
}

/// Positional access, as used by resolved merge and release events.
impl Index<usize> for Branches {
    type Output = Branch;

    fn index(&self, position: usize) -> &Self::Output {
        &self.branches[position]
    }
}

impl<'a> IntoIterator for &'a Branches {
    type Item = &'a Branch;
    type IntoIter = std::slice::Iter<'a, Branch>;

    fn into_iter(self) -> Self::IntoIter {
        self.branches.iter()
    }
}
