//! Node identities and resolver handles.

use serde::{Deserialize, Serialize};

/// Identity of one syntax node.
///
/// Two nodes never share an id; copying a subtree with
/// [`NodeCopier`](crate::copier::NodeCopier) mints fresh ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Placeholder carried by nodes deserialized without an id.
    pub const UNASSIGNED: NodeId = NodeId(0);

    #[inline]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

/// Mints node ids for one compilation unit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeIdAllocator {
    next: u32,
}

impl NodeIdAllocator {
    pub const fn new() -> Self {
        NodeIdAllocator { next: 1 }
    }

    pub fn fresh(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub const fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl Default for NodeIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a type descriptor owned by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

/// Handle to a field, local or parameter binding owned by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableId(pub u32);

/// Handle to a method or constructor binding owned by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodId(pub u32);
