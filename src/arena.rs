//! Chunked node storage addressed by stable identifiers.

use std::mem;
use std::ops::{Index, IndexMut};

/// A stable handle to a node stored in an `Arena<T>`.
///
/// Identifiers are recycled once the node they refer to is freed, so a `NodeId` is only
/// meaningful while the owning tree still links to it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// An allocator for the nodes of a single tree.
///
/// Nodes live in fixed-capacity chunks, so allocating never moves an existing node. Freed slots
/// are threaded into a free list and reused before a new chunk is requested.
pub struct Arena<T> {
    head: Option<NodeId>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    capacity: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>` that grows by `chunk_size` nodes at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        Arena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            capacity: 0,
        }
    }

    fn is_valid(&self, id: NodeId) -> bool {
        id.chunk_index < self.chunks.len() && id.block_index < self.chunks[id.chunk_index].len()
    }

    pub fn allocate(&mut self, value: T) -> NodeId {
        self.allocate_with(|_| value)
    }

    /// Allocates a node whose contents depend on the id it is about to receive.
    pub fn allocate_with<F>(&mut self, init: F) -> NodeId
    where
        F: FnOnce(NodeId) -> T,
    {
        if self.len == self.capacity {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
            self.capacity += self.chunk_size;
        }
        self.len += 1;

        match self.head.take() {
            None => {
                // every chunk before the last one is full, otherwise the free list is non-empty
                let chunk_index = self.chunks.len() - 1;
                let chunk = &mut self.chunks[chunk_index];
                let id = NodeId {
                    chunk_index,
                    block_index: chunk.len(),
                };
                chunk.push(Block::Occupied(init(id)));
                id
            },
            Some(id) => {
                let block = mem::replace(
                    &mut self.chunks[id.chunk_index][id.block_index],
                    Block::Occupied(init(id)),
                );
                match block {
                    Block::Vacant(next) => self.head = next,
                    Block::Occupied(_) => panic!("Error: free list points at an occupied block."),
                }
                id
            },
        }
    }

    /// Releases a node and returns its contents.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a live node.
    pub fn free(&mut self, id: NodeId) -> T {
        if !self.is_valid(id) {
            panic!("Error: attempting to free invalid block.");
        }
        let block = mem::replace(
            &mut self.chunks[id.chunk_index][id.block_index],
            Block::Vacant(self.head),
        );
        match block {
            Block::Vacant(next) => {
                self.chunks[id.chunk_index][id.block_index] = Block::Vacant(next);
                panic!("Error: attempting to free vacant block.");
            },
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(id);
                value
            },
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        if !self.is_valid(id) {
            return None;
        }
        match self.chunks[id.chunk_index][id.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if !self.is_valid(id) {
            return None;
        }
        match self.chunks[id.chunk_index][id.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Drops every node and releases all chunks.
    pub fn clear(&mut self) {
        self.head = None;
        self.chunks.clear();
        self.len = 0;
        self.capacity = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: node id does not refer to a live node.")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: node id does not refer to a live node.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, NodeId};

    #[test]
    #[should_panic]
    fn test_zero_chunk_size() {
        let _: Arena<u32> = Arena::with_chunk_size(0);
    }

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: Arena<u32> = Arena::with_chunk_size(16);
        arena.free(NodeId {
            chunk_index: 0,
            block_index: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_twice() {
        let mut arena = Arena::with_chunk_size(16);
        let id = arena.allocate(0);
        arena.free(id);
        arena.free(id);
    }

    #[test]
    fn test_allocate_across_chunks() {
        let mut arena = Arena::with_chunk_size(2);
        let ids: Vec<NodeId> = (0..5).map(|value| arena.allocate(value)).collect();
        assert_eq!(arena.len(), 5);
        assert_eq!(arena.chunks.len(), 3);
        for (value, id) in ids.into_iter().enumerate() {
            assert_eq!(arena[id], value);
        }
    }

    #[test]
    fn test_free_reuses_slot() {
        let mut arena = Arena::with_chunk_size(16);
        let first = arena.allocate(1);
        let second = arena.allocate(2);
        assert_eq!(arena.free(first), 1);
        assert_eq!(arena.get(first), None);
        assert_eq!(arena.allocate(3), first);
        assert_eq!(arena[first], 3);
        assert_eq!(arena[second], 2);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_allocate_with() {
        let mut arena = Arena::with_chunk_size(16);
        arena.allocate(None);
        let id = arena.allocate_with(Some);
        assert_eq!(arena[id], Some(id));
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::with_chunk_size(16);
        let id = arena.allocate(1);
        *arena.get_mut(id).unwrap() += 1;
        arena[id] += 1;
        assert_eq!(arena.get(id), Some(&3));
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::with_chunk_size(4);
        let id = arena.allocate(1);
        arena.allocate(2);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.get(id), None);
        assert_eq!(arena.allocate(3), id);
    }
}
