//! Serde support for the trees.
//!
//! A `BinarySearchTree<T>` is written as its pre-order key sequence, since inserting that sequence
//! into an empty tree rebuilds the same shape. A `RedBlackTree<T>` is written in ascending order;
//! its shape is determined by the balancing rules. Deserialization inserts keys one by one and
//! fails on the first duplicate.

use crate::binary_search_tree::BinarySearchTree;
use crate::red_black_tree::RedBlackTree;
use crate::tree::SearchTree;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

fn serialize_keys<'a, T, I, S>(keys: I, len: usize, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(len))?;
    for key in keys {
        seq.serialize_element(key)?;
    }
    seq.end()
}

impl<T> Serialize for BinarySearchTree<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_keys(self.pre_order(), self.len(), serializer)
    }
}

impl<T> Serialize for RedBlackTree<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_keys(self.in_order(), self.len(), serializer)
    }
}

struct TreeVisitor<S, T> {
    marker: PhantomData<fn() -> (S, T)>,
}

impl<S, T> TreeVisitor<S, T> {
    fn new() -> Self {
        TreeVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, S, T> Visitor<'de> for TreeVisitor<S, T>
where
    S: SearchTree<T> + Default,
    T: Deserialize<'de> + Ord,
{
    type Value = S;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of distinct keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = S::default();
        while let Some(key) = seq.next_element()? {
            tree.insert(key).map_err(de::Error::custom)?;
        }
        Ok(tree)
    }
}

impl<'de, T> Deserialize<'de> for BinarySearchTree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor::<Self, T>::new())
    }
}

impl<'de, T> Deserialize<'de> for RedBlackTree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor::<Self, T>::new())
    }
}
