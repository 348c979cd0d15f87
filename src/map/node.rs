use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::compare::Compare;

pub(crate) struct Branch<K, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K, V> Branch<K, V> {
    pub fn insert<C: Compare<K>>(&mut self, cmp: &C, key: K, value: V) -> Option<V> {
        // Iterative rather than recursive: this runs on every write and nothing bounds the
        // height of the tree.
        let mut link = &mut self.0;
        while let Some(node) = link {
            match cmp.compare(&key, &node.key) {
                Ordering::Less => link = &mut node.left.0,
                Ordering::Greater => link = &mut node.right.0,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            }
        }

        *link = Some(Box::new(Node {
            left: None.into(),
            right: None.into(),
            key,
            value,
        }));
        None
    }

    pub fn get_entry<C: Compare<K>>(&self, cmp: &C, key: &K) -> Option<(&K, &V)> {
        match &self.0 {
            Some(node) => match cmp.compare(key, &node.key) {
                Ordering::Less => node.left.get_entry(cmp, key),
                Ordering::Greater => node.right.get_entry(cmp, key),
                Ordering::Equal => Some(node.tuple()),
            },
            None => None,
        }
    }

    pub fn get_mut<C: Compare<K>>(&mut self, cmp: &C, key: &K) -> Option<&mut V> {
        match &mut self.0 {
            Some(node) => match cmp.compare(key, &node.key) {
                Ordering::Less => node.left.get_mut(cmp, key),
                Ordering::Greater => node.right.get_mut(cmp, key),
                Ordering::Equal => Some(&mut node.value),
            },
            None => None,
        }
    }

    pub fn contains<C: Compare<K>>(&self, cmp: &C, key: &K) -> bool {
        match &self.0 {
            Some(node) => match cmp.compare(key, &node.key) {
                Ordering::Less => node.left.contains(cmp, key),
                Ordering::Greater => node.right.contains(cmp, key),
                Ordering::Equal => true,
            },
            None => false,
        }
    }

    pub fn remove_entry<C: Compare<K>>(&mut self, cmp: &C, key: &K) -> Option<(K, V)> {
        match &mut self.0 {
            Some(node) => match cmp.compare(key, &node.key) {
                Ordering::Less => node.left.remove_entry(cmp, key),
                Ordering::Greater => node.right.remove_entry(cmp, key),
                Ordering::Equal => {
                    // SAFETY: We've already matched self.0 as a Some, but we need to move the
                    // node out of the branch here.
                    let node = unsafe { mem::take(&mut self.0).unwrap_unchecked() };
                    let Node {
                        left,
                        right,
                        key,
                        value,
                    } = *node;
                    *self = left.rejoin(right);
                    Some((key, value))
                },
            },
            None => None,
        }
    }

    /// Reconnects the two subtrees left behind by a removal, producing the branch that takes
    /// the removed node's place.
    fn rejoin(self, greater: Branch<K, V>) -> Branch<K, V> {
        let Some(mut node) = self.0 else {
            return greater;
        };

        // Every key under `greater` compares above every key under self, so hanging the whole
        // subtree off the rightmost empty link keeps the ordering intact.
        let mut link = &mut node.right.0;
        while let Some(next) = link {
            link = &mut next.right.0;
        }
        *link = greater.0;

        Branch(Some(node))
    }

    pub fn dump<W: Write>(&self, sink: &mut W, depth: usize) -> io::Result<()>
    where
        K: Display,
        V: Display,
    {
        for _ in 0..depth {
            write!(sink, "  ")?;
        }
        match &self.0 {
            Some(node) => {
                writeln!(sink, "{}: {}", node.key, node.value)?;
                if node.left.is_some() || node.right.is_some() {
                    node.left.dump(sink, depth + 1)?;
                    node.right.dump(sink, depth + 1)?;
                }
                Ok(())
            },
            None => writeln!(sink, "<>"),
        }
    }
}

impl<K, V> Deref for Branch<K, V> {
    type Target = Option<Box<Node<K, V>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, V> DerefMut for Branch<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K, V> From<Option<Box<Node<K, V>>>> for Branch<K, V> {
    fn from(value: Option<Box<Node<K, V>>>) -> Self {
        Branch(value)
    }
}

impl<K: Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "({:?}: {:?}, {:?}, {:?})",
                node.key, node.value, node.left, node.right
            ),
            None => write!(f, "-"),
        }
    }
}
