use std::iter::FusedIterator;

use super::TreeMap;
use crate::collections::binary_tree::tree::{IntoIter, Iter, IterMut};

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut TreeMap<K, V, C> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A borrowed iterator over the keys of a [`TreeMap`], in order.
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|e| e.0)
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// A borrowed iterator over the values of a [`TreeMap`], in key order.
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|e| e.1)
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

/// A borrowed iterator over the values of a [`TreeMap`], in key order, allowing mutation.
pub struct ValuesMut<'a, K, V>(pub(crate) IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for ValuesMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|e| e.1)
    }
}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for ValuesMut<'a, K, V> {}

/// An owned iterator over the keys of a [`TreeMap`], in order.
pub struct IntoKeys<K, V, C>(pub(crate) IntoIter<K, V, C>);

impl<K, V, C> Iterator for IntoKeys<K, V, C> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for IntoKeys<K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|e| e.0)
    }
}

impl<K, V, C> ExactSizeIterator for IntoKeys<K, V, C> {}

impl<K, V, C> FusedIterator for IntoKeys<K, V, C> {}

/// An owned iterator over the values of a [`TreeMap`], in key order.
pub struct IntoValues<K, V, C>(pub(crate) IntoIter<K, V, C>);

impl<K, V, C> Iterator for IntoValues<K, V, C> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for IntoValues<K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|e| e.1)
    }
}

impl<K, V, C> ExactSizeIterator for IntoValues<K, V, C> {}

impl<K, V, C> FusedIterator for IntoValues<K, V, C> {}
