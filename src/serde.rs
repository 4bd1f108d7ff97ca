//! `serde` support for [`SeqTree`]s

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::SeqTree;

impl<T: Serialize, const C: usize> Serialize for SeqTree<T, C> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>, const C: usize> Deserialize<'de> for SeqTree<T, C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqTreeVisitor {
            marker: PhantomData,
        })
    }
}

struct SeqTreeVisitor<T, const C: usize> {
    marker: PhantomData<SeqTree<T, C>>,
}

impl<'de, T: Deserialize<'de>, const C: usize> Visitor<'de> for SeqTreeVisitor<T, C> {
    type Value = SeqTree<T, C>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of values")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // Collect everything first so that the tree can be built in one pass, instead of one
        // insertion at a time.
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(v) = seq.next_element()? {
            values.push(v);
        }

        Ok(SeqTree::build_from(values))
    }
}
