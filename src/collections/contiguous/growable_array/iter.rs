use std::slice::{Iter, IterMut};

use super::GrowableArray;
use crate::Value;

impl<'a> IntoIterator for &'a GrowableArray {
    type Item = &'a Value;

    type IntoIter = Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut GrowableArray {
    type Item = &'a mut Value;

    type IntoIter = IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
