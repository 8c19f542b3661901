use super::Value;

use std::ops;

/// One row of values, in column order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> ValueRecord {
        ValueRecord { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.fields.iter()
    }

    /// Takes the value at `index`, leaving `Value::Null` in its place.
    pub fn take(&mut self, index: usize) -> Value {
        std::mem::take(&mut self.fields[index])
    }
}

impl ops::Index<usize> for ValueRecord {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.fields[index]
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<Value> for ValueRecord {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        ValueRecord::from_vec(iter.into_iter().collect())
    }
}

impl From<Vec<Value>> for ValueRecord {
    fn from(fields: Vec<Value>) -> Self {
        ValueRecord::from_vec(fields)
    }
}
