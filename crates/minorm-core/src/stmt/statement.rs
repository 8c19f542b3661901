use super::{Insert, Select, Update};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Query(Select),
    Update(Update),
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
