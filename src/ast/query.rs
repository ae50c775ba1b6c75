use std::fmt;

/// One step of a parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Object member by name: `.name`, `['name']`
    Name(String),

    /// Array element: `[0]`, `[-1]` (from the end)
    Index(i64),
}

/// A parsed query: the selectors applied from the root, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub selectors: Vec<Selector>,
}

impl Query {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Query { selectors }
    }

    /// The query addresses the root node
    pub fn is_root(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Split into parent selectors and the terminal selector.
    pub fn split_last(&self) -> Option<(&Selector, &[Selector])> {
        self.selectors.split_last()
    }
}

impl fmt::Display for Query {
    /// Bracketed form, e.g. `$['items'][0]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for selector in &self.selectors {
            match selector {
                Selector::Name(name) => {
                    write!(f, "['{}']", name.replace('\\', "\\\\").replace('\'', "\\'"))?
                }
                Selector::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}
