/// Lexical tokens of the query grammar understood by the primary evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Root document reference, only meaningful as the first token
    ///
    /// # Examples
    /// ```text
    /// $
    /// $.user.name
    /// ```
    Dollar,

    /// Field separator
    Dot,

    /// Left bracket opening an index or quoted name
    LBracket,

    /// Right bracket
    RBracket,

    /// Quoted name, single or double quotes
    ///
    /// Lets a field name contain dots or brackets.
    ///
    /// # Examples
    /// ```text
    /// ['content-type']
    /// ["a.b"]
    /// ```
    String(String),

    /// Bare run of characters up to the next delimiter
    ///
    /// After a dot this is a field name; inside brackets it must be an
    /// integer index, negative values counting from the end.
    ///
    /// # Examples
    /// ```text
    /// user
    /// 0
    /// -1
    /// ```
    Word(String),

    /// End of input
    Eof,
}
