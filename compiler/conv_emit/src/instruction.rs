use std::fmt;

/// One emitted instruction: an opcode followed by its operands.
///
/// Renders as the words joined by single spaces, which is the on-disk
/// format of compiled output.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct InstructionLine {
    words: Vec<String>,
}

impl InstructionLine {
    pub fn new(words: Vec<String>) -> Self {
        InstructionLine { words }
    }

    /// `set NAME VALUE...`
    pub fn set<I>(identifier: &str, value: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut words = vec!["set".to_string(), identifier.to_string()];
        words.extend(value.into_iter().map(Into::into));
        InstructionLine { words }
    }

    /// `op MNEMONIC NAME LHS RHS`
    pub fn op(mnemonic: &str, identifier: &str, lhs: &str, rhs: &str) -> Self {
        InstructionLine {
            words: vec![
                "op".to_string(),
                mnemonic.to_string(),
                identifier.to_string(),
                lhs.to_string(),
                rhs.to_string(),
            ],
        }
    }

    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The first word, or `None` for an empty line.
    pub fn opcode(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

impl fmt::Display for InstructionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}
