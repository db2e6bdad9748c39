use std::fmt;

/// A fixed placeholder inside a template, e.g. `::_MODULES_::`.
///
/// Tokens are compile-time constants and never come from user input, so a
/// literal substring scan is all substitution needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(&'static str);

impl Token {
    pub const MODULE_NAME: Token = Token("::_CODEGEN_MODULE_NAME_::");
    pub const MODULES: Token = Token("::_MODULES_::");
    pub const LIBRARY_NAME: Token = Token("::_LIBRARY_NAME_::");

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Replace every occurrence of each token with its value.
///
/// Pairs are applied in order. Values are inserted verbatim: if a value
/// contains the text of a token substituted later, that text is replaced
/// too. Nothing guards against this.
pub fn render(template: &str, substitutions: &[(Token, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |acc, (token, value)| {
            acc.replace(token.as_str(), value)
        })
}

/// Render `item` once per name and join the blocks with a single newline.
///
/// Blocks that end in a newline come out separated by exactly one blank line.
pub fn render_each<'a, I>(item: &str, token: Token, names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| render(item, &[(token, name)]))
        .collect::<Vec<_>>()
        .join("\n")
}
