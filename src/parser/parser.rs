//! Tree builder driven by the grammar modules
//!
//! Owns the token cursor and the rowan GreenNodeBuilder, and produces a
//! lossless CST plus collected errors. Trivia is transparent to the
//! grammar: peeking skips it, consuming flushes it into the tree first.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::errors::{ErrorCode, RelatedInfo, SyntaxError};
use super::lexer::{Token, tokenize};
use super::providers::{DefaultOptionProvider, OptionProvider};
use super::syntax_kind::SyntaxKind;

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse proto source code into a CST using the default option tables
pub fn parse(input: &str) -> Parse {
    parse_with(input, &[&DefaultOptionProvider])
}

/// Parse proto source code with caller-supplied option providers
///
/// Providers are consulted in order when validating field options; the
/// first provider that recognizes an option name wins.
pub fn parse_with(input: &str, providers: &[&dyn OptionProvider]) -> Parse {
    let tokens = tokenize(input);
    tracing::debug!("[PARSER] parsing {} bytes, {} tokens", input.len(), tokens.len());
    let mut parser = Parser::new(&tokens, providers, TextSize::of(input));
    super::grammar::file::parse_source_file(&mut parser);
    parser.finish()
}

/// A position in the token stream, used to rewind speculative parses
///
/// Valid only as long as nothing was emitted to the tree after it was
/// taken; `skip_token` is the only legal way to advance in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pos: usize,
}

/// An open node, completed retroactively once its contents are parsed
///
/// Wraps everything emitted since `Parser::mark` into a node of the kind
/// chosen at completion time. Completion order is innermost first.
#[must_use = "markers must be completed or abandoned"]
pub(crate) struct Marker {
    checkpoint: Checkpoint,
}

impl Marker {
    /// Close the marker, wrapping its contents in a node of `kind`
    pub(crate) fn complete(self, p: &mut Parser<'_>, kind: SyntaxKind) {
        p.builder.start_node_at(self.checkpoint, kind.into());
        p.builder.finish_node();
    }

    /// Discard the marker; everything parsed since stays in the parent node
    pub(crate) fn abandon(self) {}
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    providers: &'a [&'a dyn OptionProvider],
    text_len: TextSize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        tokens: &'a [Token<'a>],
        providers: &'a [&'a dyn OptionProvider],
        text_len: TextSize,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            providers,
            text_len,
        }
    }

    pub(crate) fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    /// Option providers supplied by the caller
    pub(crate) fn providers(&self) -> &'a [&'a dyn OptionProvider] {
        self.providers
    }

    // =========================================================================
    // Token inspection (trivia-transparent)
    // =========================================================================

    fn non_trivia_from(&self, mut idx: usize) -> usize {
        while idx < self.tokens.len() && self.tokens[idx].kind.is_trivia() {
            idx += 1;
        }
        idx
    }

    pub(crate) fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.non_trivia_from(self.pos))
    }

    pub(crate) fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    pub(crate) fn current_text(&self) -> &'a str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    /// Range of the current token, or an empty range at text end
    pub(crate) fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.text_len))
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    pub(crate) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    /// Keywords lex as plain identifiers; match on text
    pub(crate) fn at_keyword(&self, keyword: &str) -> bool {
        self.at(SyntaxKind::IDENT) && self.current_text() == keyword
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.non_trivia_from(self.pos) >= self.tokens.len()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Emit pending trivia into the tree at the current builder position
    pub(crate) fn flush_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            let token = &self.tokens[self.pos];
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the current token (plus any trivia before it)
    pub(crate) fn bump(&mut self) {
        self.flush_trivia();
        if self.pos < self.tokens.len() {
            let token = &self.tokens[self.pos];
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or record `expected '<label>', but got '<text>'`
    ///
    /// The cursor does not move on a mismatch. At end of input the
    /// `but got` clause is dropped and the error anchors to the text end.
    pub(crate) fn expect(&mut self, kind: SyntaxKind, label: &str) -> bool {
        if self.eat(kind) {
            return true;
        }
        let message = match self.current() {
            Some(token) => format!("expected '{}', but got '{}'", label, token.text),
            None => format!("expected '{}'", label),
        };
        self.error(message, code_for(kind));
        false
    }

    // =========================================================================
    // Markers and snapshots
    // =========================================================================

    /// Open a marker at the current position; leading trivia stays outside
    pub(crate) fn mark(&mut self) -> Marker {
        self.flush_trivia();
        Marker {
            checkpoint: self.builder.checkpoint(),
        }
    }

    /// Remember the cursor for a speculative parse
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot { pos: self.pos }
    }

    /// Rewind to a snapshot; nothing may have been emitted since
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.pos;
    }

    /// Advance past the current token without emitting anything
    ///
    /// Only legal between `snapshot` and `restore`.
    pub(crate) fn skip_token(&mut self) {
        self.pos = self.non_trivia_from(self.pos);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    // =========================================================================
    // Error handling and recovery
    // =========================================================================

    /// Record an error anchored at the current token (or the text end)
    pub(crate) fn error(&mut self, message: impl Into<String>, code: ErrorCode) {
        let range = self.current_range();
        self.errors.push(SyntaxError::new(message, range, code));
    }

    /// Record a fully built error, e.g. one carrying related locations
    pub(crate) fn error_with(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    /// Record `expected '}'` for a body that ran out of input, pointing
    /// back at the opening brace when one was consumed
    pub(crate) fn error_unclosed(&mut self, open_brace: Option<TextRange>) {
        let mut error = SyntaxError::new("expected '}'", self.current_range(), ErrorCode::E0202);
        if let Some(range) = open_brace {
            error = error.with_related(RelatedInfo::new("opened here", range));
        }
        self.error_with(error);
    }

    /// Skip tokens until one of `recovery` (or end of input) is reached
    ///
    /// The skipped tokens are wrapped in an ERROR node. Does nothing, and
    /// builds no node, when the cursor already sits on a recovery token.
    pub(crate) fn skip_until(&mut self, recovery: &[SyntaxKind]) {
        if self.at_eof() || self.at_any(recovery) {
            return;
        }
        self.flush_trivia();
        self.builder.start_node(SyntaxKind::ERROR.into());
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Open a node at the current builder position
    ///
    /// Used for the root node only; statement nodes go through markers so
    /// that leading trivia stays outside them.
    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }
}

/// Error code for a failed `expect` of the given token kind
fn code_for(kind: SyntaxKind) -> ErrorCode {
    match kind {
        SyntaxKind::SEMICOLON => ErrorCode::E0201,
        SyntaxKind::R_BRACE => ErrorCode::E0202,
        SyntaxKind::L_BRACE => ErrorCode::E0203,
        SyntaxKind::L_PAREN | SyntaxKind::R_PAREN => ErrorCode::E0204,
        SyntaxKind::L_BRACKET | SyntaxKind::R_BRACKET => ErrorCode::E0205,
        SyntaxKind::EQ => ErrorCode::E0206,
        SyntaxKind::LT | SyntaxKind::GT => ErrorCode::E0207,
        SyntaxKind::COMMA => ErrorCode::E0208,
        _ => ErrorCode::E0902,
    }
}
