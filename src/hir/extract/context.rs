//! Scan context — one file's private state while its lines are scanned.

use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use super::declarations::{
    PackageDecl, TypeDecl, constant_definition, enum_header_values, enum_value, enum_value_key,
    function_key, interface_definition, record_element,
};
use super::state::{Architecture, Banner, LinePattern, ListCursor, ParseState, classify};
use crate::base::constants::PATH_SEPARATOR;
use crate::base::{first_word, normalize_name, paren_delta};
use crate::hir::diagnostics::{Diagnostic, DiagnosticCollector, codes};
use crate::hir::doc_buffer::DocBuffer;
use crate::hir::keys::{DefinitionKey, GroupKey, ListKind};
use crate::hir::symbols::{DocLines, DocSymbol, ExtractionResult};
use crate::syntax::{CommentKind, SourceLine};

/// One entry of the package scope stack.
#[derive(Clone, Debug)]
struct PackageScope {
    name: SmolStr,
    /// Opened by `package body`.
    body: bool,
}

/// The group that tags subsequent definitions of the current list.
#[derive(Clone, Debug)]
struct ActiveGroup {
    list: ListKind,
    key: GroupKey,
}

/// Extraction state for a single file.
pub(super) struct ScanContext {
    file: PathBuf,
    state: ParseState,
    packages: Vec<PackageScope>,
    /// Case-normalised name of the most recent entity.
    unit: Option<SmolStr>,
    active_group: Option<ActiveGroup>,
    buffer: DocBuffer,
    symbols: Vec<DocSymbol>,
    diagnostics: DiagnosticCollector,
}

impl ScanContext {
    pub fn new(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            state: ParseState::Top,
            packages: Vec::new(),
            unit: None,
            active_group: None,
            buffer: DocBuffer::new(),
            symbols: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    pub fn finish(self) -> ExtractionResult {
        ExtractionResult {
            file: self.file,
            symbols: self.symbols,
            diagnostics: self.diagnostics.into_vec(),
        }
    }

    /// Feed one line through the state machine.
    pub fn step(&mut self, line: &SourceLine<'_>) {
        if line.is_blank() {
            self.blank_line();
        } else if line.is_comment_only() {
            self.comment_line(line);
        } else {
            self.code_line(line);
        }
    }

    // ========================================================================
    // SCOPE HELPERS
    // ========================================================================

    /// `Top` or `Package`, depending on the package stack.
    fn scope_state(&self) -> ParseState {
        if self.packages.is_empty() {
            ParseState::Top
        } else {
            ParseState::Package
        }
    }

    fn qualified_package_name(&self, name: Option<&str>) -> SmolStr {
        let separator = PATH_SEPARATOR.to_string();
        let mut segments: Vec<&str> = self.packages.iter().map(|scope| scope.name.as_str()).collect();
        if let Some(name) = name {
            segments.push(name);
        }
        SmolStr::new(segments.join(&separator))
    }

    fn transition(&mut self, next: ParseState, line: u32) {
        if next != self.state {
            tracing::trace!(
                "[SCAN] {}:{} {:?} -> {:?}",
                self.file.display(),
                line,
                self.state,
                next
            );
        }
        self.state = next;
    }

    // ========================================================================
    // EMISSION
    // ========================================================================

    /// Attach pending documentation to a declaration and record the symbol.
    fn emit(&mut self, line: &SourceLine<'_>, build: impl FnOnce(DocLines) -> DocSymbol) {
        let attachment = self.buffer.attach(line.inline_doc());
        if let Some(discarded) = attachment.discarded_inline {
            self.conflict(line.number, &discarded);
        }
        self.symbols.push(build(attachment.doc));
    }

    fn conflict(&mut self, line: u32, discarded: &str) {
        let message = format!(
            "documentation comment both precedes and follows this declaration; \
             only one is allowed, discarding trailing '{discarded}'"
        );
        tracing::warn!("{}:{}: {}", self.file.display(), line, message);
        self.diagnostics.add(
            Diagnostic::warning(self.file.clone(), line, message).with_code(codes::DOC_CONFLICT),
        );
    }

    // ========================================================================
    // NON-CODE LINES
    // ========================================================================

    fn blank_line(&mut self) {
        // Blank lines inside a banner do not end it
        if !matches!(self.state, ParseState::GroupBanner(_)) {
            self.buffer.clear();
        }
    }

    fn comment_line(&mut self, line: &SourceLine<'_>) {
        let Some(kind) = line.comment_kind() else {
            return;
        };
        match (&mut self.state, kind) {
            (ParseState::Interface(cursor), CommentKind::Banner) => {
                let banner = Banner::new(*cursor, line.number);
                self.active_group = None;
                self.buffer.clear();
                self.transition(ParseState::GroupBanner(banner), line.number);
            }
            (ParseState::GroupBanner(_), CommentKind::Banner) => self.close_banner(line.number),
            (ParseState::GroupBanner(banner), CommentKind::Doc(text)) => {
                if banner.title.is_some() {
                    banner.doc.push(text.to_string());
                } else if !text.trim().is_empty() {
                    banner.title = Some(text.trim().to_string());
                }
            }
            (ParseState::GroupBanner(banner), CommentKind::Blank) => {
                if banner.title.is_some() {
                    banner.doc.push(String::new());
                }
            }
            (ParseState::GroupBanner(_), CommentKind::Stray) => {}
            (_, CommentKind::Doc(text)) => self.buffer.push(text),
            (_, CommentKind::Blank) => self.buffer.push_blank(),
            // Outside a list a banner row is ordinary comment text
            (_, CommentKind::Banner) => match line.comment.and_then(|c| c.trim_end().strip_prefix(' ')) {
                Some(text) => self.buffer.push(text),
                None => self.buffer.clear(),
            },
            (_, CommentKind::Stray) => self.buffer.clear(),
        }
    }

    /// Close the open banner: emit its group and return to the list.
    fn close_banner(&mut self, line: u32) {
        let ParseState::GroupBanner(banner) = &self.state else {
            return;
        };
        let Banner {
            list, title, doc, ..
        } = banner.clone();
        match (title, &self.unit) {
            (Some(title), Some(unit)) => {
                let key = GroupKey::new(unit, title);
                self.symbols.push(DocSymbol::Group {
                    key: key.clone(),
                    list: list.kind,
                    doc,
                });
                self.active_group = Some(ActiveGroup {
                    list: list.kind,
                    key,
                });
            }
            _ => self.active_group = None,
        }
        self.transition(ParseState::Interface(list), line);
    }

    // ========================================================================
    // CODE LINES: TRANSITION TABLE
    // ========================================================================

    fn code_line(&mut self, line: &SourceLine<'_>) {
        if let ParseState::GroupBanner(banner) = &self.state {
            let opened_at = banner.opened_at;
            let message = format!("group banner opened on line {opened_at} is not closed");
            tracing::warn!("{}:{}: {}", self.file.display(), line.number, message);
            self.diagnostics.add(
                Diagnostic::warning(self.file.clone(), line.number, message)
                    .with_code(codes::UNTERMINATED_BANNER),
            );
            self.close_banner(line.number);
        }

        let pattern = classify(line.code);
        match (&self.state, pattern) {
            // Rules that apply in any state
            (_, LinePattern::Function) => match function_key(line.code) {
                Some(key) => self.emit(line, |doc| DocSymbol::Function { key, doc }),
                None => self.buffer.clear(),
            },
            (_, LinePattern::Entity(name)) => {
                let name = normalize_name(name);
                self.unit = Some(name.clone());
                self.active_group = None;
                self.emit(line, |doc| DocSymbol::Entity { name, doc });
                self.transition(ParseState::EntityDecl, line.number);
            }
            (_, LinePattern::Architecture { ident, unit }) => {
                self.buffer.clear();
                let architecture = Architecture {
                    ident: ident.map(normalize_name),
                    unit: unit.map(normalize_name),
                };
                self.transition(ParseState::ArchDecl(architecture), line.number);
            }

            // Packages
            (ParseState::Top | ParseState::Package, LinePattern::Package(decl)) => {
                self.package_line(line, decl)
            }
            (ParseState::Package, LinePattern::EndPackage) => self.close_package(line),
            // `end <name>;` closes the innermost package of that name
            (ParseState::Package, LinePattern::End(rest))
                if first_word(rest).zip(self.packages.last()).is_some_and(
                    |(word, scope)| word.eq_ignore_ascii_case(&scope.name),
                ) =>
            {
                self.close_package(line)
            }

            // Entity declarations and their interface lists
            (ParseState::EntityDecl, LinePattern::ListOpen { kind, rest }) => {
                self.open_list(line, kind, rest)
            }
            (ParseState::EntityDecl, LinePattern::End(_)) => {
                self.buffer.clear();
                let next = self.scope_state();
                self.transition(next, line.number);
            }
            (ParseState::Interface(cursor), pattern) => {
                let cursor = *cursor;
                self.interface_line(line, cursor, pattern)
            }

            // Types
            (ParseState::Top | ParseState::Package, LinePattern::Type(decl)) => {
                self.type_line(line, decl)
            }
            (ParseState::Record { .. }, LinePattern::EndRecord) => {
                self.buffer.clear();
                let next = self.scope_state();
                self.transition(next, line.number);
            }
            (ParseState::Record { name }, _) if line.code.contains(':') => {
                let record = name.clone();
                match record_element(line.code) {
                    Some(element) => self.emit(line, |doc| DocSymbol::RecordElement {
                        record,
                        element,
                        doc,
                    }),
                    None => self.buffer.clear(),
                }
            }
            (ParseState::Enum { name, depth }, _) => {
                let (enumeration, depth) = (name.clone(), *depth);
                self.enum_line(line, enumeration, depth)
            }

            // Constants
            (ParseState::ArchDecl(architecture), LinePattern::Constant) => {
                let scope = architecture.unit.clone();
                self.constant_line(line, scope)
            }
            (ParseState::Package, LinePattern::Constant) => {
                let scope = match self.packages.last() {
                    Some(scope) if !scope.body => Some(self.qualified_package_name(None)),
                    _ => None,
                };
                self.constant_line(line, scope)
            }
            (ParseState::ArchDecl(architecture), LinePattern::End(rest)) => {
                let closes = first_word(rest).is_some_and(|word| {
                    word.eq_ignore_ascii_case("architecture")
                        || architecture
                            .ident
                            .as_ref()
                            .is_some_and(|ident| word.eq_ignore_ascii_case(ident))
                });
                self.buffer.clear();
                if closes {
                    let next = self.scope_state();
                    self.transition(next, line.number);
                }
            }

            // Anything else is a declaration boundary
            _ => self.buffer.clear(),
        }
    }

    fn package_line(&mut self, line: &SourceLine<'_>, decl: PackageDecl<'_>) {
        match decl {
            PackageDecl::Declaration(name) => {
                self.packages.push(PackageScope {
                    name: normalize_name(name),
                    body: false,
                });
                let name = self.qualified_package_name(None);
                self.emit(line, |doc| DocSymbol::Package { name, doc });
            }
            PackageDecl::Body(name) => {
                self.buffer.clear();
                self.packages.push(PackageScope {
                    name: normalize_name(name),
                    body: true,
                });
            }
            PackageDecl::Instance(name) => {
                let name = self.qualified_package_name(Some(&normalize_name(name)));
                self.emit(line, |doc| DocSymbol::Package { name, doc });
            }
        }
        let next = self.scope_state();
        self.transition(next, line.number);
    }

    fn close_package(&mut self, line: &SourceLine<'_>) {
        self.buffer.clear();
        self.packages.pop();
        let next = self.scope_state();
        self.transition(next, line.number);
    }

    // ========================================================================
    // PORT / GENERIC LISTS
    // ========================================================================

    fn open_list(&mut self, line: &SourceLine<'_>, kind: ListKind, rest: &str) {
        // A generic group must not leak into the port list that follows it
        if kind == ListKind::Port
            && self
                .active_group
                .as_ref()
                .is_some_and(|group| group.list == ListKind::Generic)
        {
            self.active_group = None;
        }

        let mut cursor = ListCursor::new(kind);
        let closed = cursor.advance(line.code);
        match rest.split_once('(') {
            Some((_, first)) if first.contains(':') => {
                let closers = if closed { cursor.closers() } else { 0 };
                self.emit_definition(line, kind, first, closers);
            }
            _ => self.buffer.clear(),
        }
        if closed {
            self.active_group = None;
            self.transition(ParseState::EntityDecl, line.number);
        } else {
            self.transition(ParseState::Interface(cursor), line.number);
        }
    }

    fn interface_line(&mut self, line: &SourceLine<'_>, mut cursor: ListCursor, pattern: LinePattern<'_>) {
        // A generic list that never balanced its parentheses runs into the port list
        if let LinePattern::ListOpen {
            kind: ListKind::Port,
            rest,
        } = pattern
        {
            if cursor.kind == ListKind::Generic && !line.code.contains(':') {
                self.open_list(line, ListKind::Port, rest);
                return;
            }
        }

        let closed = cursor.advance(line.code);
        if line.code.contains(':') {
            let closers = if closed { cursor.closers() } else { 0 };
            self.emit_definition(line, cursor.kind, line.code, closers);
        } else {
            self.buffer.clear();
        }

        if closed {
            self.active_group = None;
            self.transition(ParseState::EntityDecl, line.number);
        } else {
            self.state = ParseState::Interface(cursor);
        }
    }

    fn emit_definition(&mut self, line: &SourceLine<'_>, list: ListKind, code: &str, closers: usize) {
        let (Some(unit), Some(text)) = (
            self.unit.clone(),
            interface_definition(code, list, closers),
        ) else {
            self.buffer.clear();
            return;
        };
        let key = match &self.active_group {
            Some(group) => DefinitionKey::in_group(group.key.clone(), text),
            None => DefinitionKey::new(text),
        };
        self.emit(line, |doc| DocSymbol::Interface {
            unit,
            list,
            key,
            doc,
        });
    }

    // ========================================================================
    // TYPES AND CONSTANTS
    // ========================================================================

    fn type_line(&mut self, line: &SourceLine<'_>, decl: TypeDecl<'_>) {
        match decl {
            TypeDecl::Record(name) => {
                let name = normalize_name(name);
                let record = name.clone();
                self.emit(line, |doc| DocSymbol::Record { name, doc });
                self.transition(ParseState::Record { name: record }, line.number);
            }
            TypeDecl::Enum { name, values } => {
                let name = normalize_name(name);
                let enumeration = name.clone();
                let depth = paren_delta(line.code);
                let header = enum_header_values(values);
                // On an open header line the in-line comment documents the last value
                let value_doc = if depth > 0 && !header.is_empty() {
                    line.inline_doc()
                } else {
                    None
                };
                if value_doc.is_some() {
                    let doc = self.buffer.attach(None).doc;
                    self.symbols.push(DocSymbol::Enum { name, doc });
                } else {
                    self.emit(line, |doc| DocSymbol::Enum { name, doc });
                }
                let last = header.len().saturating_sub(1);
                for (idx, value) in header.into_iter().enumerate() {
                    let doc = match value_doc {
                        Some(text) if idx == last => vec![text.to_string()],
                        _ => DocLines::new(),
                    };
                    self.symbols.push(DocSymbol::EnumValue {
                        enumeration: enumeration.clone(),
                        value: enum_value_key(value),
                        doc,
                    });
                }
                if depth > 0 {
                    self.transition(
                        ParseState::Enum {
                            name: enumeration,
                            depth,
                        },
                        line.number,
                    );
                }
            }
            TypeDecl::Alias { name, underlying } => {
                let name = normalize_name(name);
                let underlying = underlying.to_string();
                self.emit(line, |doc| DocSymbol::TypeAlias {
                    name,
                    underlying,
                    doc,
                });
            }
        }
    }

    fn enum_line(&mut self, line: &SourceLine<'_>, enumeration: SmolStr, depth: i32) {
        let value = if line.code.starts_with(')') {
            None
        } else {
            enum_value(line.code)
        };
        match value {
            Some(value) => {
                let value = enum_value_key(value);
                self.emit(line, |doc| DocSymbol::EnumValue {
                    enumeration: enumeration.clone(),
                    value,
                    doc,
                });
            }
            None => self.buffer.clear(),
        }

        let depth = depth + paren_delta(line.code);
        if depth <= 0 {
            let next = self.scope_state();
            self.transition(next, line.number);
        } else {
            self.state = ParseState::Enum {
                name: enumeration,
                depth,
            };
        }
    }

    fn constant_line(&mut self, line: &SourceLine<'_>, scope: Option<SmolStr>) {
        match (scope, constant_definition(line.code)) {
            (Some(scope), Some(definition)) => self.emit(line, |doc| DocSymbol::Constant {
                scope,
                definition,
                doc,
            }),
            _ => self.buffer.clear(),
        }
    }
}
