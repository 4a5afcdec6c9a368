//! Compound-file decoding: classify every `compounddef` and `memberdef`
//! into a documented/undocumented symbol record.

use crate::model::{CoverageIndex, Definition, KindFilter, SymbolKind};
use roxmltree::{Document, Node};

/// Absorb one parsed compound document into the index.
///
/// Each top-level `compounddef` is counted as one unit (the class, file, or
/// namespace itself), then every `memberdef` nested anywhere inside it is
/// counted separately. Members sit inside `sectiondef` wrappers; depth is
/// not assumed.
pub fn absorb(doc: &Document, filter: &KindFilter, index: &mut CoverageIndex) {
    for compounddef in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("compounddef"))
    {
        record(compounddef, filter, index);

        for memberdef in compounddef
            .descendants()
            .filter(|n| n.has_tag_name("memberdef"))
        {
            record(memberdef, filter, index);
        }
    }
}

fn record(node: Node, filter: &KindFilter, index: &mut CoverageIndex) {
    if let Some((source_file, definition)) = classify(node, filter) {
        index.record(&source_file, definition);
    }
}

/// Classify one definition element.
///
/// Returns `None` when the element's kind is excluded or unrecognized, or
/// when it carries no `location` to attribute it to a source file
/// (namespace compounds routinely lack one).
fn classify(node: Node, filter: &KindFilter) -> Option<(String, Definition)> {
    let kind = SymbolKind::parse(node.attribute("kind")?)?;
    if filter.is_excluded(kind) {
        return None;
    }

    let source_file = node
        .children()
        .find(|c| c.has_tag_name("location"))
        .and_then(|loc| loc.attribute("file"))?
        .to_string();

    Some((
        source_file,
        Definition {
            name: display_name(node, kind),
            kind,
            documented: has_documentation(node),
        },
    ))
}

/// Derive the stable display name for a definition element.
///
/// Priority order:
/// 1. class/struct compounds: the `compoundname` text (`Foo`)
/// 2. `definition` text plus `argsstring` (`int Foo::bar(int x)`)
/// 3. `name` text
/// 4. the element's `id` attribute
fn display_name(node: Node, kind: SymbolKind) -> String {
    if matches!(kind, SymbolKind::Class | SymbolKind::Struct) {
        if let Some(compoundname) = nonempty_child_text(node, "compoundname") {
            return compoundname.to_string();
        }
    }

    if let Some(definition) = child_text(node, "definition") {
        let mut name = definition.to_string();
        if let Some(argsstring) = nonempty_child_text(node, "argsstring") {
            name.push_str(argsstring);
        }
        return name;
    }

    if let Some(name) = child_text(node, "name") {
        return name.to_string();
    }

    node.attribute("id").unwrap_or_default().to_string()
}

/// A symbol is documented iff it carries at least one non-empty
/// `detaileddescription` block. Doxygen wraps description bodies in `<para>`
/// elements, so an element child is the usual signal; bare non-whitespace
/// text also counts. Brief descriptions are never inspected.
fn has_documentation(node: Node) -> bool {
    node.children()
        .filter(|c| c.has_tag_name("detaileddescription"))
        .any(|desc| {
            desc.children()
                .any(|c| c.is_element() || c.text().is_some_and(|t| !t.trim().is_empty()))
        })
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|c| c.has_tag_name(name))
        .and_then(|c| c.text())
}

fn nonempty_child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child_text(node, name).filter(|t| !t.is_empty())
}
