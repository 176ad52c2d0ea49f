//! In-memory descriptor model and XML rendering.
//!
//! A [`Descriptor`] is the ordered render model the generator fills in:
//! properties first, then the import chain. Rendering is pure string
//! building against the MSBuild project XML shape; byte-identical output
//! for identical input is part of the contract, so nothing here depends
//! on platform separators or map iteration order.

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const PROJECT_OPEN: &str =
    r#"<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">"#;

/// A named property rendered inside the descriptor's `PropertyGroup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A guarded import rendered as a self-closing `Import` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    project: String,
    condition: String,
}

impl Import {
    /// An import guarded by an existence check of its own project path.
    ///
    /// The condition keeps the MSBuild padding convention: one space on each
    /// side of the `Exists` call. Consumers re-evaluate the check with their
    /// own property expansions, so the project text goes in verbatim.
    pub fn guarded(project: impl Into<String>) -> Self {
        let project = project.into();
        let condition = format!(" Exists('{project}') ");
        Self { project, condition }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }
}

/// Ordered render model for one generated descriptor file.
///
/// The root descriptor carries properties and imports; extension slot files
/// carry imports only. An empty property list renders no `PropertyGroup`
/// element at all.
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    properties: Vec<Property>,
    imports: Vec<Import>,
}

impl Descriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn push_import(&mut self, import: Import) {
        self.imports.push(import);
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Render to MSBuild project XML, trailing newline included.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push('\n');
        out.push_str(PROJECT_OPEN);
        out.push('\n');

        if !self.properties.is_empty() {
            out.push_str("  <PropertyGroup>\n");
            for property in &self.properties {
                out.push_str("    <");
                out.push_str(&property.name);
                out.push('>');
                out.push_str(&escape_text(&property.value));
                out.push_str("</");
                out.push_str(&property.name);
                out.push_str(">\n");
            }
            out.push_str("  </PropertyGroup>\n");
        }

        for import in &self.imports {
            out.push_str("  <Import Project=\"");
            out.push_str(&escape_attr(&import.project));
            out.push_str("\" Condition=\"");
            out.push_str(&escape_attr(&import.condition));
            out.push_str("\" />\n");
        }

        out.push_str("</Project>\n");
        out
    }
}

/// Escape a text node: `&`, `<`, `>`.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value: `&`, `<`, `>`, `"`. Single quotes stay
/// literal so `Exists('...')` conditions render unchanged.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
