//! Module metadata reported by the engine
//!
//! These records arrive ready to use; the facade hands them out as-is.

use serde::{Deserialize, Serialize};

/// Byte range in the source text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// A string value together with where it was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSpan {
    pub value: String,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcmaScriptModule {
    /// Has ESM syntax: `import`, `export`, or `import.meta`
    pub has_module_syntax: bool,
    pub static_imports: Vec<StaticImport>,
    pub static_exports: Vec<StaticExport>,
    pub dynamic_imports: Vec<DynamicImport>,
    /// Spans of `import.meta`
    pub import_metas: Vec<Span>,
}

impl EcmaScriptModule {
    /// Every module specifier imported or re-exported statically, in source order
    pub fn requested_modules(&self) -> impl Iterator<Item = &str> {
        let imports = self
            .static_imports
            .iter()
            .map(|import| &import.module_request);
        let exports = self
            .static_exports
            .iter()
            .flat_map(|export| &export.entries)
            .filter_map(|entry| entry.module_request.as_ref());
        let mut requests: Vec<&ValueSpan> = imports.chain(exports).collect();
        requests.sort_by_key(|request| request.start);
        requests.into_iter().map(|request| request.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticImport {
    pub start: u32,
    pub end: u32,
    pub module_request: ValueSpan,
    /// Empty for `import "mod"`
    pub entries: Vec<ImportEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEntry {
    pub import_name: ImportName,
    pub local_name: ValueSpan,
    /// `import type { foo } from "mod"`
    pub is_type: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportName {
    pub kind: ImportNameKind,
    pub name: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportNameKind {
    /// `import { x } from "mod"`
    Name,
    /// `import * as ns from "mod"`
    NamespaceObject,
    /// `import defaultExport from "mod"`
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticExport {
    pub start: u32,
    pub end: u32,
    pub entries: Vec<ExportEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEntry {
    pub start: u32,
    pub end: u32,
    pub module_request: Option<ValueSpan>,
    pub import_name: ExportImportName,
    pub export_name: ExportExportName,
    pub local_name: ExportLocalName,
    pub is_type: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportImportName {
    pub kind: ExportImportNameKind,
    pub name: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportImportNameKind {
    /// `export { name }`
    Name,
    /// `export * as ns from "mod"`
    All,
    /// `export * from "mod"`
    AllButDefault,
    /// Does not have a specifier
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportExportName {
    pub kind: ExportExportNameKind,
    pub name: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportExportNameKind {
    /// `export { name }`
    Name,
    /// `export default expression`
    Default,
    /// `export * from "mod"`
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLocalName {
    pub kind: ExportLocalNameKind,
    pub name: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportLocalNameKind {
    /// `export { name }`
    Name,
    /// `export default expression`
    Default,
    /// Re-exports without a local binding: `export * from "mod"`,
    /// `export * as ns from "mod"`
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicImport {
    pub start: u32,
    pub end: u32,
    /// Span of the specifier expression inside `import(...)`
    pub module_request: Span,
}
