//! Module path normalization.

/// TypeScript/JSX source suffixes and the JavaScript suffix they compile to.
const SOURCE_SUFFIXES: &[(&str, &str)] = &[
    (".tsx", ".js"),
    (".jsx", ".js"),
    (".mts", ".mjs"),
    (".cts", ".cjs"),
    (".ts", ".js"),
];

/// Normalize a module path the way manifests refer to modules.
///
/// Source suffixes are rewritten to the emitted JavaScript suffix, path
/// separators become `/` and a leading `./` is dropped.
pub fn normalize_module_path(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let trimmed = slashed.strip_prefix("./").unwrap_or(&slashed);
    for (from, to) in SOURCE_SUFFIXES {
        if let Some(stem) = trimmed.strip_suffix(from) {
            return format!("{stem}{to}");
        }
    }
    trimmed.to_string()
}
