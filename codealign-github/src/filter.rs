//! Path filtering for repository traversal
//!
//! Decides which repository paths are worth analyzing: allow-listed
//! human-authored source extensions, minus anything living under a
//! build-output, dependency, or tooling-metadata directory.

use std::ffi::OsStr;
use std::path::Path;

/// Extensions recognized as analyzable source, markup, style, or query code
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", // JavaScript/TypeScript
    "html", "htm", // markup
    "css", "scss", "sass", // styles
    "java", "cs", // JVM / .NET
    "py", "sql", // Python / query
    "c", "cpp", "h", "hpp", // C/C++
    "vb", "aspx", "cshtml", "vbhtml", // legacy .NET surfaces
];

/// Directory names excluded from traversal
///
/// Compared case-insensitively against exact path segments.
const SKIPPED_FOLDERS: &[&str] = &[
    "node_modules",      // JavaScript/TypeScript
    ".next",             // Next.js
    "__pycache__",       // Python
    "venv", "env",       // Python virtual environments
    "bin", "obj",        // C#/.NET build folders
    "build", "dist",     // common build/distribution folders
    "target",            // Java/Maven build folder
    "vendor",            // PHP/Composer dependencies
    ".vs", ".vscode",    // Visual Studio/VS Code
    "packages",          // NuGet packages
    "bower_components",  // Bower
    "jspm_packages",     // JSPM
    "tmp", "temp",       // temporary folders
    "logs",              // log folders
    ".sass-cache",       // Sass cache
    ".tsbuildinfo",      // TypeScript build info
    "out",               // common output folder
    "debug", "release",  // C++/C# build configurations
    ".idea",             // JetBrains IDEs
    ".gradle",           // Gradle build folder
    "migrations",        // database migrations
];

/// Whether a file path should be analyzed
///
/// True iff no path segment is a deny-listed folder name and the extension
/// is allow-listed. Both comparisons ignore case.
pub fn should_analyze(path: &str) -> bool {
    !has_skipped_folder(path) && has_supported_extension(path)
}

/// Whether any exact path segment is a deny-listed folder name
///
/// Also used to prune directories before descending into them.
pub fn has_skipped_folder(path: &str) -> bool {
    path.split('/').any(|segment| {
        SKIPPED_FOLDERS
            .iter()
            .any(|skipped| segment.eq_ignore_ascii_case(skipped))
    })
}

fn has_supported_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}
