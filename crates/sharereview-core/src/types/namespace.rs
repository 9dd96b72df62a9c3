//! App namespaces carried in composite share ids.

/// App namespace of file shares.
pub const FILES_NAMESPACE: &str = "files";

/// Separator between the app namespace and the encoded action.
pub const SEPARATOR: char = '_';

/// Whether `name` can be used as the namespace of an app source.
///
/// The name must survive a split at the first separator and must not
/// shadow the file namespace.
pub fn is_valid_source_namespace(name: &str) -> bool {
    !name.is_empty() && !name.contains(SEPARATOR) && name != FILES_NAMESPACE
}
