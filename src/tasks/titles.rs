//! Localized task titles.

/// Message key of the import task title.
pub const IMPORT_TITLE_KEY: &str = "module.workflow.identityimport.title";
/// Message key of the identify task title.
pub const IDENTIFY_TITLE_KEY: &str = "module.workflow.identityimport.identify.title";
/// Message key of the archive task title.
pub const ARCHIVE_TITLE_KEY: &str = "module.workflow.identityimport.archive.title";

/// Resolves a title key for a locale such as `fr` or `fr_FR`.
///
/// Unknown locales fall back to English; unknown keys resolve to themselves.
#[must_use]
pub fn localized_title(key: &str, locale: &str) -> String {
    let french = locale
        .split(['_', '-'])
        .next()
        .is_some_and(|language| language.eq_ignore_ascii_case("fr"));

    let title = match (key, french) {
        (IMPORT_TITLE_KEY, false) => "Import identity",
        (IMPORT_TITLE_KEY, true) => "Importer l'identité",
        (IDENTIFY_TITLE_KEY, false) => "Identify identity",
        (IDENTIFY_TITLE_KEY, true) => "Identifier l'identité",
        (ARCHIVE_TITLE_KEY, false) => "Archive batch",
        (ARCHIVE_TITLE_KEY, true) => "Archiver le lot",
        _ => key,
    };
    title.to_owned()
}
