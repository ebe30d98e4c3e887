//! Watch-listed sensitive API symbols.

/// Photo-library and image-picker symbols flagged for review when
/// found in an embedded binary. Informational only; presence does not
/// affect the compliance verdict.
pub const WATCHED_SYMBOLS: [&str; 6] = [
    "UIImagePickerController",
    "PHPhotoLibrary",
    "PHAsset",
    "PHAssetCollection",
    "PHCollection",
    "PHCollectionList",
];

/// Subset of the watch-list present in a symbol-table dump, in
/// watch-list order. Plain case-sensitive substring search, no
/// demangling.
pub fn find_watched(dump: &str) -> Vec<String> {
    WATCHED_SYMBOLS
        .iter()
        .filter(|sym| dump.contains(*sym))
        .map(|sym| sym.to_string())
        .collect()
}
