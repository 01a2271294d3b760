/// A file slot on a form.
///
/// A slot is either empty, points at a file the backend already stores
/// (`PersistedUrl`), or holds a file the user picked locally and that has not
/// been uploaded yet (`LocalFile`). Only `LocalFile` ever becomes a binary part
/// of an outgoing request; a `PersistedUrl` tells the backend to keep what it has.
///
/// `F` is the file handle type: `web_sys::File` in the browser, any cheap
/// stand-in in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRef<F> {
    Empty,
    PersistedUrl(String),
    LocalFile(F),
}

impl<F> Default for FileRef<F> {
    fn default() -> Self {
        FileRef::Empty
    }
}

impl<F> FileRef<F> {
    /// Maps a stored URL coming back from the API. Blank URLs become `Empty`.
    pub fn from_url(url: Option<&str>) -> Self {
        match url.map(str::trim) {
            Some(url) if !url.is_empty() => FileRef::PersistedUrl(url.to_string()),
            _ => FileRef::Empty,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, FileRef::Empty)
    }

    /// The file that still needs uploading, if any.
    pub fn local(&self) -> Option<&F> {
        match self {
            FileRef::LocalFile(file) => Some(file),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            FileRef::PersistedUrl(url) => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_urls_map_to_empty() {
        assert_eq!(FileRef::<()>::from_url(None), FileRef::Empty);
        assert_eq!(FileRef::<()>::from_url(Some("  ")), FileRef::Empty);
        assert_eq!(
            FileRef::<()>::from_url(Some("https://cdn/x.png")),
            FileRef::PersistedUrl("https://cdn/x.png".to_string())
        );
    }

    #[test]
    fn only_local_files_are_uploadable() {
        let persisted: FileRef<&str> = FileRef::PersistedUrl("u".into());
        let local = FileRef::LocalFile("banner.png");

        assert!(persisted.is_set());
        assert_eq!(persisted.local(), None);
        assert_eq!(local.local(), Some(&"banner.png"));
        assert!(!FileRef::<&str>::Empty.is_set());
    }
}
