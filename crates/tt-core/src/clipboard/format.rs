use std::fmt;

/// Opaque numeric tag identifying a clipboard content type.
///
/// Values follow the Win32 numbering: predefined `CF_*` formats live below
/// `0xC000`, formats registered by name at runtime live in `0xC000..=0xFFFF`
/// and stay stable for the lifetime of the OS session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipboardFormat(pub u32);

impl ClipboardFormat {
    pub const TEXT: Self = Self(1);
    pub const BITMAP: Self = Self(2);
    pub const METAFILEPICT: Self = Self(3);
    pub const SYLK: Self = Self(4);
    pub const DIF: Self = Self(5);
    pub const TIFF: Self = Self(6);
    pub const OEMTEXT: Self = Self(7);
    pub const DIB: Self = Self(8);
    pub const PALETTE: Self = Self(9);
    pub const PENDATA: Self = Self(10);
    pub const RIFF: Self = Self(11);
    pub const WAVE: Self = Self(12);
    pub const UNICODETEXT: Self = Self(13);
    pub const ENHMETAFILE: Self = Self(14);
    pub const HDROP: Self = Self(15);
    pub const LOCALE: Self = Self(16);
    pub const DIBV5: Self = Self(17);
    pub const OWNERDISPLAY: Self = Self(0x0080);
    pub const DSPTEXT: Self = Self(0x0081);
    pub const DSPBITMAP: Self = Self(0x0082);
    pub const DSPMETAFILEPICT: Self = Self(0x0083);
    pub const DSPENHMETAFILE: Self = Self(0x008E);

    pub const PRIVATE_FIRST: u32 = 0x0200;
    pub const PRIVATE_LAST: u32 = 0x02FF;
    pub const GDIOBJ_FIRST: u32 = 0x0300;
    pub const GDIOBJ_LAST: u32 = 0x03FF;
    pub const REGISTERED_FIRST: u32 = 0xC000;

    pub const fn id(self) -> u32 {
        self.0
    }

    /// Whether the format was obtained by name registration.
    pub const fn is_registered(self) -> bool {
        self.0 >= Self::REGISTERED_FIRST
    }

    /// Symbolic name of a predefined format, `None` for registered or unknown ones.
    pub fn predefined_name(self) -> Option<String> {
        let name = match self {
            Self::TEXT => "CF_TEXT",
            Self::BITMAP => "CF_BITMAP",
            Self::METAFILEPICT => "CF_METAFILEPICT",
            Self::SYLK => "CF_SYLK",
            Self::DIF => "CF_DIF",
            Self::TIFF => "CF_TIFF",
            Self::OEMTEXT => "CF_OEMTEXT",
            Self::DIB => "CF_DIB",
            Self::PALETTE => "CF_PALETTE",
            Self::PENDATA => "CF_PENDATA",
            Self::RIFF => "CF_RIFF",
            Self::WAVE => "CF_WAVE",
            Self::UNICODETEXT => "CF_UNICODETEXT",
            Self::ENHMETAFILE => "CF_ENHMETAFILE",
            Self::HDROP => "CF_HDROP",
            Self::LOCALE => "CF_LOCALE",
            Self::DIBV5 => "CF_DIBV5",
            Self::OWNERDISPLAY => "CF_OWNERDISPLAY",
            Self::DSPTEXT => "CF_DSPTEXT",
            Self::DSPBITMAP => "CF_DSPBITMAP",
            Self::DSPMETAFILEPICT => "CF_DSPMETAFILEPICT",
            Self::DSPENHMETAFILE => "CF_DSPENHMETAFILE",
            Self(id) if (Self::GDIOBJ_FIRST..=Self::GDIOBJ_LAST).contains(&id) => {
                return Some(format!("CF_GDIOBJ{}", id - Self::GDIOBJ_FIRST));
            }
            Self(id) if (Self::PRIVATE_FIRST..=Self::PRIVATE_LAST).contains(&id) => {
                return Some(format!("CF_PRIVATE{}", id - Self::PRIVATE_FIRST));
            }
            _ => return None,
        };

        Some(name.to_string())
    }
}

impl From<u32> for ClipboardFormat {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ClipboardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.predefined_name() {
            Some(name) => f.write_str(&name),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_formats_have_symbolic_names() {
        assert_eq!(ClipboardFormat::UNICODETEXT.predefined_name().as_deref(), Some("CF_UNICODETEXT"));
        assert_eq!(ClipboardFormat::TEXT.predefined_name().as_deref(), Some("CF_TEXT"));
        assert_eq!(ClipboardFormat::DSPENHMETAFILE.predefined_name().as_deref(), Some("CF_DSPENHMETAFILE"));
    }

    #[test]
    fn ranged_formats_are_numbered() {
        assert_eq!(ClipboardFormat(0x0305).predefined_name().as_deref(), Some("CF_GDIOBJ5"));
        assert_eq!(ClipboardFormat(0x0200).predefined_name().as_deref(), Some("CF_PRIVATE0"));
        assert_eq!(ClipboardFormat(0x02FF).predefined_name().as_deref(), Some("CF_PRIVATE255"));
    }

    #[test]
    fn registered_and_unknown_formats_have_no_predefined_name() {
        let registered = ClipboardFormat(0xC123);
        assert!(registered.is_registered());
        assert_eq!(registered.predefined_name(), None);
        assert_eq!(ClipboardFormat(0x0050).predefined_name(), None);
        assert!(!ClipboardFormat::TEXT.is_registered());
    }

    #[test]
    fn display_falls_back_to_hex() {
        assert_eq!(ClipboardFormat::HDROP.to_string(), "CF_HDROP");
        assert_eq!(ClipboardFormat(0xC0DE).to_string(), "0xC0DE");
    }
}
