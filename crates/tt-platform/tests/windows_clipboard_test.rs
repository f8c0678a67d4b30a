//! Round trips through the real system clipboard.
//!
//! These touch the desktop clipboard of the user running them, so they are
//! ignored by default: `cargo test -p tt-platform -- --ignored`.
#![cfg(windows)]

use serial_test::serial;
use tt_core::ports::{ClipboardPort, ClipboardSessionPort};
use tt_core::ClipboardFormat;
use tt_platform::clipboard::GlobalBuffer;
use tt_platform::{Clipboard, SystemClipboard};

#[test]
#[serial]
#[ignore]
fn unicode_text_round_trip() {
    let text = "こんにちは<br>world";
    {
        let clip = Clipboard::open().expect("open clipboard");
        clip.write_text(text).expect("write text");
    }

    let clip = Clipboard::open().expect("reopen clipboard");
    assert_eq!(clip.read_text(), text);
    assert!(Clipboard::is_format_available(ClipboardFormat::UNICODETEXT));
}

#[test]
#[serial]
#[ignore]
fn writes_bump_the_sequence_number() {
    let before = Clipboard::sequence_number();
    {
        let clip = Clipboard::open().expect("open clipboard");
        clip.write_text("sequence").expect("write text");
    }
    assert_ne!(Clipboard::sequence_number(), before);
}

#[test]
#[serial]
#[ignore]
fn open_fails_while_held() {
    let _held = Clipboard::open().expect("open clipboard");
    // The lock belongs to this thread; another thread must be turned away.
    let other = std::thread::spawn(|| Clipboard::open().is_err())
        .join()
        .expect("join");
    assert!(other);
}

#[test]
#[serial]
#[ignore]
fn custom_format_raw_round_trip() {
    let format = Clipboard::register_format("vn-text-trim test").expect("register format");
    assert!(format.is_registered());
    assert_eq!(
        Clipboard::format_name(format).as_deref(),
        Some("vn-text-trim test")
    );

    let payload = [1u8, 2, 3, 55, 2];
    {
        let clip = Clipboard::open().expect("open clipboard");
        clip.write_raw(format, &payload).expect("write raw");
    }

    let clip = Clipboard::open().expect("reopen clipboard");
    assert!(clip.size(format) >= payload.len());
    assert_eq!(&clip.read_raw(format)[..payload.len()], &payload);

    let mut short = [0u8; 2];
    assert_eq!(clip.read_raw_into(format, &mut short), 2);
    assert_eq!(short, [1, 2]);
}

#[test]
#[serial]
#[ignore]
fn install_without_clearing_keeps_other_formats() {
    {
        let clip = Clipboard::open().expect("open clipboard");
        clip.write_text("kept").expect("write text");
        let buffer = GlobalBuffer::from_bytes(b"ansi\0").expect("alloc");
        let installed = clip
            .install(ClipboardFormat::TEXT, buffer)
            .expect("install");
        assert_eq!(installed.len, 5);
    }

    let clip = Clipboard::open().expect("reopen clipboard");
    assert_eq!(clip.read_text(), "kept");
    assert_eq!(clip.read_ansi_text(), "ansi");
}

#[test]
#[serial]
#[ignore]
fn system_clipboard_port_round_trip() {
    let port = SystemClipboard::new();
    {
        let session = port.open().expect("open");
        session.write_text("through the port").expect("write");
    }
    let session = port.open().expect("reopen");
    assert_eq!(session.read_text(), "through the port");
}

#[test]
fn predefined_format_names_need_no_clipboard() {
    assert_eq!(
        Clipboard::format_name(ClipboardFormat::UNICODETEXT).as_deref(),
        Some("CF_UNICODETEXT")
    );
}
