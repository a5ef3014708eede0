#![allow(dead_code)]

mod writer;

use volume_header::{HeaderContext, Volume};

pub use self::writer::Writer;

/// A two-part titled volume with a volume label and two dates.
pub fn volume() -> Volume {
    Volume::new("emory:7tk5v", "The Lost Colony: a history")
        .with_title_parts("The Lost Colony", Some("a history"))
        .with_volume("2")
        .with_date("1923")
        .with_date("1925")
}

/// A context for the volume landing page.
pub fn landing(vol: Volume) -> HeaderContext {
    let path = format!("/books/{}/", vol.pid);
    HeaderContext::new(vol).with_request_path(path)
}

/// A context for some other page.
pub fn elsewhere(vol: Volume) -> HeaderContext {
    HeaderContext::new(vol).with_request_path("/books/")
}
